//! Upload queue listing each selected file with its simulated progress.

use leptos::prelude::*;

use crate::state::upload::UploadState;

/// Queue panel below the dropzone. Shows a placeholder until the first
/// selection, then one row per item, newest first.
#[component]
pub fn UploadQueue(files: RwSignal<UploadState>) -> impl IntoView {
    let count_label = move || {
        let count = files.get().items.len();
        match count {
            0 => "—".to_owned(),
            1 => "1 file".to_owned(),
            n => format!("{n} files"),
        }
    };

    view! {
        <div class="upload-queue">
            <div class="upload-queue__bar">
                <span>"Upload Queue"</span>
                <span class="upload-queue__count">{count_label}</span>
            </div>
            {move || {
                let items = files.get().items;
                if items.is_empty() {
                    return view! {
                        <div class="upload-queue__empty">"No files queued."</div>
                    }
                        .into_any();
                }
                items
                    .into_iter()
                    .map(|item| {
                        let fill_style = format!("width:{}%", item.progress);
                        view! {
                            <div class="upload-row">
                                <div class="upload-row__meta">
                                    <div class="upload-row__name">{item.name}</div>
                                    <div class="upload-row__size">{item.display_size}</div>
                                </div>
                                <div class="upload-row__progress">
                                    <div class="upload-row__readout">
                                        <span>{item.status.label()}</span>
                                        <span class="upload-row__pct">
                                            {format!("{}%", item.progress.round())}
                                        </span>
                                    </div>
                                    <div class="upload-row__track">
                                        <div class="upload-row__fill" style=fill_style></div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
