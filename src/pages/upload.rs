//! Upload page — mocked document ingestion with simulated progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files dropped or selected here never leave the browser. Each queued item
//! gets three progress ticks planned up front (`util::timing`) and applied
//! through the pure `UploadState` transitions; this page only owns the
//! dropzone interaction and the sleep-and-apply shims.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::upload_queue::UploadQueue;
use crate::state::upload::{UploadItem, UploadState};

/// The proceed-to-chat link unlocks once at least one file is queued and
/// everything has finished indexing.
#[must_use]
pub fn chat_gate_open(state: &UploadState) -> bool {
    !state.items.is_empty() && state.all_indexed()
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let files = RwSignal::new(UploadState::default());
    let hovering = RwSignal::new(false);

    // Timers planned on this page must stop mutating state after unmount.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_input = {
        let alive = alive.clone();
        move |ev: leptos::ev::Event| {
            queue_selection(files, &alive, input_selection(&ev));
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        hovering.set(true);
    };
    let on_drag_leave = move |_| hovering.set(false);
    let on_drop = {
        let alive = alive.clone();
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            hovering.set(false);
            queue_selection(files, &alive, dropped_selection(&ev));
        }
    };

    let gate_open = move || chat_gate_open(&files.get());

    view! {
        <main class="page page--upload">
            <section class="upload">
                <div class="upload__head">
                    <div class="kicker">
                        <span class="kicker__rule"></span>
                        "Initialize"
                    </div>
                    <h1>"Deploy Documents"</h1>
                    <p>
                        "Drag files to ingestion zone. Format support: PDF, DOCX, TXT, PPT. \
                         No limits. Secured tunnel."
                    </p>
                </div>

                <label
                    class="dropzone"
                    class:dropzone--hover=move || hovering.get()
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <input type="file" multiple class="dropzone__input" on:change=on_input/>
                    <div class="dropzone__glyph">">>"</div>
                    <div class="dropzone__title">"INGESTION ZONE"</div>
                    <p class="dropzone__hint">
                        "Drag & drop files or tap to select. Multi-format supported."
                    </p>
                    <div class="dropzone__tag">"◆ Encrypted tunnel"</div>
                </label>

                <UploadQueue files=files/>

                <div class="upload__foot">
                    <div class="upload__note">"All files indexed before chat mode."</div>
                    <a
                        href="/chat"
                        class="button button--primary"
                        class:button--locked=move || !gate_open()
                    >
                        "Proceed to Chat"
                    </a>
                </div>
            </section>
        </main>
    }
}

/// Queue a selection and schedule the planned progress ticks for each new
/// item. Empty selections fall through `UploadState::enqueue` as a no-op.
fn queue_selection(files: RwSignal<UploadState>, alive: &Arc<AtomicBool>, selection: Vec<UploadItem>) {
    let mut ids = Vec::new();
    files.update(|state| ids = state.enqueue(selection));
    for id in ids {
        schedule_item_ticks(files, id, alive.clone());
    }
}

/// Sleep out each planned tick, then apply it — unless the page unmounted.
fn schedule_item_ticks(files: RwSignal<UploadState>, id: String, alive: Arc<AtomicBool>) {
    #[cfg(feature = "csr")]
    {
        let mut unit = js_sys::Math::random;
        for tick in crate::util::timing::plan_upload_ticks(&mut unit) {
            let id = id.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let delay = std::time::Duration::from_secs_f64(tick.delay_ms / 1000.0);
                gloo_timers::future::sleep(delay).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                files.update(|state| state.apply_tick(&id, tick.bump));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = (files, id, alive);
}

/// Read the files picked through the hidden input and reset it so the same
/// file can be selected twice in a row.
#[cfg(feature = "csr")]
fn input_selection(ev: &leptos::ev::Event) -> Vec<UploadItem> {
    use wasm_bindgen::JsCast;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let selection = selection_from_list(input.files());
    input.set_value("");
    selection
}

#[cfg(not(feature = "csr"))]
fn input_selection(_ev: &leptos::ev::Event) -> Vec<UploadItem> {
    Vec::new()
}

#[cfg(feature = "csr")]
fn dropped_selection(ev: &leptos::ev::DragEvent) -> Vec<UploadItem> {
    selection_from_list(ev.data_transfer().and_then(|dt| dt.files()))
}

#[cfg(not(feature = "csr"))]
fn dropped_selection(_ev: &leptos::ev::DragEvent) -> Vec<UploadItem> {
    Vec::new()
}

#[cfg(feature = "csr")]
fn selection_from_list(list: Option<web_sys::FileList>) -> Vec<UploadItem> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|file| UploadItem::new(file.name(), file.size()))
        .collect()
}
