//! Chat-page sidebar listing the canned indexed documents.
//!
//! On narrow viewports the sidebar doubles as a dismissable drawer; on wide
//! viewports it is always visible and the close button is hidden by CSS.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn DocSidebar(drawer_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <aside class="doc-sidebar" class:doc-sidebar--open=move || drawer_open.get()>
            <div class="doc-sidebar__head">
                <div class="doc-sidebar__title">"Documents"</div>
                <button class="doc-sidebar__close" on:click=move |_| drawer_open.set(false)>
                    "✕"
                </button>
            </div>
            <div class="doc-sidebar__list">
                {content::INDEXED_DOCS
                    .iter()
                    .map(|doc| {
                        view! {
                            <div class="doc-sidebar__doc">
                                <div class="doc-sidebar__doc-name">{doc.name}</div>
                                <div class="doc-sidebar__doc-status">{doc.status.label()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="doc-sidebar__foot">
                <a href="/upload" class="doc-sidebar__add">
                    "Add Documents"
                </a>
            </div>
        </aside>
    }
}
