//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, home::HomePage, upload::UploadPage};

/// Root application component.
///
/// Pages own their state locally — nothing is shared across routes, so no
/// contexts are provided here beyond routing and metadata.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CatNova | AI PDF Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("upload") view=UploadPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
