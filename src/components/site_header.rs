//! Sticky landing-page header with section nav and the access CTA.

use leptos::prelude::*;

/// Top navigation bar for the marketing page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <div class="site-header__mark"></div>
                    <span class="site-header__name">"CATNOVA"</span>
                </div>
                <nav class="site-header__nav">
                    <a href="/#system">"System"</a>
                    <a href="/upload">"Upload"</a>
                    <a href="/chat">"Chat"</a>
                </nav>
                <a href="/upload" class="site-header__cta">
                    "Access"
                </a>
            </div>
        </header>
    }
}
