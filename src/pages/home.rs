//! Marketing landing page.
//!
//! Entirely static: renders the hero, feature bullets, performance stats,
//! data-flow strip, architecture cards, and the closing CTA from `content`.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::content;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page page--home">
            <SiteHeader/>

            <section class="home" id="system">
                <div class="home__hero">
                    <div class="kicker">
                        <span class="kicker__rule"></span>
                        "System Ready"
                    </div>
                    <h1 class="home__title">"INTERROGATE YOUR DOCUMENTS."</h1>
                    <p class="home__lede">
                        "Classified document intelligence. Extracted knowledge. Real-time \
                         synthesis from encrypted channels. No logs. No traces."
                    </p>
                </div>

                <div class="home__actions">
                    <a href="/upload" class="button button--primary">
                        "Initialize Upload"
                    </a>
                    <a href="/chat" class="button button--ghost">
                        "Explore Chat"
                    </a>
                </div>

                <div class="home__features">
                    {content::FEATURES
                        .iter()
                        .map(|feature| {
                            view! { <div class="home__feature">"▸ " {*feature}</div> }
                        })
                        .collect_view()}
                </div>

                <div class="panel">
                    <div class="kicker">
                        <span class="kicker__rule"></span>
                        "Performance Metrics"
                    </div>
                    <div class="panel__grid panel__grid--stats">
                        {content::STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class="stat__label">{stat.label}</div>
                                        <div class="stat__value">
                                            {stat.value}
                                            <span class="stat__unit">{stat.unit}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="panel">
                    <div class="kicker">
                        <span class="kicker__rule"></span>
                        "Data Flow"
                    </div>
                    <div class="panel__grid panel__grid--flow">
                        {content::DATA_FLOW
                            .iter()
                            .map(|stage| {
                                view! {
                                    <div class="flow-stage">
                                        <div class="flow-stage__title">{stage.title}</div>
                                        <p>{stage.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="panel">
                    <div class="kicker">
                        <span class="kicker__rule"></span>
                        "Architecture"
                    </div>
                    <div class="panel__grid panel__grid--arch">
                        {content::ARCHITECTURE
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="arch-card">
                                        <div class="arch-card__title">{card.title}</div>
                                        <p>{card.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="home__cta">
                    <div class="home__cta-kicker">"Ready for deployment"</div>
                    <h2>"Activate System"</h2>
                    <p>
                        "Wire your vector store. Plug in your LLM. Deploy classified \
                         intelligence."
                    </p>
                    <div class="home__cta-actions">
                        <a href="/upload" class="button button--primary">
                            "Initialize"
                        </a>
                        <a href="/chat" class="button button--ghost">
                            "Demo"
                        </a>
                    </div>
                </div>
            </section>
        </main>
    }
}
