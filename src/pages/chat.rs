//! Chat page — mocked document-chat session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the canned document sidebar, the seeded transcript, and the
//! input bar. A valid send appends the user message synchronously through
//! `ChatState::send`; this page then sleeps one randomized delay and calls
//! `deliver_reply` for the canned assistant response.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::doc_sidebar::DocSidebar;
use crate::components::message_bubble::MessageBubble;
use crate::components::typing_indicator::TypingIndicator;
use crate::content;
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::seeded());
    let input = RwSignal::new(String::new());
    let drawer_open = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Reply timers must not touch state after this page unmounts.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // Keep the transcript scrolled to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = {
        let alive = alive.clone();
        move || {
            let mut accepted = false;
            chat.update(|state| accepted = state.send(&input.get()));
            if !accepted {
                return;
            }
            input.set(String::new());
            schedule_reply(chat, alive.clone());
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !chat.get().reply_pending && !input.get().trim().is_empty();
    let doc_count_line =
        format!("{} documents indexed • Zero-knowledge mode active", content::INDEXED_DOCS.len());

    view! {
        <main class="page page--chat">
            <div class="chat-layout">
                <DocSidebar drawer_open=drawer_open/>

                <section class="chat">
                    <header class="chat__head">
                        <div>
                            <h1>"Chat Session"</h1>
                            <p class="chat__meta">{doc_count_line}</p>
                        </div>
                        <button class="chat__docs-toggle" on:click=move |_| drawer_open.set(true)>
                            "Docs"
                        </button>
                    </header>

                    <div class="chat__messages" node_ref=messages_ref>
                        {move || {
                            chat.get()
                                .messages
                                .into_iter()
                                .map(|message| view! { <MessageBubble message=message/> })
                                .collect_view()
                        }}
                        <Show when=move || chat.get().reply_pending>
                            <TypingIndicator/>
                        </Show>
                    </div>

                    <div class="chat__input-bar">
                        <input
                            type="text"
                            class="chat__input"
                            placeholder="Query your documents..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="chat__send"
                            disabled=move || !can_send()
                            on:click=on_click
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </div>
        </main>
    }
}

/// Sleep out the randomized reply delay, then deliver the canned response —
/// unless the page unmounted while the timer was in flight.
fn schedule_reply(chat: RwSignal<ChatState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "csr")]
    {
        let mut unit = js_sys::Math::random;
        let delay_ms = crate::util::timing::reply_delay_ms(&mut unit);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs_f64(delay_ms / 1000.0)).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            chat.update(ChatState::deliver_reply);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = (chat, alive);
}
