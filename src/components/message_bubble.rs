//! One transcript entry with its role badge.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, Role};

/// A single chat message row. Assistant messages carry their badge on the
/// left, user messages on the right.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.role == Role::Assistant;
    view! {
        <div class="message-row">
            <Show when=move || is_assistant>
                <div class="message-row__badge message-row__badge--assistant">"■"</div>
            </Show>
            <div class=if is_assistant {
                "message-row__bubble message-row__bubble--assistant"
            } else {
                "message-row__bubble message-row__bubble--user"
            }>
                <p>{message.content.clone()}</p>
            </div>
            <Show when=move || !is_assistant>
                <div class="message-row__badge message-row__badge--user">"◆"</div>
            </Show>
        </div>
    }
}
