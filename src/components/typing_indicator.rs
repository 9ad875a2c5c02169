//! Three-dot indicator shown while the mocked assistant reply is pending.

use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message-row">
            <div class="message-row__badge message-row__badge--assistant">"■"</div>
            <div class="typing-indicator">
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
            </div>
        </div>
    }
}
