//! Scrolling conversation list with typing indicator.

use leptos::prelude::*;

use crate::components::chat_message::{ChatMessageRow, SparkleIcon};
use crate::state::chat::ChatState;

/// All message rows, newest at the bottom. Scrolls to the newest row whenever
/// the conversation or typing state changes.
#[component]
pub fn MessageList(#[prop(into)] chat: Signal<ChatState>, agent_name: String) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let typing = move || chat.with(ChatState::is_awaiting_reply);

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=list_ref>
            <For
                each=move || chat.with(|c| c.messages.clone())
                key=|message| message.id.clone()
                children=move |message| {
                    view! { <ChatMessageRow message=message agent_name=agent_name.clone()/> }
                }
            />
            <Show when=typing>
                <div class="chat-message chat-message--agent typing-indicator" aria-live="polite">
                    <div class="chat-message__avatar">
                        <SparkleIcon/>
                    </div>
                    <div class="typing-indicator__dots">
                        <span class="typing-indicator__dot"></span>
                        <span class="typing-indicator__dot"></span>
                        <span class="typing-indicator__dot"></span>
                    </div>
                </div>
            </Show>
        </div>
    }
}
