//! Conversation header with the canvas toggle.

use leptos::prelude::*;

use crate::components::chat_message::SparkleIcon;

#[component]
pub fn ChatHeader(
    agent_name: String,
    agent_status: String,
    show_toggle: bool,
    #[prop(into)] canvas_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="chat-header">
            <div class="chat-header__agent">
                <div class="chat-header__badge">
                    <SparkleIcon/>
                </div>
                <div>
                    <h1 class="chat-header__name">{agent_name}</h1>
                    <p class="chat-header__status">{agent_status}</p>
                </div>
            </div>
            <Show when=move || show_toggle>
                <button class="btn btn--outline chat-header__toggle" on:click=move |_| on_toggle.run(())>
                    <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                        <rect x="2.5" y="3.5" width="15" height="13" rx="1.5" />
                        <path d="M12.5 3.5 V16.5" />
                    </svg>
                    <span class="chat-header__toggle-label">
                        {move || if canvas_open.get() { "Hide Canvas" } else { "Show Canvas" }}
                    </span>
                </button>
            </Show>
        </header>
    }
}
