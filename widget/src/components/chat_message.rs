//! A single conversation row.

use leptos::prelude::*;
use payload::{Message, Role};

/// One message with avatar, author, timestamp, and text.
#[component]
pub fn ChatMessageRow(message: Message, agent_name: String) -> impl IntoView {
    let is_agent = message.role == Role::Agent;
    let author = if is_agent { agent_name } else { "You".to_owned() };

    view! {
        <div
            class="chat-message"
            class:chat-message--agent=is_agent
            class:chat-message--user=!is_agent
        >
            <div class="chat-message__avatar">
                {if is_agent { view! { <SparkleIcon/> }.into_any() } else { view! { <UserIcon/> }.into_any() }}
            </div>
            <div class="chat-message__body">
                <div class="chat-message__meta">
                    <span class="chat-message__author">{author}</span>
                    <span class="chat-message__time">{message.timestamp}</span>
                </div>
                <p class="chat-message__text">{message.content}</p>
            </div>
        </div>
    }
}

/// Agent avatar glyph, shared with the header and typing indicator.
#[component]
pub fn SparkleIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
            <path d="M10 2 L11.8 8.2 L18 10 L11.8 11.8 L10 18 L8.2 11.8 L2 10 L8.2 8.2 Z" />
        </svg>
    }
}

#[component]
fn UserIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="7" r="3.5" />
            <path d="M3.5 17 C4.5 13 7 11.5 10 11.5 C13 11.5 15.5 13 16.5 17" />
        </svg>
    }
}
