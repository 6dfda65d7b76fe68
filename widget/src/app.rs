//! Root component: resolves the widget input and mounts the chat window.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::components::chat_window::AgentChatWindow;
use crate::net::{embed, input_source};

/// Root application component.
///
/// URL parameters are read once at mount. Without them the widget renders the
/// built-in sample right away and, when embedded, asks the parent frame for
/// data; a host payload arriving later replaces the window wholesale.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let input = RwSignal::new(input_source::resolve_from_location());

    if input.with_untracked(Option::is_none) {
        embed::listen(move |payload| input.set(Some(payload)));
        if embed::is_embedded() {
            embed::request_parent_data();
        } else {
            leptos::logging::log!("no widget input supplied; showing sample conversation");
        }
    }

    view! {
        <main class="agent-chat-root">
            {move || view! { <AgentChatWindow input=input.get()/> }}
        </main>
    }
}
