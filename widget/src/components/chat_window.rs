//! Top-level widget instance: conversation plus canvas panel.
//!
//! DESIGN
//! ======
//! Each instance owns its `ChatState` and `CanvasState` signals, created here
//! and never shared through context, so several embeds on one page cannot
//! interfere. The simulated reply runs as a local task that checks a liveness
//! flag after its delay; teardown clears the flag so a late reply never
//! touches disposed signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::Title;
use payload::AgentChatWindowInput;

use crate::components::canvas_panel::CanvasPanel;
use crate::components::chat_header::ChatHeader;
use crate::components::chat_input::ChatInput;
use crate::components::message_list::MessageList;
use crate::state::canvas::CanvasState;
use crate::state::chat::ChatState;
use crate::state::config::WidgetConfig;
use crate::state::reply::{ReplySource, SimulatedReply, deliver_if_alive};
use crate::state::sample;
use crate::util::clock::{new_message_id, now_display};

/// Chat window with side canvas, seeded from `input` or the built-in sample.
#[component]
pub fn AgentChatWindow(input: Option<AgentChatWindowInput>) -> impl IntoView {
    let input = input.unwrap_or_else(sample::sample_input);
    let config = WidgetConfig::from_component(input.config.as_ref());

    let canvas = RwSignal::new(CanvasState::derive(&input.messages, input.initial_state.as_ref()));
    let chat = RwSignal::new(ChatState::from_messages(input.messages));

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    if let Some(prompt) = chat.try_update(ChatState::resume_pending).flatten() {
        schedule_reply(prompt, chat, canvas, Arc::clone(&alive));
    }

    let on_send = Callback::new(move |text: String| {
        let sent = chat
            .try_update(|c| c.send(&text, new_message_id(), now_display()))
            .flatten();
        if let Some(prompt) = sent {
            schedule_reply(prompt, chat, canvas, Arc::clone(&alive));
        }
    });

    let on_toggle = Callback::new(move |()| canvas.update(CanvasState::toggle));
    let on_close = Callback::new(move |()| canvas.update(CanvasState::close));

    let awaiting = Signal::derive(move || chat.with(ChatState::is_awaiting_reply));
    let canvas_open = Signal::derive(move || canvas.with(|c| c.open));

    view! {
        <Title text=config.agent_name.clone()/>
        <div class="agent-chat">
            <section class="agent-chat__conversation">
                <ChatHeader
                    agent_name=config.agent_name.clone()
                    agent_status=config.agent_status.clone()
                    show_toggle=config.show_canvas_toggle
                    canvas_open=canvas_open
                    on_toggle=on_toggle
                />
                <MessageList chat=chat agent_name=config.agent_name.clone()/>
                <ChatInput on_send=on_send disabled=awaiting placeholder=config.placeholder.clone()/>
            </section>
            <CanvasPanel canvas=canvas on_close=on_close width_style=config.canvas_style()/>
        </div>
    }
}

fn schedule_reply(prompt: String, chat: RwSignal<ChatState>, canvas: RwSignal<CanvasState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "csr")]
    {
        use crate::state::reply::REPLY_DELAY_MS;

        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(REPLY_DELAY_MS)).await;
            deliver_reply(&prompt, chat, canvas, &alive);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        // No timer off the browser; answer immediately.
        deliver_reply(&prompt, chat, canvas, &alive);
    }
}

fn deliver_reply(prompt: &str, chat: RwSignal<ChatState>, canvas: RwSignal<CanvasState>, alive: &AtomicBool) {
    let reply = SimulatedReply
        .reply_to(prompt)
        .into_message(new_message_id(), now_display());
    let landed = chat
        .try_update(|c| canvas.try_update(|v| deliver_if_alive(alive, c, v, reply)))
        .flatten()
        .unwrap_or(false);
    if !landed {
        leptos::logging::log!("dropped reply for unmounted chat window");
    }
}
