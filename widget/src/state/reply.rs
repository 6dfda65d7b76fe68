//! Agent reply generation.
//!
//! The widget ships without a backend. `SimulatedReply` answers locally after
//! a fixed delay, attaching the demonstration table whenever the prompt looks
//! like a data request. A real agent integration implements [`ReplySource`].

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use std::sync::atomic::{AtomicBool, Ordering};

use payload::{Message, MessageMetadata, Role};

use crate::state::canvas::CanvasState;
use crate::state::chat::ChatState;
use crate::state::sample::SAMPLE_TABLE_HTML;

/// Delay before the simulated agent answers.
pub const REPLY_DELAY_MS: u64 = 1500;

const TABLE_KEYWORDS: [&str; 4] = ["data", "table", "show", "company"];

const TABLE_REPLY: &str =
    "I've analyzed the company data and prepared a table for you. Opening it in the canvas panel now.";
const PLAIN_REPLY: &str = "I understand your request. Feel free to ask me to show data tables, \
                           and I'll display them in the canvas panel on the right.";

/// Reply content before it gets an id and timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyDraft {
    pub content: String,
    pub table_html: Option<String>,
    pub canvas_title: Option<String>,
}

impl ReplyDraft {
    pub fn into_message(self, id: String, timestamp: String) -> Message {
        Message {
            id,
            role: Role::Agent,
            content: self.content,
            timestamp,
            table_html: self.table_html,
            metadata: self.canvas_title.map(|title| MessageMetadata {
                canvas_title: Some(title),
                ..MessageMetadata::default()
            }),
        }
    }
}

/// Something that can answer a user prompt.
pub trait ReplySource {
    fn reply_to(&self, prompt: &str) -> ReplyDraft;
}

/// Keyword-driven stand-in for a real agent.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedReply;

impl ReplySource for SimulatedReply {
    fn reply_to(&self, prompt: &str) -> ReplyDraft {
        if wants_table(prompt) {
            ReplyDraft {
                content: TABLE_REPLY.to_owned(),
                table_html: Some(SAMPLE_TABLE_HTML.to_owned()),
                canvas_title: None,
            }
        } else {
            ReplyDraft {
                content: PLAIN_REPLY.to_owned(),
                table_html: None,
                canvas_title: None,
            }
        }
    }
}

/// Case-insensitive keyword test for data requests.
pub fn wants_table(prompt: &str) -> bool {
    let lower = prompt.to_lowercase();
    TABLE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Append a reply and surface its fragment, if any, in the canvas.
pub fn apply_reply(chat: &mut ChatState, canvas: &mut CanvasState, reply: Message) {
    if let Some(html) = reply.fragment() {
        canvas.show_fragment(html, reply.canvas_title());
    }
    chat.complete_reply(reply);
}

/// Apply a delayed reply only while its widget instance is still mounted.
/// Returns whether the reply landed.
pub fn deliver_if_alive(alive: &AtomicBool, chat: &mut ChatState, canvas: &mut CanvasState, reply: Message) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    apply_reply(chat, canvas, reply);
    true
}
