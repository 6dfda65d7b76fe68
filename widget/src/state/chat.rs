//! Conversation state and the send/reply cycle.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use payload::{Message, Role};

/// Where the current exchange stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplyPhase {
    #[default]
    Idle,
    /// A user message was sent and the agent has not answered yet. The
    /// typing indicator shows and the input is disabled.
    AwaitingReply,
}

/// Ordered, append-only message list plus the exchange phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub phase: ReplyPhase,
}

impl ChatState {
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            phase: ReplyPhase::Idle,
        }
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == ReplyPhase::AwaitingReply
    }

    /// Append a user message and start waiting for the reply.
    ///
    /// Returns the sent text, or `None` when the input is blank or a reply is
    /// already pending.
    pub fn send(&mut self, content: &str, id: String, timestamp: String) -> Option<String> {
        let text = content.trim();
        if text.is_empty() || self.is_awaiting_reply() {
            return None;
        }

        self.messages.push(Message {
            id,
            role: Role::User,
            content: text.to_owned(),
            timestamp,
            table_html: None,
            metadata: None,
        });
        self.phase = ReplyPhase::AwaitingReply;
        Some(text.to_owned())
    }

    /// Pick up a conversation that was loaded ending on a user message.
    ///
    /// Moves to `AwaitingReply` and returns that message's text so the caller
    /// can schedule the answer. Returns `None` when a reply is already pending
    /// or the last message is not from the user.
    pub fn resume_pending(&mut self) -> Option<String> {
        if self.is_awaiting_reply() {
            return None;
        }
        let last = self.messages.last().filter(|m| m.role == Role::User)?;
        let prompt = last.content.clone();
        self.phase = ReplyPhase::AwaitingReply;
        Some(prompt)
    }

    /// Append the agent reply and return to idle.
    pub fn complete_reply(&mut self, reply: Message) {
        self.messages.push(reply);
        self.phase = ReplyPhase::Idle;
    }
}
