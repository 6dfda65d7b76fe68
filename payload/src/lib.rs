//! Shared input schema and codecs for the agent chat window.
//!
//! This crate owns the JSON shape a host uses to configure an embedded widget
//! (`AgentChatWindowInput`) plus the two transports that carry it: URL query
//! parameters (`codec`) and cross-frame messages (`embed`). Both the `widget`
//! and the `chat-url` CLI depend on it so the encoder and decoder cannot drift.

pub mod codec;
pub mod embed;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use codec::{
    PayloadError, QueryParam, decode_base64, decode_url_json, encode_base64, form_decode, parse_json,
    widget_url,
};
pub use embed::EmbedMessage;

/// Author of a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the person using the widget.
    User,
    /// Message produced by the agent.
    Agent,
}

/// A single conversation entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identifier, unique within one conversation.
    pub id: String,
    /// Who wrote the message.
    pub role: Role,
    /// Plain text body.
    pub content: String,
    /// Pre-formatted display time. Never parsed.
    pub timestamp: String,
    /// HTML fragment to show in the canvas panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
}

impl Message {
    /// The attached fragment, if present and non-empty.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.table_html.as_deref().filter(|html| !html.is_empty())
    }

    /// Canvas title override carried in metadata.
    #[must_use]
    pub fn canvas_title(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|meta| meta.canvas_title.as_deref())
            .filter(|title| !title.is_empty())
    }
}

/// Optional per-message hints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_typing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_title: Option<String>,
    /// Interactive actions reserved for hosts; carried through but not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MessageAction>>,
}

/// A label/action/payload triple attached to a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageAction {
    pub label: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Map<String, Value>>,
}

/// Load-time hints for the canvas panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialState {
    /// `Some(false)` keeps the panel closed even when a fragment is found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_canvas_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_title: Option<String>,
}

/// Display-only overrides, read once at load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_canvas_toggle: Option<bool>,
    /// CSS length for the canvas panel, e.g. `"480px"` or `"40%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<String>,
}

/// Everything a host can hand to one widget instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentChatWindowInput {
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<InitialState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
