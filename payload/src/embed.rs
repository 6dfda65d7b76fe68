//! Cross-frame handshake between an embedding host page and the widget.
//!
//! The widget posts `{"type":"request-data"}` to its parent once at mount. A
//! host answers with `{"type":"agent-chat-data","payload":{...}}`. Any other
//! shape is ignored by the receiver.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AgentChatWindowInput, PayloadError};

/// A message exchanged over `postMessage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EmbedMessage {
    /// Outbound: ask the parent frame for data.
    RequestData,
    /// Inbound: the parent frame supplies the widget input.
    AgentChatData { payload: AgentChatWindowInput },
}

impl EmbedMessage {
    /// Interpret a received message body.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] when the value is not a recognized
    /// message or its payload does not match the schema.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        Ok(Self::deserialize(value)?)
    }

    /// The carried input, for data messages.
    #[must_use]
    pub fn into_payload(self) -> Option<AgentChatWindowInput> {
        match self {
            Self::AgentChatData { payload } => Some(payload),
            Self::RequestData => None,
        }
    }

    /// Serialize for posting.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "embed_test.rs"]
mod tests;
