//! Cross-frame bridge to an embedding host page.
//!
//! On mount the widget posts `request-data` to its parent frame (only when it
//! actually runs inside one) and listens for an `agent-chat-data` reply. The
//! reply may land after the first render; the listener callback swaps in the
//! real payload whenever it arrives. The listener is removed when the owning
//! component is torn down.
//!
//! All `web-sys` glue is gated behind the `csr` feature; off the browser the
//! functions are inert.

#[cfg(test)]
#[path = "embed_test.rs"]
mod embed_test;

use payload::{AgentChatWindowInput, EmbedMessage};

/// Extract a payload from a received message body. Unrecognized messages
/// yield `None`.
pub fn accept_message(data: &serde_json::Value) -> Option<AgentChatWindowInput> {
    // Unrelated postMessage traffic is common; it is not an error here.
    match EmbedMessage::from_value(data) {
        Ok(message) => message.into_payload(),
        Err(_) => None,
    }
}

#[cfg(feature = "csr")]
fn parent_frame() -> Option<web_sys::Window> {
    let window = web_sys::window()?;
    let parent = match window.parent() {
        Ok(parent) => parent?,
        Err(e) => {
            leptos::logging::warn!("parent frame unavailable: {e:?}");
            return None;
        }
    };
    (!js_sys::Object::is(&parent, &window)).then_some(parent)
}

/// Whether the widget runs inside a nested browsing context.
pub fn is_embedded() -> bool {
    #[cfg(feature = "csr")]
    {
        parent_frame().is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Ask the parent frame for data. Fire-and-forget; no-op when top-level.
pub fn request_parent_data() {
    #[cfg(feature = "csr")]
    {
        let Some(parent) = parent_frame() else {
            return;
        };
        let message = match EmbedMessage::RequestData.to_json() {
            Ok(json) => json,
            Err(e) => {
                leptos::logging::warn!("request-data encode failed: {e}");
                return;
            }
        };
        let Ok(value) = js_sys::JSON::parse(&message) else {
            return;
        };
        if let Err(e) = parent.post_message(&value, "*") {
            leptos::logging::warn!("request-data post failed: {e:?}");
        }
    }
}

/// Register a window `message` listener that forwards host payloads to
/// `on_payload`, removing it when the current reactive owner is cleaned up.
#[cfg(feature = "csr")]
pub fn listen(on_payload: impl Fn(AgentChatWindowInput) + 'static) {
    use leptos::prelude::{on_cleanup, window_event_listener};

    let handle = window_event_listener(leptos::ev::message, move |ev: web_sys::MessageEvent| {
        let Some(value) = js_value_to_json(&ev.data()) else {
            return;
        };
        if let Some(payload) = accept_message(&value) {
            leptos::logging::log!("received host payload with {} messages", payload.messages.len());
            on_payload(payload);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Off the browser there is no window to listen on.
#[cfg(not(feature = "csr"))]
pub fn listen(_on_payload: impl Fn(AgentChatWindowInput) + 'static) {}

#[cfg(feature = "csr")]
fn js_value_to_json(value: &wasm_bindgen::JsValue) -> Option<serde_json::Value> {
    let text = match js_sys::JSON::stringify(value) {
        Ok(text) => text.as_string()?,
        Err(e) => {
            leptos::logging::warn!("message data is not serializable: {e:?}");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("message data is not JSON: {e}");
            None
        }
    }
}
