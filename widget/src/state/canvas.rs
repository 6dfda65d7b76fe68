//! Canvas side-panel state.
//!
//! DESIGN
//! ======
//! The panel remembers its fragment across close/open cycles. Only a new
//! fragment (from a reply or the first-use demo) replaces it.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use payload::{InitialState, Message};

use crate::state::sample::SAMPLE_TABLE_HTML;

/// Panel title used when neither a message nor the host supplies one.
pub const DEFAULT_CANVAS_TITLE: &str = "Company Data";

/// Open flag, displayed fragment, and title of the canvas panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasState {
    pub open: bool,
    /// Raw fragment as received. Sanitized at render time.
    pub html: String,
    pub title: String,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            open: false,
            html: String::new(),
            title: DEFAULT_CANVAS_TITLE.to_owned(),
        }
    }
}

impl CanvasState {
    /// Derive the load-time panel state from the initial conversation.
    ///
    /// The newest message with a fragment wins. Finding one opens the panel
    /// unless the host explicitly asked for it closed. Without any fragment
    /// the host's `canvasContent` is remembered but the panel only opens on an
    /// explicit `isCanvasOpen: true`.
    pub fn derive(messages: &[Message], initial: Option<&InitialState>) -> Self {
        let requested_open = initial.and_then(|s| s.is_canvas_open);
        let host_title = initial
            .and_then(|s| s.canvas_title.as_deref())
            .filter(|t| !t.is_empty());
        let latest = messages
            .iter()
            .rev()
            .find_map(|m| m.fragment().map(|html| (html, m.canvas_title())));

        let (html, message_title, found) = match latest {
            Some((html, title)) => (html.to_owned(), title, true),
            None => (
                initial
                    .and_then(|s| s.canvas_content.clone())
                    .unwrap_or_default(),
                None,
                false,
            ),
        };

        Self {
            open: requested_open.unwrap_or(found),
            html,
            title: message_title
                .or(host_title)
                .unwrap_or(DEFAULT_CANVAS_TITLE)
                .to_owned(),
        }
    }

    pub fn has_content(&self) -> bool {
        !self.html.is_empty()
    }

    /// Header toggle: close when open, otherwise open, seeding the demo
    /// fragment on first use.
    pub fn toggle(&mut self) {
        if self.open {
            self.open = false;
            return;
        }
        if !self.has_content() {
            self.html = SAMPLE_TABLE_HTML.to_owned();
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Display a new fragment and open the panel.
    pub fn show_fragment(&mut self, html: &str, title: Option<&str>) {
        html.clone_into(&mut self.html);
        if let Some(title) = title {
            title.clone_into(&mut self.title);
        }
        self.open = true;
    }
}
