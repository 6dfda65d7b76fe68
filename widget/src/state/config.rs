//! Display configuration resolved once at load.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use payload::ComponentConfig;

const DEFAULT_AGENT_NAME: &str = "AI Agent";
const DEFAULT_AGENT_STATUS: &str = "Online • Ready to assist";
const DEFAULT_PLACEHOLDER: &str = "Ask me to show you some data...";
const DEFAULT_CANVAS_WIDTH: &str = "24rem";

/// Host overrides merged over the built-in defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub agent_name: String,
    pub agent_status: String,
    pub placeholder: String,
    pub show_canvas_toggle: bool,
    /// CSS length applied to the canvas panel.
    pub canvas_width: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            agent_name: DEFAULT_AGENT_NAME.to_owned(),
            agent_status: DEFAULT_AGENT_STATUS.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            show_canvas_toggle: true,
            canvas_width: DEFAULT_CANVAS_WIDTH.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Resolve a host config. Empty strings count as absent.
    pub fn from_component(config: Option<&ComponentConfig>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        Self {
            agent_name: non_empty(config.agent_name.as_deref()).unwrap_or(defaults.agent_name),
            agent_status: non_empty(config.agent_status.as_deref()).unwrap_or(defaults.agent_status),
            placeholder: non_empty(config.placeholder.as_deref()).unwrap_or(defaults.placeholder),
            show_canvas_toggle: config.show_canvas_toggle.unwrap_or(defaults.show_canvas_toggle),
            canvas_width: config
                .canvas_width
                .as_deref()
                .map(str::trim)
                .filter(|width| is_css_length(width))
                .map_or(defaults.canvas_width, str::to_owned),
        }
    }

    /// Inline style for the canvas panel.
    pub fn canvas_style(&self) -> String {
        format!("width: {};", self.canvas_width)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}

/// Accept plain lengths and `calc(...)`-style expressions; reject anything
/// that could close the declaration and smuggle in other properties.
fn is_css_length(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '%' | '(' | ')' | '+' | '-' | '*' | '/' | ' '))
}
