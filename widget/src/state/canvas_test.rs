use payload::{InitialState, Message, MessageMetadata, Role};

use super::*;

fn message(id: &str, html: Option<&str>) -> Message {
    Message {
        id: id.to_owned(),
        role: Role::Agent,
        content: format!("message {id}"),
        timestamp: "9:00".to_owned(),
        table_html: html.map(str::to_owned),
        metadata: None,
    }
}

fn titled(id: &str, html: &str, title: &str) -> Message {
    Message {
        metadata: Some(MessageMetadata {
            canvas_title: Some(title.to_owned()),
            ..MessageMetadata::default()
        }),
        ..message(id, Some(html))
    }
}

// =============================================================
// derive
// =============================================================

#[test]
fn derive_without_fragments_stays_closed_and_empty() {
    let state = CanvasState::derive(&[message("1", None)], None);
    assert_eq!(state, CanvasState::default());
}

#[test]
fn derive_picks_most_recent_fragment() {
    let messages = [
        message("1", Some("<p>old</p>")),
        message("2", Some("<p>newest</p>")),
        message("3", None),
    ];
    let state = CanvasState::derive(&messages, None);
    assert!(state.open);
    assert_eq!(state.html, "<p>newest</p>");
}

#[test]
fn derive_skips_empty_fragments() {
    let messages = [message("1", Some("<p>real</p>")), message("2", Some(""))];
    let state = CanvasState::derive(&messages, None);
    assert_eq!(state.html, "<p>real</p>");
}

#[test]
fn derive_respects_explicit_closed() {
    let initial = InitialState {
        is_canvas_open: Some(false),
        ..InitialState::default()
    };
    let state = CanvasState::derive(&[message("1", Some("<p>x</p>"))], Some(&initial));
    assert!(!state.open);
    assert_eq!(state.html, "<p>x</p>");
}

#[test]
fn derive_explicit_open_without_fragment_shows_empty_panel() {
    let initial = InitialState {
        is_canvas_open: Some(true),
        ..InitialState::default()
    };
    let state = CanvasState::derive(&[], Some(&initial));
    assert!(state.open);
    assert!(!state.has_content());
}

#[test]
fn derive_uses_host_content_when_no_message_has_one() {
    let initial = InitialState {
        canvas_content: Some("<p>host</p>".to_owned()),
        ..InitialState::default()
    };
    let state = CanvasState::derive(&[message("1", None)], Some(&initial));
    assert!(!state.open);
    assert_eq!(state.html, "<p>host</p>");
}

#[test]
fn derive_prefers_message_fragment_over_host_content() {
    let initial = InitialState {
        canvas_content: Some("<p>host</p>".to_owned()),
        ..InitialState::default()
    };
    let state = CanvasState::derive(&[message("1", Some("<p>msg</p>"))], Some(&initial));
    assert_eq!(state.html, "<p>msg</p>");
}

#[test]
fn derive_title_prefers_message_then_host_then_default() {
    let initial = InitialState {
        canvas_title: Some("Host Title".to_owned()),
        ..InitialState::default()
    };

    let from_message = CanvasState::derive(&[titled("1", "<p/>", "Q3 Revenue")], Some(&initial));
    assert_eq!(from_message.title, "Q3 Revenue");

    let from_host = CanvasState::derive(&[message("1", Some("<p/>"))], Some(&initial));
    assert_eq!(from_host.title, "Host Title");

    let fallback = CanvasState::derive(&[message("1", Some("<p/>"))], None);
    assert_eq!(fallback.title, DEFAULT_CANVAS_TITLE);
}

// =============================================================
// toggle / close / show_fragment
// =============================================================

#[test]
fn toggle_closed_with_fragment_reopens_same_fragment() {
    let mut state = CanvasState::derive(&[message("1", Some("<p>keep</p>"))], None);
    state.close();
    state.toggle();
    assert!(state.open);
    assert_eq!(state.html, "<p>keep</p>");
}

#[test]
fn toggle_closed_without_fragment_seeds_sample() {
    let mut state = CanvasState::default();
    state.toggle();
    assert!(state.open);
    assert_eq!(state.html, SAMPLE_TABLE_HTML);
}

#[test]
fn toggle_open_closes_without_forgetting() {
    let mut state = CanvasState::default();
    state.show_fragment("<p>x</p>", None);
    state.toggle();
    assert!(!state.open);
    assert_eq!(state.html, "<p>x</p>");
}

#[test]
fn show_fragment_replaces_content_and_keeps_title_without_override() {
    let mut state = CanvasState::default();
    state.show_fragment("<p>a</p>", Some("First"));
    state.show_fragment("<p>b</p>", None);
    assert!(state.open);
    assert_eq!(state.html, "<p>b</p>");
    assert_eq!(state.title, "First");
}
