use super::*;

fn reply_message(prompt: &str) -> Message {
    SimulatedReply
        .reply_to(prompt)
        .into_message("a1".to_owned(), "9:01 AM".to_owned())
}

#[test]
fn wants_table_matches_keywords_in_any_case() {
    assert!(wants_table("Tell me about the Company"));
    assert!(wants_table("SHOW me"));
    assert!(wants_table("a TaBlE please"));
    assert!(wants_table("metadata"));
    assert!(!wants_table("hello"));
    assert!(!wants_table(""));
}

#[test]
fn data_prompt_reply_carries_sample_table() {
    let reply = reply_message("company numbers");
    assert_eq!(reply.role, Role::Agent);
    assert_eq!(reply.fragment(), Some(SAMPLE_TABLE_HTML));
    assert!(reply.content.contains("prepared a table"));
}

#[test]
fn plain_prompt_reply_has_no_fragment() {
    let reply = reply_message("hello");
    assert_eq!(reply.fragment(), None);
    assert!(reply.metadata.is_none());
}

#[test]
fn draft_title_lands_in_metadata() {
    let draft = ReplyDraft {
        content: "x".to_owned(),
        table_html: Some("<p/>".to_owned()),
        canvas_title: Some("Totals".to_owned()),
    };
    let message = draft.into_message("a1".to_owned(), "now".to_owned());
    assert_eq!(message.canvas_title(), Some("Totals"));
}

#[test]
fn apply_reply_with_fragment_opens_canvas() {
    let mut chat = ChatState::default();
    let mut canvas = CanvasState::default();
    chat.send("Company", "u1".to_owned(), "9:00 AM".to_owned());

    apply_reply(&mut chat, &mut canvas, reply_message("Company"));

    assert!(canvas.open);
    assert_eq!(canvas.html, SAMPLE_TABLE_HTML);
    assert_eq!(chat.messages.len(), 2);
    assert!(!chat.is_awaiting_reply());
}

#[test]
fn apply_reply_without_fragment_leaves_canvas_alone() {
    let mut chat = ChatState::default();
    let mut canvas = CanvasState::default();
    canvas.show_fragment("<p>existing</p>", None);
    canvas.close();
    let before = canvas.clone();
    chat.send("hello", "u1".to_owned(), "9:00 AM".to_owned());

    apply_reply(&mut chat, &mut canvas, reply_message("hello"));

    assert_eq!(canvas, before);
    assert_eq!(chat.messages.len(), 2);
}

#[test]
fn reply_after_teardown_is_dropped() {
    let alive = AtomicBool::new(true);
    let mut chat = ChatState::default();
    let mut canvas = CanvasState::default();
    chat.send("show data", "u1".to_owned(), "9:00 AM".to_owned());
    alive.store(false, Ordering::Relaxed);
    let chat_before = chat.clone();
    let canvas_before = canvas.clone();

    let landed = deliver_if_alive(&alive, &mut chat, &mut canvas, reply_message("show data"));

    assert!(!landed);
    assert_eq!(chat, chat_before);
    assert_eq!(canvas, canvas_before);
}

#[test]
fn reply_while_mounted_lands() {
    let alive = AtomicBool::new(true);
    let mut chat = ChatState::default();
    let mut canvas = CanvasState::default();
    chat.send("show data", "u1".to_owned(), "9:00 AM".to_owned());

    let landed = deliver_if_alive(&alive, &mut chat, &mut canvas, reply_message("show data"));

    assert!(landed);
    assert_eq!(chat.messages.len(), 2);
    assert!(canvas.open);
}
