use super::*;
use crate::util::bubble::Side;

fn fixed_clock() -> String {
    "10:42 AM".to_owned()
}

fn session() -> ChatSession {
    ChatSession::with_clock(fixed_clock)
}

fn rendered(session: &ChatSession) -> Vec<&str> {
    session.view.bubbles.iter().map(|b| b.html.as_str()).collect()
}

// =============================================================
// Reconciliation
// =============================================================

#[test]
fn update_messages_renders_only_unseen_entries_in_order() {
    let mut s = session();
    s.log.append(Message::user("known"));

    let added = s.update_messages(vec![Message::ai("first"), Message::user("known"), Message::ai("second")]);

    assert_eq!(added, 2);
    assert_eq!(rendered(&s), vec!["first", "second"]);
    assert_eq!(s.log.entries().len(), 3);
}

#[test]
fn update_messages_twice_renders_nothing_the_second_time() {
    let mut s = session();
    let history = vec![Message::user("a"), Message::ai("b")];
    s.update_messages(history.clone());
    assert_eq!(s.update_messages(history), 0);
    assert_eq!(s.view.bubbles.len(), 2);
}

#[test]
fn update_messages_attaches_embedded_audio_reply() {
    let mut s = session();
    let content = r#"Sure<audio controls><source src="/static/reply.wav" type="audio/wav"></audio>"#;
    s.update_messages(vec![Message::ai(content)]);

    let bubble = &s.view.bubbles[0];
    assert_eq!(bubble.audio_url.as_deref(), Some("/static/reply.wav"));
    assert_eq!(bubble.html, content);
    assert_eq!(bubble.time_label, "10:42 AM");
}

// =============================================================
// Text submission
// =============================================================

#[test]
fn blank_text_changes_nothing() {
    let mut s = session();
    assert_eq!(s.begin_text_submit("   \t\n"), None);
    assert!(s.view.bubbles.is_empty());
    assert!(s.log.entries().is_empty());
    assert!(!s.view.typing);
    assert_eq!(s.status, StatusLine::default());
}

#[test]
fn text_submit_echoes_before_reply() {
    let mut s = session();
    let sent = s.begin_text_submit("  hello  ");

    assert_eq!(sent.as_deref(), Some("hello"));
    assert_eq!(rendered(&s), vec!["hello"]);
    assert_eq!(s.view.bubbles[0].side, Side::User);
    assert_eq!(s.log.entries(), &[Message::user("hello")]);
    assert!(s.view.typing);
    assert_eq!(s.status.text, status::PROCESSING_TEXT);
    assert!(s.status.active);
}

#[test]
fn server_echo_of_user_message_is_not_rendered_twice() {
    let mut s = session();
    s.begin_text_submit("hello");

    let celebrated = s.finish_request(
        InputPath::Text,
        Ok(Some(vec![Message::user("hello"), Message::ai("hi there")])),
    );

    assert!(celebrated);
    assert_eq!(rendered(&s), vec!["hello", "hi there"]);
    assert_eq!(s.log.entries(), &[Message::user("hello"), Message::ai("hi there")]);
    assert!(!s.view.typing);
    assert_eq!(s.status, StatusLine { text: status::TEXT_REPLY_RECEIVED.to_owned(), active: false, error: false });
    assert_eq!(s.celebrations, 1);
}

#[test]
fn repeated_user_text_is_echoed_but_logged_once() {
    let mut s = session();
    s.begin_text_submit("again");
    s.begin_text_submit("again");
    assert_eq!(s.view.bubbles.len(), 2);
    assert_eq!(s.log.entries().len(), 1);
}

#[test]
fn reply_without_history_only_clears_typing() {
    let mut s = session();
    s.begin_text_submit("hello");
    assert!(!s.finish_request(InputPath::Text, Ok(None)));
    assert!(!s.view.typing);
    assert_eq!(s.view.bubbles.len(), 1);
    assert_eq!(s.status.text, status::PROCESSING_TEXT);
    assert_eq!(s.celebrations, 0);
}

#[test]
fn failed_text_request_renders_one_error_bubble() {
    let mut s = session();
    s.begin_text_submit("hello");
    assert!(!s.finish_request(InputPath::Text, Err(ChatError::Transport("offline".to_owned()))));

    assert_eq!(rendered(&s), vec!["hello", "❌ Text processing failed."]);
    assert_eq!(s.view.bubbles[1].side, Side::Ai);
    assert!(!s.view.typing);
    assert_eq!(s.status, StatusLine { text: status::ERROR_OCCURRED.to_owned(), active: true, error: true });
    assert_eq!(s.log.entries().len(), 1, "error bubbles are not logged");
}

// =============================================================
// Voice
// =============================================================

#[test]
fn microphone_denial_leaves_recorder_idle_with_one_error() {
    let mut s = session();
    assert!(s.begin_microphone_request());
    s.recording_failed();

    assert_eq!(s.recorder, RecorderPhase::Idle);
    assert_eq!(s.recorder.button_icon(), "fas fa-microphone");
    assert_eq!(rendered(&s), vec!["❌ Microphone access denied."]);
    assert!(s.status.error);
}

#[test]
fn recording_started_reports_recording_status() {
    let mut s = session();
    s.begin_microphone_request();
    s.recording_started();
    assert!(s.recorder.is_recording());
    assert_eq!(s.status.text, status::RECORDING);
    assert!(s.status.active);
}

#[test]
fn voice_upload_success_uses_voice_status() {
    let mut s = session();
    s.begin_microphone_request();
    s.recording_started();
    assert!(s.recording_stopped());
    s.begin_voice_upload();
    assert!(s.view.typing);
    assert_eq!(s.status.text, status::PROCESSING_VOICE);

    s.finish_request(InputPath::Voice, Ok(Some(vec![Message::user("spoken"), Message::ai("answer")])));
    assert_eq!(rendered(&s), vec!["spoken", "answer"]);
    assert_eq!(s.status.text, status::VOICE_REPLY_RECEIVED);
}

#[test]
fn voice_upload_failure_uses_voice_message() {
    let mut s = session();
    s.begin_voice_upload();
    s.finish_request(InputPath::Voice, Err(ChatError::Status(500)));
    assert_eq!(rendered(&s), vec!["❌ Voice processing failed."]);
}
