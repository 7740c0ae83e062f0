use super::*;

#[test]
fn message_constructors_set_wire_roles() {
    assert_eq!(Message::user("hi").role, "user");
    assert_eq!(Message::ai("hello").role, "ai");
}

#[test]
fn history_reply_parses_history_list() {
    let raw = r#"{"history":[{"role":"user","content":"hello"},{"role":"ai","content":"hi there"}]}"#;
    let reply: HistoryReply = serde_json::from_str(raw).unwrap();
    assert_eq!(reply.history, Some(vec![Message::user("hello"), Message::ai("hi there")]));
}

#[test]
fn history_reply_tolerates_missing_or_null_history() {
    let missing: HistoryReply = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
    let null: HistoryReply = serde_json::from_str(r#"{"history":null}"#).unwrap();
    assert!(missing.history.is_none());
    assert!(null.history.is_none());
}
