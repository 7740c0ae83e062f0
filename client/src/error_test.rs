use super::*;

#[test]
fn display_includes_detail() {
    assert_eq!(ChatError::Status(502).to_string(), "backend rejected request: 502");
    assert_eq!(
        ChatError::Microphone("NotAllowedError".to_owned()).to_string(),
        "microphone unavailable: NotAllowedError"
    );
}

#[test]
fn only_microphone_errors_are_permission_errors() {
    assert!(ChatError::Microphone("denied".to_owned()).is_permission());
    assert!(!ChatError::Capture("x".to_owned()).is_permission());
    assert!(!ChatError::Transport("x".to_owned()).is_permission());
}
