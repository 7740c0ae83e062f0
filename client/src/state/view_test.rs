use super::*;
use crate::util::bubble::Side;

#[test]
fn add_message_appends_with_increasing_keys() {
    let mut view = ChatView::default();
    let a = view.add_message("one", "user", None, "01:00 PM".to_owned());
    let b = view.add_message("two", "ai", Some("/r.wav".to_owned()), "01:01 PM".to_owned());

    assert!(b > a);
    assert_eq!(view.bubbles.len(), 2);
    assert_eq!(view.bubbles[0].side, Side::User);
    assert_eq!(view.bubbles[1].audio_url.as_deref(), Some("/r.wav"));
    assert_eq!(view.bubbles[1].time_label, "01:01 PM");
}

#[test]
fn show_typing_indicator_is_idempotent() {
    let mut view = ChatView::default();
    view.show_typing_indicator();
    view.show_typing_indicator();
    assert!(view.typing);
    assert!(view.bubbles.is_empty());
}

#[test]
fn remove_typing_indicator_without_one_is_noop() {
    let mut view = ChatView::default();
    view.remove_typing_indicator();
    assert!(!view.typing);

    view.show_typing_indicator();
    view.remove_typing_indicator();
    assert!(!view.typing);
}
