use super::*;

#[test]
fn full_cycle_returns_to_idle() {
    let mut phase = RecorderPhase::default();
    assert!(phase.request());
    assert_eq!(phase, RecorderPhase::Starting);
    assert!(phase.started());
    assert!(phase.is_recording());
    assert!(phase.stop());
    assert_eq!(phase, RecorderPhase::Idle);
}

#[test]
fn second_request_while_starting_or_recording_is_refused() {
    let mut phase = RecorderPhase::default();
    assert!(phase.request());
    assert!(!phase.request());
    assert!(phase.started());
    assert!(!phase.request());
    assert_eq!(phase, RecorderPhase::Recording);
}

#[test]
fn failed_start_falls_back_to_idle() {
    let mut phase = RecorderPhase::default();
    phase.request();
    phase.failed();
    assert_eq!(phase, RecorderPhase::Idle);
    assert!(!phase.started());
}

#[test]
fn stop_from_idle_is_refused() {
    let mut phase = RecorderPhase::Idle;
    assert!(!phase.stop());
}

#[test]
fn button_icon_only_changes_while_recording() {
    assert_eq!(RecorderPhase::Idle.button_icon(), "fas fa-microphone");
    assert_eq!(RecorderPhase::Starting.button_icon(), "fas fa-microphone");
    assert_eq!(RecorderPhase::Recording.button_icon(), "fas fa-stop");
}
