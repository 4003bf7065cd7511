use super::*;

#[test]
fn dismiss_clears_matching_generation() {
    let mut state = FlashState::default();
    let generation = state.show(FlashKind::Success, "EČV bola úspešne pridaná");
    assert!(state.dismiss(generation));
    assert_eq!(state.current, None);
}

#[test]
fn stale_timer_leaves_newer_banner() {
    let mut state = FlashState::default();
    let first = state.show(FlashKind::Success, "EČV bola úspešne pridaná");
    let second = state.show(FlashKind::Error, "Nepodarilo sa odstrániť EČV");
    assert!(!state.dismiss(first));
    assert_eq!(state.current.as_ref().map(|flash| flash.kind), Some(FlashKind::Error));
    assert!(state.dismiss(second));
}

#[test]
fn dismiss_after_clear_reports_nothing_to_do() {
    let mut state = FlashState::default();
    let generation = state.show(FlashKind::Error, "x");
    state.clear();
    assert!(!state.dismiss(generation));
}
