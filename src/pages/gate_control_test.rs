use super::*;

#[test]
fn toast_moves_from_pending_to_done_to_hidden() {
    let mut state = ToastState::default();
    let generation = state.start(TriggerAction::StartVehicle);
    assert_eq!(state.current.map(|t| t.phase), Some(ToastPhase::Pending));

    assert!(state.complete(generation));
    assert_eq!(state.current.map(|t| t.phase), Some(ToastPhase::Done));

    assert!(state.hide(generation));
    assert_eq!(state.current, None);
}

#[test]
fn timers_of_a_superseded_toast_leave_the_new_one_alone() {
    let mut state = ToastState::default();
    let first = state.start(TriggerAction::StartVehicle);
    let second = state.start(TriggerAction::StartPedestrian);

    assert!(!state.complete(first));
    assert!(!state.hide(first));
    assert_eq!(
        state.current,
        Some(ActionToast { action: TriggerAction::StartPedestrian, phase: ToastPhase::Pending })
    );
    assert!(state.complete(second));
}

#[test]
fn complete_only_advances_a_pending_toast() {
    let mut state = ToastState::default();
    let generation = state.start(TriggerAction::Stop);
    assert!(state.complete(generation));
    assert!(!state.complete(generation));
}

#[test]
fn toast_text_names_the_pending_action() {
    let pending = ActionToast { action: TriggerAction::StartPedestrian, phase: ToastPhase::Pending };
    assert_eq!(
        toast_text(pending),
        format!("Spracúva sa {}...", TriggerAction::StartPedestrian.pending_label())
    );
    let done = ActionToast { phase: ToastPhase::Done, ..pending };
    assert_eq!(toast_text(done), "Akcia dokončená");
}

#[test]
fn open_buttons_are_labelled_by_audience() {
    assert_eq!(open_button_subtitle(TriggerAction::StartVehicle), "Pre vozidlá");
    assert_eq!(open_button_subtitle(TriggerAction::StartPedestrian), "Pre chodcov");
}
