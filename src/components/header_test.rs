use super::*;

#[test]
fn every_action_has_distinct_quick_label() {
    let labels: Vec<_> = TriggerAction::ALL.into_iter().map(quick_label).collect();
    assert_eq!(labels, vec!["Vehicles", "Pedestrians", "Close"]);
}

#[test]
fn close_button_is_styled_apart() {
    assert!(quick_class(TriggerAction::Stop).contains("--close"));
    assert!(!quick_class(TriggerAction::StartVehicle).contains("--close"));
    assert_eq!(quick_aria_label(TriggerAction::Stop), "Close gate");
}
