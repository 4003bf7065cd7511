use gatewire::GateState;

use super::*;

fn trigger(kind: &str) -> TriggerRecord {
    TriggerRecord { id: 1, timestamp: None, trigger_type: kind.to_owned(), username: None }
}

#[test]
fn state_history_requires_admin() {
    assert!(HistoryTab::Triggers.available(false));
    assert!(!HistoryTab::States.available(false));
    assert!(HistoryTab::States.available(true));
}

#[test]
fn trigger_rows_are_coloured_by_audience() {
    assert_eq!(trigger_class(&trigger("start_v")), "history__type history__type--vehicle");
    assert_eq!(trigger_class(&trigger("start_p")), "history__type history__type--pedestrian");
    assert_eq!(trigger_class(&trigger("manual")), "history__type");
}

#[test]
fn state_rows_use_gate_tone() {
    let record = StateRecord { id: 7, timestamp: None, gate_state: GateState::Closed };
    assert_eq!(
        state_class(&record),
        format!("history__type history__type--{}", GateState::Closed.tone().css_modifier())
    );
}

#[test]
fn empty_pages_are_detected_per_tab() {
    assert!(HistoryRows::Triggers(Vec::new()).is_empty());
    assert!(!HistoryRows::Triggers(vec![trigger("stop")]).is_empty());
    assert!(HistoryRows::States(Vec::new()).is_empty());
}

#[test]
fn tabs_carry_slovak_labels() {
    assert_eq!(HistoryTab::Triggers.label(), "História spúšťačov");
    assert_eq!(HistoryTab::States.label(), "História stavov");
}
