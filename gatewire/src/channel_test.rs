use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn open_machine() -> ChannelMachine {
    let mut machine = ChannelMachine::default();
    assert!(machine.begin_connect());
    assert!(machine.opened());
    machine
}

// =============================================================
// Scope URLs
// =============================================================

#[test]
fn token_scope_builds_token_query() {
    let scope = ChannelScope::Token("abc.def".to_owned());
    assert_eq!(scope.socket_url("wss://gate.example.com"), "wss://gate.example.com/ws/gate/?token=abc.def");
}

#[test]
fn link_scope_builds_temp_access_query_and_trims_base() {
    let scope = ChannelScope::TempLink("L49HnA4DA84GUPXR".to_owned());
    assert_eq!(
        scope.socket_url("ws://localhost:8000/"),
        "ws://localhost:8000/ws/gate/?temp_access_link=L49HnA4DA84GUPXR"
    );
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn starts_closed_with_unknown_gate() {
    let machine = ChannelMachine::default();
    assert_eq!(machine.status(), ChannelStatus::Closed);
    assert_eq!(machine.gate(), GateState::Unknown);
}

#[test]
fn consecutive_failures_follow_backoff_formula() {
    let mut machine = ChannelMachine::default();
    let mut delays = Vec::new();
    for _ in 0..8 {
        assert!(machine.begin_connect());
        delays.push(machine.closed().unwrap());
    }
    assert_eq!(
        delays,
        vec![ms(250), ms(500), ms(1000), ms(2000), ms(4000), ms(8000), ms(10_000), ms(10_000)]
    );
    assert_eq!(machine.failed_attempts(), 8);
}

#[test]
fn open_resets_backoff() {
    let mut machine = ChannelMachine::default();
    machine.begin_connect();
    machine.closed();
    machine.begin_connect();
    machine.closed();
    machine.begin_connect();
    machine.opened();
    assert_eq!(machine.failed_attempts(), 0);
    assert_eq!(machine.closed(), Some(ms(250)));
}

#[test]
fn disposal_halts_reconnection() {
    let mut machine = open_machine();
    machine.dispose();
    assert_eq!(machine.closed(), None);
    assert!(!machine.begin_connect());
    assert!(!machine.opened());
    assert_eq!(machine.status(), ChannelStatus::Disposed);
}

#[test]
fn disposal_during_backoff_prevents_the_pending_attempt() {
    let mut machine = ChannelMachine::default();
    machine.begin_connect();
    assert!(machine.closed().is_some());
    // Timer is sleeping here when the owner tears down.
    machine.dispose();
    assert!(!machine.begin_connect());
}

#[test]
fn dispose_is_idempotent() {
    let mut machine = ChannelMachine::default();
    machine.dispose();
    machine.dispose();
    assert!(machine.is_disposed());
}

// =============================================================
// Inbound frames
// =============================================================

#[test]
fn status_frames_replace_gate_state_last_wins() {
    let mut machine = open_machine();
    assert_eq!(
        machine.receive_text(r#"{"type":"status","message":"opening_v"}"#).unwrap(),
        Some(GateState::OpeningV)
    );
    machine.receive_text(r#"{"type":"status","message":"open_v"}"#).unwrap();
    machine.receive_text(r#"{"type":"status","message":"closing"}"#).unwrap();
    assert_eq!(machine.gate(), GateState::Closing);
}

#[test]
fn echoed_trigger_frames_do_not_touch_state() {
    let mut machine = open_machine();
    machine.receive(ChannelMessage::Status(GateState::Closed));
    assert_eq!(machine.receive(ChannelMessage::Trigger(TriggerAction::Stop)), None);
    assert_eq!(machine.gate(), GateState::Closed);
}

#[test]
fn bad_frame_leaves_state_untouched() {
    let mut machine = open_machine();
    machine.receive(ChannelMessage::Status(GateState::OpenP));
    assert!(machine.receive_text("{").is_err());
    assert_eq!(machine.gate(), GateState::OpenP);
}

#[test]
fn disposed_machine_ignores_status() {
    let mut machine = open_machine();
    machine.dispose();
    assert_eq!(machine.receive(ChannelMessage::Status(GateState::OpenV)), None);
    assert_eq!(machine.gate(), GateState::Unknown);
}

// =============================================================
// Outbound triggers
// =============================================================

#[test]
fn trigger_is_encoded_only_while_open() {
    let machine = open_machine();
    let text = machine.outbound(TriggerAction::StartPedestrian).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["type"], "trigger");
    assert_eq!(value["message"], "start_p");
}

#[test]
fn trigger_is_refused_in_every_non_open_state() {
    let mut machine = ChannelMachine::default();
    assert_eq!(
        machine.outbound(TriggerAction::Stop),
        Err(SendError::NotOpen(ChannelStatus::Closed))
    );
    machine.begin_connect();
    assert_eq!(
        machine.outbound(TriggerAction::Stop),
        Err(SendError::NotOpen(ChannelStatus::Connecting))
    );
    machine.dispose();
    assert_eq!(
        machine.outbound(TriggerAction::Stop),
        Err(SendError::NotOpen(ChannelStatus::Disposed))
    );
}

#[test]
fn send_error_names_the_state() {
    assert_eq!(
        SendError::NotOpen(ChannelStatus::Connecting).to_string(),
        "status channel is not open (connecting)"
    );
}
