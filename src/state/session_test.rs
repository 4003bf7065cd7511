use super::*;

use gatewire::TriggerAction;
use gatewire::model::UserProfile;

fn admin_info() -> GeneralInfo {
    GeneralInfo {
        user: Some(UserProfile {
            username: "riaditel".to_owned(),
            can_open_vehicle: true,
            can_open_pedestrian: true,
            can_close_gate: true,
            is_admin: true,
        }),
    }
}

#[test]
fn restored_token_starts_loading_profile() {
    let state = SessionState::restored(Some("t1".to_owned()));
    assert!(state.is_authenticated());
    assert!(state.loading);
    assert!(!state.permissions().allows(TriggerAction::StartVehicle));

    let anonymous = SessionState::restored(None);
    assert!(!anonymous.is_authenticated());
    assert!(!anonymous.loading);
}

#[test]
fn profile_for_current_token_grants_permissions() {
    let mut state = SessionState::restored(Some("t1".to_owned()));
    assert!(state.profile_loaded("t1", admin_info()));
    assert!(!state.loading);
    assert!(state.is_admin());
    assert_eq!(state.username(), Some("riaditel"));
}

#[test]
fn stale_profile_is_ignored_after_token_change() {
    let mut state = SessionState::restored(Some("old".to_owned()));
    state.sign_in("new".to_owned());
    assert!(!state.profile_loaded("old", admin_info()));
    assert!(state.info.is_none());
    state.profile_failed("old");
    assert!(state.loading);
}

#[test]
fn sign_out_clears_everything() {
    let mut state = SessionState::restored(Some("t1".to_owned()));
    state.profile_loaded("t1", admin_info());
    state.sign_out();
    assert_eq!(state, SessionState::default());
}
