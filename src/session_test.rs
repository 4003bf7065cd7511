use super::*;

#[test]
fn auth_cookie_lasts_seven_days_site_wide() {
    assert_eq!(
        auth_cookie("eyJ.a.b"),
        "auth_token=eyJ.a.b; max-age=604800; path=/; SameSite=Strict"
    );
}

#[test]
fn expired_cookie_clears_value_immediately() {
    let cookie = expired_auth_cookie();
    assert!(cookie.starts_with("auth_token=;"));
    assert!(cookie.contains("max-age=0"));
    assert!(cookie.contains("path=/"));
}

#[test]
fn read_cookie_finds_named_value_among_others() {
    let raw = "theme=dark; auth_token=eyJ.a.b; lang=sk";
    assert_eq!(read_cookie(raw, "auth_token"), Some("eyJ.a.b".to_owned()));
    assert_eq!(read_cookie(raw, "missing"), None);
    assert_eq!(read_cookie("auth_token=", "auth_token"), None);
    assert_eq!(read_cookie("", "auth_token"), None);
}

#[test]
fn read_cookie_does_not_match_name_suffix() {
    assert_eq!(read_cookie("old_auth_token=x", "auth_token"), None);
}

#[test]
fn redirect_target_accepts_local_paths() {
    assert_eq!(login_redirect_target(Some("/temp-access")), "/temp-access");
    assert_eq!(login_redirect_target(Some("/history?tab=states")), "/history?tab=states");
}

#[test]
fn redirect_target_rejects_foreign_or_missing_targets() {
    assert_eq!(login_redirect_target(None), "/");
    assert_eq!(login_redirect_target(Some("")), "/");
    assert_eq!(login_redirect_target(Some("https://evil.example")), "/");
    assert_eq!(login_redirect_target(Some("//evil.example")), "/");
    assert_eq!(login_redirect_target(Some("/\\evil.example")), "/");
}

#[test]
fn login_path_carries_return_target() {
    assert_eq!(login_path_for("/parking"), "/login?next=/parking");
    assert_eq!(login_path_for("/"), "/login");
    assert_eq!(login_path_for("/login"), "/login");
}

fn signed_in_session() -> Session {
    Session {
        state: RwSignal::new(SessionState::restored(Some("valid.jwt".to_owned()))),
        channel: GateChannel::new(),
    }
}

#[test]
fn forbidden_call_keeps_the_session() {
    let session = signed_in_session();
    let err = ApiError::from_response(403, r#"{"detail":"You do not have permission to perform this action."}"#);
    assert!(!session.expire_on_auth_failure(&err));
    assert_eq!(session.token(), Some("valid.jwt".to_owned()));
}

#[test]
fn rejected_token_ends_the_session() {
    let session = signed_in_session();
    assert!(session.expire_on_auth_failure(&ApiError::from_response(401, "{}")));
    assert_eq!(session.token(), None);
}
