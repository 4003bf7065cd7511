use super::*;

fn entry(kind: AccessKind, status: AccessStatus) -> TemporaryAccess {
    TemporaryAccess {
        link: "abc123".to_owned(),
        access_type: kind,
        ecv: (kind == AccessKind::Ecv).then(|| "BA123XY".to_owned()),
        valid_from: None,
        valid_until: None,
        open_vehicle: UsageLimit::Unlimited,
        open_pedestrian: UsageLimit::Disabled,
        close_gate: UsageLimit::Remaining(2),
        status,
    }
}

#[test]
fn empty_filters_show_everything() {
    assert!(matches_filters(&entry(AccessKind::Link, AccessStatus::Revoked), None, None));
}

#[test]
fn filters_combine_type_and_status() {
    let link = entry(AccessKind::Link, AccessStatus::Active);
    assert!(matches_filters(&link, Some(AccessKind::Link), Some(AccessStatus::Active)));
    assert!(!matches_filters(&link, Some(AccessKind::Ecv), None));
    assert!(!matches_filters(&link, None, Some(AccessStatus::Expired)));
}

#[test]
fn filter_options_parse_from_select_values() {
    assert_eq!(parse_kind_filter("link"), Some(AccessKind::Link));
    assert_eq!(parse_kind_filter("ecv"), Some(AccessKind::Ecv));
    assert_eq!(parse_kind_filter("all"), None);
    assert_eq!(parse_status_filter("Pending"), Some(AccessStatus::Pending));
    assert_eq!(parse_status_filter("all"), None);
}

#[test]
fn guest_link_points_at_guest_route() {
    assert_eq!(
        guest_link_url("https://gate.skola.sk/", "abc123"),
        "https://gate.skola.sk/guest/abc123"
    );
}

#[test]
fn missing_validity_bounds_render_placeholder() {
    let text = validity_text(&entry(AccessKind::Ecv, AccessStatus::Active));
    assert_eq!(text, "Valid: — – —");
}

#[test]
fn disabled_limits_get_muted_badges() {
    assert_eq!(usage_badge_class(UsageLimit::Disabled), "usage-badge usage-badge--muted");
    assert_eq!(usage_badge_class(UsageLimit::Unlimited), "usage-badge");
    assert_eq!(status_class(AccessStatus::Expired), "status-pill status-pill--expired");
}
