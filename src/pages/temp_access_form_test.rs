use chrono::{TimeZone, Utc};
use gatewire::model::{AccessStatus, DraftError};

use super::*;

fn fields() -> FormFields {
    FormFields {
        kind: AccessKind::Ecv,
        plate: "  BA123XY ".to_owned(),
        valid_from: "2025-03-03T08:00".to_owned(),
        valid_until: "2025-03-03T16:00".to_owned(),
        open_vehicle: UsageLimit::Remaining(2),
        open_pedestrian: UsageLimit::Disabled,
        close_gate: UsageLimit::Unlimited,
    }
}

#[test]
fn mode_follows_route_parameter() {
    assert_eq!(FormMode::from_param(None), FormMode::Create);
    assert_eq!(FormMode::from_param(Some(String::new())), FormMode::Create);
    assert_eq!(
        FormMode::from_param(Some("abc".to_owned())),
        FormMode::Edit { link: "abc".to_owned() }
    );
}

#[test]
fn create_draft_carries_kind_and_trimmed_plate() {
    let draft = fields().draft(&FormMode::Create);
    assert_eq!(draft.access_type, Some(AccessKind::Ecv));
    assert_eq!(draft.ecv.as_deref(), Some("BA123XY"));
    assert_eq!(draft.open_vehicle, UsageLimit::Remaining(2));
    assert!(draft.validate().is_ok());
}

#[test]
fn link_draft_has_no_plate() {
    let draft = FormFields { kind: AccessKind::Link, ..fields() }.draft(&FormMode::Create);
    assert_eq!(draft.access_type, Some(AccessKind::Link));
    assert_eq!(draft.ecv, None);
}

#[test]
fn edit_draft_only_sends_window_and_limits() {
    let draft = fields().draft(&FormMode::Edit { link: "abc".to_owned() });
    assert_eq!(draft.access_type, None);
    assert_eq!(draft.ecv, None);
    let body = serde_json::to_value(&draft).expect("serializes");
    assert!(body.get("access_type").is_none());
    assert_eq!(body["close_gate"], -1);
}

#[test]
fn blank_plate_fails_validation_on_create() {
    let draft = FormFields { plate: "   ".to_owned(), ..fields() }.draft(&FormMode::Create);
    assert_eq!(draft.validate(), Err(DraftError::MissingPlate));
}

#[test]
fn edit_prefills_fields_from_grant() {
    let grant = TemporaryAccess {
        link: "abc".to_owned(),
        access_type: AccessKind::Link,
        ecv: None,
        valid_from: Some(Utc.with_ymd_and_hms(2025, 3, 3, 7, 0, 0).unwrap()),
        valid_until: None,
        open_vehicle: UsageLimit::Unlimited,
        open_pedestrian: UsageLimit::Remaining(4),
        close_gate: UsageLimit::Disabled,
        status: AccessStatus::Active,
    };
    let prefill = FormFields::from_grant(&grant);
    assert_eq!(prefill.kind, AccessKind::Link);
    assert_eq!(prefill.plate, "");
    assert_eq!(prefill.valid_from, "2025-03-03T07:00");
    assert_eq!(prefill.valid_until, "");
    assert_eq!(prefill.open_pedestrian, UsageLimit::Remaining(4));
}

#[test]
fn titles_and_tabs_are_labelled() {
    assert_eq!(FormMode::Create.title(), "Create Temporary Access");
    assert_eq!(FormMode::Edit { link: "x".to_owned() }.title(), "Edit Temporary Access");
    assert_eq!(tab_label(AccessKind::Link), "Temporary Link");
}
