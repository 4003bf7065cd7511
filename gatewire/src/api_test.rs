use super::*;

// =============================================================
// Paths
// =============================================================

#[test]
fn item_paths_keep_trailing_slash() {
    assert_eq!(temporary_access_item("L4fTeb4aD-bS4BjI"), "/api/temporary-access/L4fTeb4aD-bS4BjI/");
    assert_eq!(license_plate_item(42), "/api/license-plates/42/");
}

#[test]
fn paged_paths_carry_page_parameter() {
    assert_eq!(triggers_page(3), "/api/triggers/?page=3");
    assert_eq!(states_page(1), "/api/states/?page=1");
    assert_eq!(license_plates_page(2), "/api/license-plates/?page=2");
}

#[test]
fn auth_header_uses_jwt_scheme() {
    assert_eq!(auth_header_value("t0k"), "JWT t0k");
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn classifies_by_status() {
    assert_eq!(
        ApiError::from_response(400, r#"{"ecv":["required"]}"#),
        ApiError::Validation { body: r#"{"ecv":["required"]}"#.to_owned() }
    );
    assert!(ApiError::from_response(401, "{}").is_auth());
    assert_eq!(ApiError::from_response(403, "{}"), ApiError::Forbidden { detail: None });
    assert_eq!(ApiError::from_response(404, ""), ApiError::NotFound);
    assert!(matches!(ApiError::from_response(502, "bad gateway"), ApiError::Server { status: 502, .. }));
}

#[test]
fn forbidden_is_not_an_auth_failure() {
    let err = ApiError::from_response(403, r#"{"detail":"You do not have permission to perform this action."}"#);
    assert!(!err.is_auth());
    assert_eq!(err.user_message("x"), "You do not have permission to perform this action.");
    assert_eq!(ApiError::from_response(403, "").user_message("x"), "Na túto akciu nemáte oprávnenie.");
}

#[test]
fn auth_error_keeps_server_detail() {
    let err = ApiError::from_response(401, r#"{"detail":"No active account found with the given credentials"}"#);
    assert_eq!(err.user_message("x"), "No active account found with the given credentials");
}

#[test]
fn validation_message_summarizes_field_errors() {
    let err = ApiError::from_response(
        400,
        r#"{"valid_until":["Must be after valid_from."],"ecv":["This field may not be blank."]}"#,
    );
    let message = err.user_message("fallback");
    assert!(message.contains("valid_until: Must be after valid_from."));
    assert!(message.contains("ecv: This field may not be blank."));
}

#[test]
fn validation_message_prefers_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"Plate already registered"}"#);
    assert_eq!(err.user_message("fallback"), "Plate already registered");
}

#[test]
fn unparseable_payload_falls_back() {
    let err = ApiError::from_response(400, "<html>");
    assert_eq!(err.user_message("Nepodarilo sa uložiť"), "Nepodarilo sa uložiť");
    let err = ApiError::Decode("missing field".to_owned());
    assert_eq!(err.user_message("fallback"), "fallback");
}

#[test]
fn network_and_not_found_have_fixed_messages() {
    assert!(ApiError::Network("offline".to_owned()).user_message("x").contains("nedostupný"));
    assert_eq!(ApiError::NotFound.user_message("x"), "Záznam neexistuje.");
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_from_url_extracts_numeric_parameter() {
    assert_eq!(page_from_url(Some("https://gate.example.com/api/triggers/?page=3")), Some(3));
    assert_eq!(page_from_url(Some("/api/states/?format=json&page=12")), Some(12));
}

#[test]
fn page_from_url_without_parameter_means_first_page() {
    assert_eq!(page_from_url(Some("https://gate.example.com/api/triggers/")), Some(1));
}

#[test]
fn page_from_url_without_link_is_none() {
    assert_eq!(page_from_url(None), None);
}

#[test]
fn cursor_follows_next_link_and_reuses_page_number() {
    let first: Page<u8> = Page {
        count: 35,
        next: Some("https://gate.example.com/api/triggers/?page=2".to_owned()),
        previous: None,
        results: vec![],
    };
    let cursor = PageCursor::loaded(1, &first);
    let next = cursor.next_page().unwrap();
    assert_eq!(next, 2);

    let second: Page<u8> = Page {
        count: 35,
        next: Some("https://gate.example.com/api/triggers/?page=3".to_owned()),
        previous: Some("https://gate.example.com/api/triggers/".to_owned()),
        results: vec![],
    };
    let cursor = PageCursor::loaded(next, &second);
    assert_eq!(cursor.page, 2);
    assert_eq!(cursor.next_page(), Some(3));
    assert_eq!(cursor.previous_page(), Some(1));
    assert_eq!(cursor.window(), Some((11, 20)));
}

#[test]
fn cursor_window_clamps_last_page_and_handles_empty() {
    let cursor = PageCursor { page: 4, count: 35, next: None, previous: None };
    assert_eq!(cursor.window(), Some((31, 35)));
    assert_eq!(PageCursor::default().window(), None);
}

#[test]
fn listing_accepts_paginated_and_plain_payloads() {
    let paged: Listing<u8> =
        serde_json::from_str(r#"{"count":2,"next":null,"previous":null,"results":[1,2]}"#).unwrap();
    assert_eq!(paged.into_page().results, vec![1, 2]);

    let plain: Listing<u8> = serde_json::from_str("[4,5,6]").unwrap();
    let page = plain.into_page();
    assert_eq!(page.count, 3);
    assert_eq!(page.next, None);
    assert_eq!(page.results, vec![4, 5, 6]);
}
