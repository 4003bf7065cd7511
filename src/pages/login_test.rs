use super::*;

#[test]
fn credentials_trim_username_but_keep_password() {
    assert_eq!(
        validate_credentials("  vratnik ", " heslo "),
        Ok(Credentials { username: "vratnik".to_owned(), password: " heslo ".to_owned() })
    );
}

#[test]
fn both_fields_are_required() {
    assert_eq!(validate_credentials("", "heslo"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("   ", "heslo"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("vratnik", ""), Err(MISSING_FIELDS));
}
