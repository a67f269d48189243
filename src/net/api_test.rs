use super::*;

// =============================================================
// parse_error_message
// =============================================================

#[test]
fn parse_error_message_prefers_the_message_field() {
    let body = r#"{"success":false,"message":"Invalid credentials"}"#;
    assert_eq!(parse_error_message(body).as_deref(), Some("Invalid credentials"));
}

#[test]
fn parse_error_message_joins_validation_errors() {
    let body = r#"{"success":false,"errors":{"email":"Email is required","password":"Too short"}}"#;
    let message = parse_error_message(body).expect("joined errors");
    assert!(message.contains("Email is required"));
    assert!(message.contains("Too short"));
}

#[test]
fn parse_error_message_handles_malformed_bodies() {
    assert!(parse_error_message("").is_none());
    assert!(parse_error_message("<html>502</html>").is_none());
    assert!(parse_error_message(r#"{"errors":{}}"#).is_none());
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn server_message_is_exposed_only_for_status_errors() {
    let err = ApiError::Status { status: 403, message: Some("Forbidden".to_owned()) };
    assert_eq!(err.server_message(), Some("Forbidden"));

    let err = ApiError::Status { status: 500, message: None };
    assert!(err.server_message().is_none());
    assert!(ApiError::Timeout.server_message().is_none());
}

// =============================================================
// is_owner / owns
// =============================================================

#[test]
fn is_owner_fails_closed_when_the_lookup_fails() {
    // Outside the browser every lookup errors; the wrapper must swallow
    // that into a plain "not owner" rather than surfacing the failure.
    assert!(!futures::executor::block_on(is_owner("b-1", "tok")));
}

#[test]
fn owns_matches_ids_exactly() {
    let ids = vec!["a1".to_owned(), "b2".to_owned()];
    assert!(owns(&ids, "a1"));
    assert!(!owns(&ids, "a"));
    assert!(!owns(&ids, "c3"));
}

#[test]
fn owns_is_false_for_an_empty_id_set() {
    assert!(!owns(&[], "a1"));
}

// =============================================================
// wire types
// =============================================================

#[test]
fn blog_post_decodes_server_field_names() {
    let json = r#"{"_id":"p-1","title":"T","description":"D","image":"https://img","userId":"u-9"}"#;
    let post: super::super::types::BlogPost = serde_json::from_str(json).expect("decode");
    assert_eq!(post.id, "p-1");
    assert_eq!(post.user_id, "u-9");
}

#[test]
fn blog_post_tolerates_a_missing_owner_id() {
    let json = r#"{"_id":"p-1","title":"T","description":"D","image":"https://img"}"#;
    let post: super::super::types::BlogPost = serde_json::from_str(json).expect("decode");
    assert!(post.user_id.is_empty());
}
