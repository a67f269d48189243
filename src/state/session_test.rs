use super::*;

// =============================================================
// authorize
// =============================================================

#[test]
fn authorize_rejects_an_absent_token() {
    assert!(!authorize(None));
}

#[test]
fn authorize_rejects_an_empty_token() {
    assert!(!authorize(Some("")));
}

#[test]
fn authorize_accepts_any_non_empty_token() {
    assert!(authorize(Some("abc.def.ghi")));
    assert!(authorize(Some("x")));
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let session = SessionState::default();
    assert!(session.token.is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn load_without_a_browser_is_anonymous() {
    assert!(!SessionState::load().is_signed_in());
}

#[test]
fn sign_in_then_sign_out_round_trips() {
    let mut session = SessionState::default();
    session.sign_in("tok-1".to_owned());
    assert!(session.is_signed_in());
    assert_eq!(session.token.as_deref(), Some("tok-1"));

    session.sign_out();
    assert!(!session.is_signed_in());
    assert!(session.token.is_none());
}

// =============================================================
// gate
// =============================================================

#[test]
fn gate_denies_anonymous_visitors_with_exactly_one_notice() {
    let session = SessionState::default();
    let mut notices = NoticesState::default();

    assert!(!gate(&session, &mut notices));
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].kind, NoticeKind::Error);
    assert_eq!(notices.items[0].message, SIGN_IN_REQUIRED);
}

#[test]
fn gate_denies_an_empty_token() {
    let session = SessionState { token: Some(String::new()) };
    let mut notices = NoticesState::default();

    assert!(!gate(&session, &mut notices));
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn gate_allows_signed_in_users_without_noise() {
    let session = SessionState { token: Some("tok".to_owned()) };
    let mut notices = NoticesState::default();

    assert!(gate(&session, &mut notices));
    assert!(notices.items.is_empty());
}
