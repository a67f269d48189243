use super::*;

// =============================================================
// push / dismiss
// =============================================================

#[test]
fn push_appends_in_order_with_distinct_ids() {
    let mut state = NoticesState::default();
    let first = state.push(NoticeKind::Error, "one");
    let second = state.push(NoticeKind::Success, "two");

    assert_ne!(first, second);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "one");
    assert_eq!(state.items[1].kind, NoticeKind::Success);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticesState::default();
    let first = state.push(NoticeKind::Error, "one");
    let second = state.push(NoticeKind::Error, "two");

    state.dismiss(&first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_of_an_unknown_id_is_a_no_op() {
    let mut state = NoticesState::default();
    state.push(NoticeKind::Error, "one");
    let before = state.clone();

    state.dismiss("not-an-id");
    assert_eq!(state, before);
}
