use super::*;
use crate::state::pagination::page;

fn post(id: &str) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: format!("Post {id}"),
        description: "A description.".to_owned(),
        image: format!("https://img.example/{id}.png"),
        user_id: "u-1".to_owned(),
    }
}

fn posts(ids: &[&str]) -> Vec<BlogPost> {
    ids.iter().map(|id| post(id)).collect()
}

// =============================================================
// replace_all
// =============================================================

#[test]
fn replace_all_first_fetch_is_observable() {
    let mut state = BlogsState::default();
    assert!(state.replace_all(posts(&["a", "b"])));
    assert!(state.loaded);
    assert_eq!(state.posts.len(), 2);
}

#[test]
fn replace_all_with_equal_collection_is_a_no_op() {
    let mut state = BlogsState::default();
    assert!(state.replace_all(posts(&["a", "b"])));
    assert!(!state.replace_all(posts(&["a", "b"])));
    assert_eq!(state.posts, posts(&["a", "b"]));
}

#[test]
fn replace_all_with_changed_collection_is_observable() {
    let mut state = BlogsState::default();
    state.replace_all(posts(&["a", "b"]));
    assert!(state.replace_all(posts(&["b", "a"])));
    assert_eq!(state.posts, posts(&["b", "a"]));
}

#[test]
fn replace_all_detects_field_level_changes() {
    let mut state = BlogsState::default();
    state.replace_all(posts(&["a"]));
    let mut edited = posts(&["a"]);
    edited[0].title = "Retitled".to_owned();
    assert!(state.replace_all(edited));
}

// =============================================================
// prepend
// =============================================================

#[test]
fn prepend_puts_the_new_post_first() {
    let mut state = BlogsState::default();
    state.replace_all(posts(&["a", "b"]));
    state.prepend(post("fresh"));
    assert_eq!(state.posts[0].id, "fresh");
    assert_eq!(state.posts[1].id, "a");
}

#[test]
fn prepended_post_leads_page_one() {
    let mut state = BlogsState::default();
    let ids: Vec<String> = (0..15).map(|n| format!("p{n}")).collect();
    state.replace_all(ids.iter().map(|id| post(id)).collect());
    state.prepend(post("fresh"));

    let first_page = page(&state.posts, 1, 10);
    assert_eq!(first_page.len(), 10);
    assert_eq!(first_page[0].id, "fresh");
}

// =============================================================
// remove_by_id
// =============================================================

#[test]
fn remove_by_id_preserves_the_order_of_the_rest() {
    let mut state = BlogsState::default();
    state.replace_all(posts(&["a", "b", "c"]));
    assert!(state.remove_by_id("b"));
    assert_eq!(state.posts, posts(&["a", "c"]));
}

#[test]
fn remove_by_id_with_unknown_id_leaves_the_collection_unchanged() {
    let mut state = BlogsState::default();
    state.replace_all(posts(&["a", "b"]));
    let before = state.clone();
    assert!(!state.remove_by_id("missing"));
    assert_eq!(state, before);
}

// =============================================================
// find
// =============================================================

#[test]
fn find_returns_the_matching_post() {
    let mut state = BlogsState::default();
    state.replace_all(posts(&["a", "b"]));
    assert_eq!(state.find("b").map(|p| p.id.as_str()), Some("b"));
    assert!(state.find("zzz").is_none());
}
