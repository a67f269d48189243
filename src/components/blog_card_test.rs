use super::*;

// =============================================================
// truncate_description
// =============================================================

#[test]
fn long_descriptions_are_cut_at_the_preview_limit() {
    let text = "x".repeat(450);
    let preview = truncate_description(&text);
    assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
    assert!(preview.ends_with("..."));
    assert!(preview.starts_with(&"x".repeat(DESCRIPTION_PREVIEW_CHARS)));
}

#[test]
fn short_descriptions_pass_through_unmodified() {
    let text = "y".repeat(390);
    assert_eq!(truncate_description(&text), text);
}

#[test]
fn the_limit_itself_is_not_truncated() {
    let text = "z".repeat(DESCRIPTION_PREVIEW_CHARS);
    assert_eq!(truncate_description(&text), text);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(450);
    let preview = truncate_description(&text);
    assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
    assert!(preview.ends_with("..."));
}
