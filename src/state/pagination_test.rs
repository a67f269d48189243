use super::*;

// =============================================================
// total_pages
// =============================================================

#[test]
fn total_pages_empty_collection_is_one() {
    assert_eq!(total_pages(0, PAGE_SIZE), 1);
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
}

// =============================================================
// page
// =============================================================

#[test]
fn page_of_empty_collection_is_empty() {
    let items: Vec<i32> = Vec::new();
    assert!(page(&items, 1, 10).is_empty());
}

#[test]
fn pages_are_contiguous_and_reconstruct_the_collection() {
    let items: Vec<i32> = (0..25).collect();
    let mut rebuilt = Vec::new();
    for p in 1..=total_pages(items.len(), 10) {
        rebuilt.extend_from_slice(page(&items, p, 10));
    }
    assert_eq!(rebuilt, items);
}

#[test]
fn last_page_holds_the_remainder() {
    let items: Vec<i32> = (0..25).collect();
    assert_eq!(page(&items, 3, 10), &[20, 21, 22, 23, 24]);
}

#[test]
fn page_past_the_end_is_empty() {
    let items: Vec<i32> = (0..5).collect();
    assert!(page(&items, 4, 10).is_empty());
}

#[test]
fn page_does_not_mutate_its_input() {
    let items: Vec<i32> = (0..12).collect();
    let before = items.clone();
    let _ = page(&items, 2, 10);
    assert_eq!(items, before);
}

// =============================================================
// Pager
// =============================================================

#[test]
fn pager_starts_at_page_one() {
    assert_eq!(Pager::default().current, 1);
}

#[test]
fn pager_next_stops_at_the_last_page() {
    let mut pager = Pager::default();
    let total = total_pages(25, 10);
    assert!(pager.next(total));
    assert!(pager.next(total));
    assert_eq!(pager.current, 3);
    assert!(!pager.next(total));
    assert_eq!(pager.current, 3);
}

#[test]
fn pager_previous_stops_at_page_one() {
    let mut pager = Pager::default();
    assert!(!pager.previous());
    assert_eq!(pager.current, 1);

    pager.next(3);
    assert!(pager.previous());
    assert_eq!(pager.current, 1);
}

#[test]
fn pager_clamps_after_the_collection_shrinks() {
    let mut pager = Pager { current: 3 };
    assert!(pager.clamp(total_pages(15, 10)));
    assert_eq!(pager.current, 2);
}

#[test]
fn pager_clamp_in_range_is_a_no_op() {
    let mut pager = Pager { current: 2 };
    assert!(!pager.clamp(3));
    assert_eq!(pager.current, 2);
}

#[test]
fn pager_clamp_never_goes_below_page_one() {
    let mut pager = Pager { current: 2 };
    assert!(pager.clamp(total_pages(0, 10)));
    assert_eq!(pager.current, 1);
}
