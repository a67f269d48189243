//! Client-side pagination over the in-memory post list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Posts shown per list page.
pub const PAGE_SIZE: usize = 10;

/// Total page count; an empty collection still has one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// The contiguous window for a 1-based page number.
///
/// Pure and non-mutating; a page past the end yields an empty slice.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    if page_size == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// 1-based cursor over the paged list. Never wraps and never leaves the
/// valid range; each method reports whether the page actually changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl Pager {
    /// Advance one page; no-op on the last page.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current < total_pages {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back one page; no-op on the first.
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Pull the cursor back into range after the collection shrinks,
    /// e.g. when a delete empties the last page.
    pub fn clamp(&mut self, total_pages: usize) -> bool {
        let bound = total_pages.max(1);
        if self.current > bound {
            self.current = bound;
            true
        } else {
            false
        }
    }
}
