//! Offset pagination over the ranked candidate sequence.
//!
//! The window and the total count both derive from the one sequence passed
//! in, so they can never disagree on filter criteria: `total` is always
//! the count of the exact filtered-and-ranked set the page was sliced
//! from.

use crate::Pagination;

/// Slice the window `[offset, offset + limit)` out of an ordered sequence
/// and report the pagination envelope for it.
///
/// An offset at or past the end yields an empty window; `total` and
/// `total_pages` still describe the full sequence.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> (Vec<T>, Pagination) {
    let total = items.len();
    let limit = limit.max(1);
    let per_page = limit as usize;
    let offset = (page.max(1) as usize - 1) * per_page;

    let window: Vec<T> = if offset >= total {
        Vec::new()
    } else {
        items.into_iter().skip(offset).take(per_page).collect()
    };

    let pagination = Pagination {
        page,
        limit,
        total,
        total_pages: total.div_ceil(per_page),
    };

    (window, pagination)
}
