//! Tests for the pagination coordinator

use nearfind::engine::pagination::paginate;

#[test]
fn test_first_page_window() {
    let items: Vec<u32> = (0..10).collect();
    let (window, pagination) = paginate(items, 1, 3);
    assert_eq!(window, vec![0, 1, 2]);
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.limit, 3);
    assert_eq!(pagination.total, 10);
    assert_eq!(pagination.total_pages, 4);
}

#[test]
fn test_last_page_is_partial() {
    let items: Vec<u32> = (0..10).collect();
    let (window, pagination) = paginate(items, 4, 3);
    assert_eq!(window, vec![9]);
    assert_eq!(pagination.total, 10);
    assert_eq!(pagination.total_pages, 4);
}

#[test]
fn test_offset_past_end_yields_empty_window() {
    let items: Vec<u32> = (0..10).collect();
    let (window, pagination) = paginate(items, 5, 3);
    assert!(window.is_empty());
    assert_eq!(pagination.total, 10);
    assert_eq!(pagination.total_pages, 4);
}

#[test]
fn test_empty_sequence() {
    let items: Vec<u32> = Vec::new();
    let (window, pagination) = paginate(items, 1, 20);
    assert!(window.is_empty());
    assert_eq!(pagination.total, 0);
    assert_eq!(pagination.total_pages, 0);
}

#[test]
fn test_exact_multiple_of_limit() {
    let items: Vec<u32> = (0..12).collect();
    let (_, pagination) = paginate(items, 1, 4);
    assert_eq!(pagination.total_pages, 3);
}

#[test]
fn test_limit_one() {
    let items: Vec<u32> = (0..3).collect();
    let (window, pagination) = paginate(items, 2, 1);
    assert_eq!(window, vec![1]);
    assert_eq!(pagination.total_pages, 3);
}

#[test]
fn test_page_sizes_sum_to_total() {
    let items: Vec<u32> = (0..23).collect();
    let limit = 5;

    let total_pages = {
        let (_, pagination) = paginate(items.clone(), 1, limit);
        pagination.total_pages
    };

    let mut seen = Vec::new();
    for page in 1..=total_pages as u32 {
        let (window, pagination) = paginate(items.clone(), page, limit);
        assert_eq!(pagination.total, items.len());
        seen.extend(window);
    }

    // Every item appears exactly once, in sequence order.
    assert_eq!(seen, items);
}
