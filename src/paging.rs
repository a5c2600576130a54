//! Pagination engine.
//!
//! Pure functions over the loaded collection: page count, visible slice,
//! and the bounded window of page-number controls. No shared state; the
//! caller re-derives whenever items, page, or page size change.
//!
//! All functions require `page_size > 0`; [`crate::state::CollectionState`]
//! enforces that at construction, so the functions here are total over
//! the inputs they actually receive.

/// Number of page-number controls shown at once.
pub const PAGE_WINDOW: usize = 5;

/// Number of pages needed for `total_items`, never less than 1.
///
/// An empty collection still has one (empty) page so the current page is
/// always a valid position.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// The items visible on `page` (1-based).
///
/// Does not clamp: callers clamp `page` into `[1, page_count]` before
/// deriving. A page beyond the data still returns an empty slice rather
/// than panicking.
pub fn visible_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Up to `window` consecutive page numbers to render as controls.
///
/// Tie-break policy, reproduced exactly from the original controls: all
/// pages when they fit; the first `window` pages near the left edge; the
/// last `window` near the right edge; otherwise a window centered on the
/// current page.
pub fn page_window(page: usize, page_count: usize, window: usize) -> Vec<usize> {
    if window == 0 || page_count == 0 {
        return Vec::new();
    }
    let half = window / 2;
    let start = if page_count <= window {
        1
    } else if page <= half + 1 {
        1
    } else if page >= page_count - half {
        page_count - window + 1
    } else {
        page - half
    };
    let end = (start + window - 1).min(page_count);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_minimum_one() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(100, 7), 15);
    }

    #[test]
    fn test_page_count_is_positive_for_all_sizes() {
        for total in 0..50 {
            for size in 1..10 {
                assert!(page_count(total, size) >= 1);
            }
        }
    }

    #[test]
    fn test_visible_slice_full_and_last_pages() {
        let items: Vec<u32> = (0..13).collect();
        assert_eq!(visible_slice(&items, 1, 5), &[0, 1, 2, 3, 4]);
        assert_eq!(visible_slice(&items, 2, 5), &[5, 6, 7, 8, 9]);
        // Last page holds total mod page_size items.
        assert_eq!(visible_slice(&items, 3, 5), &[10, 11, 12]);
    }

    #[test]
    fn test_visible_slice_lengths() {
        let items: Vec<u32> = (0..23).collect();
        let size = 5;
        let pages = page_count(items.len(), size);
        for page in 1..pages {
            assert_eq!(visible_slice(&items, page, size).len(), size);
        }
        let expected_last = items.len() % size;
        let expected_last = if expected_last == 0 { size } else { expected_last };
        assert_eq!(visible_slice(&items, pages, size).len(), expected_last);
    }

    #[test]
    fn test_visible_slice_evenly_divisible_last_page() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(visible_slice(&items, 2, 5).len(), 5);
    }

    #[test]
    fn test_visible_slice_empty_collection() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(page_count(items.len(), 5), 1);
        assert!(visible_slice(&items, 1, 5).is_empty());
    }

    #[test]
    fn test_visible_slice_beyond_data_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        assert!(visible_slice(&items, 9, 5).is_empty());
    }

    #[test]
    fn test_page_window_all_pages_fit() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(3, 5, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(1, 1, 5), vec![1]);
    }

    #[test]
    fn test_page_window_left_edge() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_window_right_edge() {
        assert_eq!(page_window(8, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_window_centered() {
        assert_eq!(page_window(4, 10, 5), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(7, 10, 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_page_window_always_contains_current_page() {
        for count in 1..=20 {
            for page in 1..=count {
                let window = page_window(page, count, PAGE_WINDOW);
                assert!(
                    window.contains(&page),
                    "page {} missing from window {:?} of {}",
                    page,
                    window,
                    count
                );
                assert!(window.len() <= PAGE_WINDOW);
                // Windows are consecutive.
                for pair in window.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
            }
        }
    }
}
