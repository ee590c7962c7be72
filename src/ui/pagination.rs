//! Pagination over an in-memory result set.
//!
//! Everything here is pure: a page change never triggers a fetch, it only
//! re-slices the items already held by the view.

use crate::constants::pagination::{PAGE_WINDOW_LEAD, PAGE_WINDOW_SIZE};
use std::ops::RangeInclusive;

/// One page of items plus the page count it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Number of pages needed for `len` items. Zero items need zero pages.
///
/// # Example
/// ```
/// use football_data_viewer::ui::pagination::total_pages;
///
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(0, 10), 0);
/// ```
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns the items of the 1-based `page`.
///
/// Out of range pages (including page 0) yield an empty slice. Never panics.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);
    let slice = if page == 0 || page > total {
        &items[0..0]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };
    Page {
        items: slice,
        total_pages: total,
    }
}

/// The sliding window of page numbers shown around `current`.
///
/// The window holds at most ten pages, starts five before `current` where
/// possible and is shifted left near the last page so it stays full.
///
/// # Example
/// ```
/// use football_data_viewer::ui::pagination::page_window;
///
/// assert_eq!(page_window(1, 3), 1..=3);
/// assert_eq!(page_window(12, 30), 7..=16);
/// assert_eq!(page_window(30, 30), 21..=30);
/// ```
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    if total == 0 {
        #[allow(clippy::reversed_empty_ranges)]
        return 1..=0;
    }
    let span = PAGE_WINDOW_SIZE - 1;
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(PAGE_WINDOW_LEAD).max(1);
    let end = total.min(start + span);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }
    start..=end
}

/// Navigation controls for a paged list. Absent when everything fits on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total: usize,
    pub window: RangeInclusive<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageControls {
    pub fn new(current: usize, total: usize) -> Option<Self> {
        if total <= 1 {
            return None;
        }
        Some(Self {
            current,
            total,
            window: page_window(current, total),
            has_previous: current != 1,
            has_next: current != total,
        })
    }

    /// Page numbers of the window, in order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.window.clone()
    }

    /// Whether the window is cut off before the last page.
    pub fn has_gap_after(&self) -> bool {
        *self.window.end() < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_concatenation_reconstructs_input() {
        for len in [0usize, 1, 9, 10, 11, 25, 100, 101] {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, 10);

            let rebuilt: Vec<usize> = (1..=total)
                .flat_map(|p| paginate(&items, p, 10).items.to_vec())
                .collect();
            assert_eq!(rebuilt, items, "len {len}");

            for p in 1..total {
                assert_eq!(paginate(&items, p, 10).items.len(), 10);
            }
            if total > 0 {
                let last = paginate(&items, total, 10).items.len();
                let expected = if len % 10 == 0 { 10 } else { len % 10 };
                assert_eq!(last, expected, "len {len}");
            }
        }
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u8> = (0..25).collect();
        assert!(paginate(&items, 0, 10).items.is_empty());
        assert!(paginate(&items, 4, 10).items.is_empty());
        assert_eq!(paginate(&items, 4, 10).total_pages, 3);

        let empty: Vec<u8> = Vec::new();
        let page = paginate(&empty, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_paginate_third_page_of_25() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.items, &[21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_window_examples() {
        assert_eq!(page_window(1, 1), 1..=1);
        assert_eq!(page_window(3, 5), 1..=5);
        assert_eq!(page_window(1, 30), 1..=10);
        assert_eq!(page_window(6, 30), 1..=10);
        assert_eq!(page_window(7, 30), 2..=11);
        assert_eq!(page_window(28, 30), 21..=30);
    }

    #[test]
    fn test_page_window_out_of_range_current() {
        assert_eq!(page_window(50, 3), 1..=3);
        assert_eq!(page_window(0, 3), 1..=3);
        assert_eq!(page_window(99, 30), 21..=30);
    }

    #[test]
    fn test_page_window_properties() {
        for total in 1..=40usize {
            for current in 1..=total {
                let window = page_window(current, total);
                let width = window.end() - window.start() + 1;
                assert!(width <= 10);
                assert_eq!(width, total.min(10), "current {current} total {total}");
                assert!(window.contains(&current), "current {current} total {total}");
                assert!(*window.start() >= 1 && *window.end() <= total);
            }
        }
    }

    #[test]
    fn test_page_window_empty_when_no_pages() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_page_controls() {
        assert_eq!(PageControls::new(1, 0), None);
        assert_eq!(PageControls::new(1, 1), None);

        let first = PageControls::new(1, 3).unwrap();
        assert!(!first.has_previous);
        assert!(first.has_next);
        assert_eq!(first.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!first.has_gap_after());

        let last = PageControls::new(3, 3).unwrap();
        assert!(last.has_previous);
        assert!(!last.has_next);

        let long = PageControls::new(2, 30).unwrap();
        assert!(long.has_gap_after());
    }
}
