// CatalogView - core/paginate.rs
//
// Fixed-size page windows over an ordered sequence.
// Core layer: pure logic, no I/O or UI dependencies.

use serde::Serialize;

/// How the view slices the ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Show `page_size` rows per page with live previous/next availability.
    #[default]
    Windowed,
    /// Show every row on a single page; navigation is never available.
    Unpaginated,
}

impl PaginationMode {
    /// Map the `pagination_enabled` config flag to a mode.
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Windowed
        } else {
            Self::Unpaginated
        }
    }
}

/// The rows to display for one page plus navigation availability.
///
/// Derived on every view; never stored or mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageWindow<T> {
    /// Rows on this page, in display order.
    pub items: Vec<T>,

    /// True if a previous page exists.
    pub has_previous: bool,

    /// True if at least one row exists past this page.
    pub has_next: bool,

    /// The page this window was computed for (1-based).
    pub page_number: usize,

    /// Number of rows in the full ordered set (all pages).
    pub total_matches: usize,

    /// Rows per page used for this window.
    #[serde(skip)]
    page_size: usize,
}

impl<T> PageWindow<T> {
    /// Number of pages needed for the full set. An empty set has one
    /// (empty) page so "Page 1 of 1" still reads sensibly.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 || self.total_matches == 0 {
            return 1;
        }
        self.total_matches.div_ceil(self.page_size)
    }

    /// Returns true if the window has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `records` into the window for `page_number` (1-based).
///
/// Out-of-range requests are not errors: page 0, a page past the end, or a
/// zero page size all yield an empty `items` list. A zero page size never
/// reports a next page, since no page can ever hold a row.
pub fn paginate<T: Clone>(records: &[T], page_number: usize, page_size: usize) -> PageWindow<T> {
    let total = records.len();

    let items = match page_number.checked_sub(1) {
        Some(zero_based) => {
            let start = zero_based.saturating_mul(page_size);
            if start >= total {
                Vec::new()
            } else {
                let end = start.saturating_add(page_size).min(total);
                records[start..end].to_vec()
            }
        }
        None => Vec::new(),
    };

    PageWindow {
        items,
        has_previous: page_number > 1,
        has_next: page_size > 0 && total > page_number.saturating_mul(page_size),
        page_number,
        total_matches: total,
        page_size,
    }
}

/// Render the whole ordered set as one page with inert navigation.
pub fn unpaginated<T: Clone>(records: &[T]) -> PageWindow<T> {
    PageWindow {
        items: records.to_vec(),
        has_previous: false,
        has_next: false,
        page_number: 1,
        total_matches: records.len(),
        page_size: records.len(),
    }
}

/// Build the window for `page_number` according to `mode`.
pub fn window<T: Clone>(
    records: &[T],
    page_number: usize,
    page_size: usize,
    mode: PaginationMode,
) -> PageWindow<T> {
    match mode {
        PaginationMode::Windowed => paginate(records, page_number, page_size),
        PaginationMode::Unpaginated => unpaginated(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve() -> Vec<u32> {
        (1..=12).collect()
    }

    #[test]
    fn test_first_page_of_twelve() {
        let w = paginate(&twelve(), 1, 5);
        assert_eq!(w.items, vec![1, 2, 3, 4, 5]);
        assert!(!w.has_previous);
        assert!(w.has_next);
        assert_eq!(w.page_count(), 3);
    }

    #[test]
    fn test_last_partial_page() {
        let w = paginate(&twelve(), 3, 5);
        assert_eq!(w.items, vec![11, 12]);
        assert!(w.has_previous);
        assert!(!w.has_next);
    }

    #[test]
    fn test_page_past_end_is_empty_without_wraparound() {
        let w = paginate(&twelve(), 4, 5);
        assert!(w.is_empty());
        assert!(w.has_previous);
        assert!(!w.has_next);
        assert_eq!(w.total_matches, 12);
    }

    #[test]
    fn test_exact_multiple_has_no_next_on_last_page() {
        let records: Vec<u32> = (1..=10).collect();
        let w = paginate(&records, 2, 5);
        assert_eq!(w.items.len(), 5);
        assert!(!w.has_next);
    }

    #[test]
    fn test_page_zero_degrades_to_empty_window() {
        let w = paginate(&twelve(), 0, 5);
        assert!(w.is_empty());
        assert!(!w.has_previous);
        assert!(w.has_next);
    }

    #[test]
    fn test_zero_page_size_is_total() {
        let w = paginate(&twelve(), 1, 0);
        assert!(w.is_empty());
        assert!(!w.has_next);
        assert_eq!(w.page_count(), 1);
    }

    #[test]
    fn test_empty_set_has_one_empty_page() {
        let w = paginate::<u32>(&[], 1, 5);
        assert!(w.is_empty());
        assert!(!w.has_previous);
        assert!(!w.has_next);
        assert_eq!(w.page_count(), 1);
    }

    #[test]
    fn test_unpaginated_mode_shows_everything_with_inert_navigation() {
        let w = window(&twelve(), 3, 5, PaginationMode::Unpaginated);
        assert_eq!(w.items.len(), 12);
        assert!(!w.has_previous);
        assert!(!w.has_next);
        assert_eq!(w.page_number, 1);
        assert_eq!(w.page_count(), 1);
    }
}
