// CatalogView - core/view.rs
//
// View state and the filter -> sort -> paginate pipeline.
//
// `ViewState` is an immutable value: every transition consumes the old
// state and returns a new one, so the caller threads it explicitly.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::filter::filter_records;
use crate::core::model::{Column, Course, SortDirective};
use crate::core::paginate::{window, PageWindow, PaginationMode};
use crate::core::sort::sort_records;
use crate::util::constants;

/// Controllable view state: search text, sort directive, and current page.
///
/// Invariant: `page >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    sort: SortDirective,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortDirective::default(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Fresh state: empty query, unsorted, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortDirective {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search query. Always resets to page 1, even when the new
    /// query equals the old one.
    #[must_use]
    pub fn set_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            ..self
        }
    }

    /// Header click on `column`: flip direction if it is already the sort
    /// column, otherwise sort by it ascending. The page is left alone.
    #[must_use]
    pub fn toggle_sort(self, column: Column) -> Self {
        let sort = if self.sort.column == Some(column) {
            SortDirective {
                column: Some(column),
                direction: self.sort.direction.flipped(),
            }
        } else {
            SortDirective::ascending(column)
        };
        Self { sort, ..self }
    }

    /// Jump to `page`, clamped to at least 1. No upper clamp: a page past the
    /// end renders as an empty window.
    #[must_use]
    pub fn set_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

/// Fixed view configuration shared by every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub page_size: usize,
    pub pagination: PaginationMode,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: constants::DEFAULT_PAGE_SIZE,
            pagination: PaginationMode::from_enabled(constants::DEFAULT_PAGINATION_ENABLED),
        }
    }
}

/// Filter and sort the full collection without paginating.
///
/// The sort always runs over the whole filtered set, never a single page.
pub fn ordered_records<'a>(records: &'a [Course], state: &ViewState) -> Vec<&'a Course> {
    let matched = filter_records(records, state.query());
    sort_records(matched, &state.sort())
}

/// Compute the visible window for `state` over `records`.
pub fn compute_view<'a>(
    records: &'a [Course],
    state: &ViewState,
    config: &ViewConfig,
) -> PageWindow<&'a Course> {
    let ordered = ordered_records(records, state);
    window(&ordered, state.page(), config.page_size, config.pagination)
}
