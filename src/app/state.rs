// CatalogView - app/state.rs
//
// Application state management. Holds the loaded course collection, the
// current view state, and the fixed view configuration.
// Owned by the shell (one-shot CLI run or interactive loop).

use crate::app::command::Command;
use crate::app::source::RecordSource;
use crate::core::model::Course;
use crate::core::paginate::{unpaginated, PageWindow};
use crate::core::view::{compute_view, ordered_records, ViewConfig, ViewState};
use crate::util::error::SourceError;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Course collection from the most recent successful load.
    courses: Vec<Course>,

    /// Current query, sort, and page.
    view: ViewState,

    /// Page size and pagination mode.
    config: ViewConfig,

    /// Status message for the status line.
    pub status_message: String,

    /// Whether debug mode is enabled (the shell shows view internals).
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with an empty collection and default view.
    pub fn new(config: ViewConfig, debug_mode: bool) -> Self {
        Self {
            courses: Vec::new(),
            view: ViewState::default(),
            config,
            status_message: "Ready. No courses loaded.".to_string(),
            debug_mode,
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Load the collection from `source`.
    ///
    /// On success the collection is replaced wholesale. On failure the error
    /// is logged, the status line is updated, and the previous collection
    /// (possibly empty) stays in place. No retry.
    pub fn reload(&mut self, source: &dyn RecordSource) -> Result<usize, SourceError> {
        match source.load() {
            Ok(courses) => {
                let count = courses.len();
                self.courses = courses;
                self.status_message = format!("Loaded {count} courses from {}.", source.describe());
                tracing::info!(count, source = %source.describe(), "Course collection loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kept = self.courses.len(),
                    "Course load failed; keeping previous collection"
                );
                self.status_message = format!("Load failed: {e}");
                Err(e)
            }
        }
    }

    /// The visible window for the current view.
    pub fn window(&self) -> PageWindow<&Course> {
        compute_view(&self.courses, &self.view, &self.config)
    }

    /// Every course matching the current query, in sort order, unpaginated.
    pub fn ordered(&self) -> Vec<&Course> {
        ordered_records(&self.courses, &self.view)
    }

    /// The whole ordered set as a single window with inert navigation.
    pub fn full_window(&self) -> PageWindow<&Course> {
        unpaginated(&self.ordered())
    }

    /// Apply a view command. Returns false for `Quit`; shell-only commands
    /// (`Help`, `Reload`) are left to the caller and do not touch the view.
    pub fn apply(&mut self, command: &Command) -> bool {
        match command {
            Command::Search(query) => self.transition(|v| v.set_query(query.as_str())),
            Command::Sort(column) => self.transition(|v| v.toggle_sort(*column)),
            Command::Next => self.next_page(),
            Command::Previous => self.previous_page(),
            Command::Page(n) => self.transition(|v| v.set_page(*n)),
            Command::Reload | Command::Help => {}
            Command::Quit => return false,
        }
        true
    }

    /// Advance one page if the current window reports a next page.
    pub fn next_page(&mut self) {
        let (has_next, current) = {
            let window = self.window();
            (window.has_next, window.page_number)
        };
        if has_next {
            self.transition(|v| v.set_page(current + 1));
        } else {
            tracing::debug!(page = self.view.page(), "Next page unavailable");
        }
    }

    /// Go back one page if the current window reports a previous page.
    pub fn previous_page(&mut self) {
        let (has_previous, current) = {
            let window = self.window();
            (window.has_previous, window.page_number)
        };
        if has_previous {
            self.transition(|v| v.set_page(current - 1));
        } else {
            tracing::debug!(page = self.view.page(), "Previous page unavailable");
        }
    }

    fn transition(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        let next = f(std::mem::take(&mut self.view));
        tracing::debug!(
            query = next.query(),
            sort = ?next.sort(),
            page = next.page(),
            "View state updated"
        );
        self.view = next;
    }
}
