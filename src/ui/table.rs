// CatalogView - ui/table.rs
//
// Plain-text rendering of a page window: the course table with sort
// arrows in the header, followed by a navigation line.

use crate::core::model::{Column, Course, SortDirective};
use crate::core::paginate::PageWindow;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Placeholder shown for a missing value.
const MISSING_CELL: &str = "-";

/// Render the course table for `window`.
pub fn render_table(window: &PageWindow<&Course>, sort: &SortDirective) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Column::all().iter().map(|&c| Cell::new(header_label(c, sort))));

    for course in &window.items {
        table.add_row(Column::all().iter().map(|&c| {
            let cell = Cell::new(
                course
                    .field(c)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| MISSING_CELL.to_string()),
            );
            if is_numeric_column(c) {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    if window.items.is_empty() {
        return format!("{table}\n(no courses on this page)");
    }
    table.to_string()
}

/// Navigation line: previous/next availability and page position.
pub fn render_navigation(window: &PageWindow<&Course>) -> String {
    let prev = if window.has_previous { "[< prev]" } else { "[     ]" };
    let next = if window.has_next { "[next >]" } else { "[     ]" };
    format!(
        "{prev}  Page {} of {}  ({} matching)  {next}",
        window.page_number,
        window.page_count(),
        window.total_matches
    )
}

fn header_label(column: Column, sort: &SortDirective) -> String {
    if sort.column == Some(column) {
        format!("{} {}", column.label(), sort.direction.arrow())
    } else {
        column.label().to_string()
    }
}

fn is_numeric_column(column: Column) -> bool {
    matches!(
        column,
        Column::Trimester | Column::SemesterCredits | Column::TotalClockHours
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FieldValue;
    use crate::core::paginate::paginate;

    fn sample() -> Vec<Course> {
        (1..=7i32)
            .map(|i| Course {
                trimester: Some(FieldValue::from(i)),
                course_number: Some(FieldValue::Text(format!("CS{i}01"))),
                course_name: None,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_table_marks_sorted_column() {
        let courses = sample();
        let refs: Vec<&Course> = courses.iter().collect();
        let window = paginate(&refs, 1, 5);
        let out = render_table(&window, &SortDirective::descending(Column::CourseNumber));
        assert!(out.contains("Course Number ▼"));
        assert!(out.contains("CS101"));
        assert!(!out.contains("CS601"));
        assert!(out.contains(MISSING_CELL));
    }

    #[test]
    fn test_empty_window_notes_no_rows() {
        let courses = sample();
        let refs: Vec<&Course> = courses.iter().collect();
        let window = paginate(&refs, 9, 5);
        let out = render_table(&window, &SortDirective::default());
        assert!(out.contains("no courses on this page"));
    }

    #[test]
    fn test_navigation_line() {
        let courses = sample();
        let refs: Vec<&Course> = courses.iter().collect();
        let first = render_navigation(&paginate(&refs, 1, 5));
        assert!(first.contains("Page 1 of 2"));
        assert!(first.contains("next >"));
        assert!(!first.contains("< prev"));

        let last = render_navigation(&paginate(&refs, 2, 5));
        assert!(last.contains("< prev"));
        assert!(!last.contains("next >"));
        assert!(last.contains("(7 matching)"));
    }
}
