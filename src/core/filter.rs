// CatalogView - core/filter.rs
//
// Text search over the catalog: a course is kept when its number or name
// contains the query, case-insensitively.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Course, FieldValue};

/// Apply a text query to a slice of courses, returning references to the
/// matching courses in their original order.
///
/// An empty query returns every course unchanged. No trimming or other
/// normalisation is applied: a query of `" "` is a real search for a space.
pub fn filter_records<'a>(records: &'a [Course], query: &str) -> Vec<&'a Course> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let query_lower = query.to_lowercase();

    records
        .iter()
        .filter(|course| matches_query(course, &query_lower))
        .collect()
}

/// Check whether a single course matches an already-lowercased query.
fn matches_query(course: &Course, query_lower: &str) -> bool {
    field_contains(course.course_number.as_ref(), query_lower)
        || field_contains(course.course_name.as_ref(), query_lower)
}

/// Missing and non-textual values never match.
fn field_contains(value: Option<&FieldValue>, query_lower: &str) -> bool {
    value
        .and_then(FieldValue::as_text)
        .is_some_and(|text| text.to_lowercase().contains(query_lower))
}
