// CatalogView - core/sort.rs
//
// Column sort for the catalog view.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Ordering rules for a single column:
//   - Text vs text: lexicographic on the lowercased form.
//   - Number vs number: IEEE total order (NaN sorts after +inf).
//   - Number vs text: every number sorts before every text value.
//   - Missing sorts after every present value.
// Descending reverses the comparison, never the input, so ties keep their
// input order in both directions.

use crate::core::model::{Course, FieldValue, SortDirection, SortDirective};
use std::cmp::Ordering;

/// Sort courses according to a directive, returning the permuted sequence.
///
/// With no column set the input is returned as-is. `sort_by` is stable, so
/// courses with equal keys keep their relative order from the input.
pub fn sort_records<'a>(mut records: Vec<&'a Course>, directive: &SortDirective) -> Vec<&'a Course> {
    let Some(column) = directive.column else {
        return records;
    };

    records.sort_by(|a, b| {
        let ordering = compare_fields(a.field(column), b.field(column));
        match directive.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    records
}

/// Compare two optional cell values in ascending order.
pub fn compare_fields(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_values(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
        (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Column;

    /// A course identified by its name, with a trimester and credits.
    fn make_course(name: &str, trimester: Option<i32>, credits: Option<FieldValue>) -> Course {
        Course {
            course_name: Some(name.into()),
            trimester: trimester.map(FieldValue::from),
            semester_credits: credits,
            ..Default::default()
        }
    }

    fn names(courses: &[&Course]) -> Vec<String> {
        courses
            .iter()
            .map(|c| c.course_name.as_ref().map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_unsorted_directive_is_identity() {
        let courses = vec![
            make_course("b", Some(2), None),
            make_course("a", Some(1), None),
        ];
        let refs: Vec<&Course> = courses.iter().collect();
        let result = sort_records(refs, &SortDirective::default());
        assert_eq!(names(&result), vec!["b", "a"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let courses = vec![
            make_course("delta", None, None),
            make_course("Alpha", None, None),
            make_course("charlie", None, None),
            make_course("Bravo", None, None),
        ];
        let result = sort_records(
            courses.iter().collect(),
            &SortDirective::ascending(Column::CourseName),
        );
        assert_eq!(names(&result), vec!["Alpha", "Bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_numeric_sort_is_not_lexicographic() {
        let courses = vec![
            make_course("ten", Some(10), None),
            make_course("two", Some(2), None),
            make_course("one", Some(1), None),
        ];
        let result = sort_records(
            courses.iter().collect(),
            &SortDirective::ascending(Column::Trimester),
        );
        assert_eq!(names(&result), vec!["one", "two", "ten"]);
    }

    #[test]
    fn test_ascending_is_stable_for_duplicate_keys() {
        let courses = vec![
            make_course("first", Some(2), None),
            make_course("second", Some(1), None),
            make_course("third", Some(2), None),
            make_course("fourth", Some(1), None),
        ];
        let result = sort_records(
            courses.iter().collect(),
            &SortDirective::ascending(Column::Trimester),
        );
        assert_eq!(names(&result), vec!["second", "fourth", "first", "third"]);
    }

    #[test]
    fn test_descending_keeps_input_order_among_ties() {
        let courses = vec![
            make_course("first", Some(2), None),
            make_course("second", Some(1), None),
            make_course("third", Some(2), None),
            make_course("fourth", Some(1), None),
        ];
        let result = sort_records(
            courses.iter().collect(),
            &SortDirective::descending(Column::Trimester),
        );
        // Not the reverse of the ascending result: ties stay first-then-third.
        assert_eq!(names(&result), vec!["first", "third", "second", "fourth"]);
    }

    #[test]
    fn test_descending_without_ties_is_reverse_of_ascending() {
        let courses = vec![
            make_course("b", Some(2), None),
            make_course("c", Some(3), None),
            make_course("a", Some(1), None),
        ];
        let asc = sort_records(
            courses.iter().collect(),
            &SortDirective::ascending(Column::Trimester),
        );
        let mut desc = sort_records(
            courses.iter().collect(),
            &SortDirective::descending(Column::Trimester),
        );
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sorting_sorted_input_is_idempotent() {
        let courses = vec![
            make_course("x", Some(3), None),
            make_course("y", Some(1), None),
            make_course("z", Some(1), None),
        ];
        let directive = SortDirective::ascending(Column::Trimester);
        let once = sort_records(courses.iter().collect(), &directive);
        let twice = sort_records(once.clone(), &directive);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_values_sort_last_ascending_first_descending() {
        let courses = vec![
            make_course("none", None, None),
            make_course("one", Some(1), None),
        ];
        let asc = sort_records(
            courses.iter().collect(),
            &SortDirective::ascending(Column::Trimester),
        );
        assert_eq!(names(&asc), vec!["one", "none"]);

        let desc = sort_records(
            courses.iter().collect(),
            &SortDirective::descending(Column::Trimester),
        );
        assert_eq!(names(&desc), vec!["none", "one"]);
    }

    #[test]
    fn test_mixed_types_put_numbers_before_text() {
        let courses = vec![
            make_course("text", None, Some("three".into())),
            make_course("number", None, Some(FieldValue::Number(4.0))),
        ];
        let result = sort_records(
            courses.iter().collect(),
            &SortDirective::ascending(Column::SemesterCredits),
        );
        assert_eq!(names(&result), vec!["number", "text"]);
    }
}
