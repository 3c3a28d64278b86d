// CatalogView - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::ViewError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Field values
// =============================================================================

/// A single cell value as it appears in the course JSON.
///
/// Columns are expected to be homogeneous (all numeric or all textual), but
/// nothing on the wire enforces that, so both variants may meet in a sort.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Borrow the text content, if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

/// Largest magnitude at which every whole f64 is exactly an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

impl Serialize for FieldValue {
    /// Whole numbers are written as JSON integers (`1`, not `1.0`) so an
    /// export reads back the same way the source file was written.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Deserialise one cell, treating anything that is not a number or a string
/// (null, bool, array, object) as missing. One odd cell never rejects the
/// whole collection.
fn lenient_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<FieldValue>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number),
        serde_json::Value::String(s) => Some(FieldValue::Text(s)),
        _ => None,
    })
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" (trimester 1, not 1.0).
            FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.0}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

// =============================================================================
// Course (one catalog record)
// =============================================================================

/// One catalog entry.
///
/// Every field is optional: an absent key, an explicit `null`, or a value of
/// any other JSON type all load as `None`, and `None` is omitted on export.
/// Identity is positional; there is no primary key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    #[serde(deserialize_with = "lenient_cell", skip_serializing_if = "Option::is_none")]
    pub trimester: Option<FieldValue>,
    #[serde(deserialize_with = "lenient_cell", skip_serializing_if = "Option::is_none")]
    pub course_number: Option<FieldValue>,
    #[serde(deserialize_with = "lenient_cell", skip_serializing_if = "Option::is_none")]
    pub course_name: Option<FieldValue>,
    #[serde(deserialize_with = "lenient_cell", skip_serializing_if = "Option::is_none")]
    pub semester_credits: Option<FieldValue>,
    #[serde(deserialize_with = "lenient_cell", skip_serializing_if = "Option::is_none")]
    pub total_clock_hours: Option<FieldValue>,
}

impl Course {
    /// Look up the value for a column. `None` means missing.
    pub fn field(&self, column: Column) -> Option<&FieldValue> {
        match column {
            Column::Trimester => self.trimester.as_ref(),
            Column::CourseNumber => self.course_number.as_ref(),
            Column::CourseName => self.course_name.as_ref(),
            Column::SemesterCredits => self.semester_credits.as_ref(),
            Column::TotalClockHours => self.total_clock_hours.as_ref(),
        }
    }
}

// =============================================================================
// Columns
// =============================================================================

/// The sortable catalog columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Trimester,
    CourseNumber,
    CourseName,
    SemesterCredits,
    TotalClockHours,
}

impl Column {
    /// Returns all columns in display order.
    pub fn all() -> &'static [Column] {
        &[
            Column::Trimester,
            Column::CourseNumber,
            Column::CourseName,
            Column::SemesterCredits,
            Column::TotalClockHours,
        ]
    }

    /// Wire identifier, exactly as it appears in the course JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Column::Trimester => "trimester",
            Column::CourseNumber => "courseNumber",
            Column::CourseName => "courseName",
            Column::SemesterCredits => "semesterCredits",
            Column::TotalClockHours => "totalClockHours",
        }
    }

    /// Human-readable header label.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Trimester => "Trimester",
            Column::CourseNumber => "Course Number",
            Column::CourseName => "Course Name",
            Column::SemesterCredits => "Semester Credits",
            Column::TotalClockHours => "Total Clock Hours",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = ViewError;

    /// Parses the wire identifier. Only the exact names are accepted so the
    /// shell cannot invent columns outside the data model.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::all()
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| ViewError::UnknownColumn {
                name: s.to_string(),
            })
    }
}

// =============================================================================
// Sort directive
// =============================================================================

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow for display.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction.
///
/// When `column` is `None` the direction is irrelevant and no reordering
/// takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortDirective {
    pub column: Option<Column>,
    pub direction: SortDirection,
}

impl SortDirective {
    /// Sort by `column` ascending.
    pub fn ascending(column: Column) -> Self {
        Self {
            column: Some(column),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by `column` descending.
    pub fn descending(column: Column) -> Self {
        Self {
            column: Some(column),
            direction: SortDirection::Descending,
        }
    }

    /// Returns true if this directive leaves the order untouched.
    pub fn is_unsorted(&self) -> bool {
        self.column.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_deserialises_mixed_and_missing_fields() {
        let json = r#"{
            "trimester": 1,
            "courseNumber": "CS101",
            "courseName": null,
            "semesterCredits": 3.5,
            "instructor": "ignored"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.trimester, Some(FieldValue::Number(1.0)));
        assert_eq!(course.course_number, Some(FieldValue::from("CS101")));
        assert_eq!(course.course_name, None);
        assert_eq!(course.semester_credits, Some(FieldValue::Number(3.5)));
        assert_eq!(course.total_clock_hours, None);
    }

    #[test]
    fn test_unexpected_cell_types_load_as_missing() {
        let json = r#"[
            {"courseNumber": "CS101"},
            {"courseNumber": "X", "trimester": true, "courseName": {"en": "Y"}, "semesterCredits": [3]}
        ]"#;
        let courses: Vec<Course> = serde_json::from_str(json).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].course_number, Some(FieldValue::from("X")));
        assert_eq!(courses[1].trimester, None);
        assert_eq!(courses[1].course_name, None);
        assert_eq!(courses[1].semester_credits, None);
    }

    #[test]
    fn test_serialises_in_source_shape() {
        let course: Course =
            serde_json::from_str(r#"{"trimester":1,"semesterCredits":3,"totalClockHours":2.5}"#)
                .unwrap();
        assert_eq!(
            serde_json::to_string(&course).unwrap(),
            r#"{"trimester":1,"semesterCredits":3,"totalClockHours":2.5}"#
        );
    }

    #[test]
    fn test_field_lookup_matches_column() {
        let course = Course {
            course_name: Some("Intro".into()),
            ..Default::default()
        };
        assert_eq!(course.field(Column::CourseName), Some(&"Intro".into()));
        assert_eq!(course.field(Column::Trimester), None);
    }

    #[test]
    fn test_column_round_trips_wire_names() {
        for column in Column::all() {
            assert_eq!(column.key().parse::<Column>(), Ok(*column));
        }
    }

    #[test]
    fn test_column_rejects_case_variants() {
        assert!("coursenumber".parse::<Column>().is_err());
        assert!("Trimester".parse::<Column>().is_err());
    }

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(FieldValue::Number(2.0).to_string(), "2");
        assert_eq!(FieldValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_default_directive_is_unsorted_ascending() {
        let d = SortDirective::default();
        assert!(d.is_unsorted());
        assert_eq!(d.direction, SortDirection::Ascending);
    }
}
