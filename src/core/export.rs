// CatalogView - core/export.rs
//
// CSV and JSON export of catalog rows.
// Core layer: writes to any Write trait object.

use crate::core::model::{Column, Course};
use crate::util::error::ExportError;
use std::io::Write;

/// Export courses to CSV.
///
/// Header row uses the wire column names; missing values are empty cells.
/// `target` names the destination for error messages only.
pub fn export_csv<W: Write>(
    courses: &[&Course],
    writer: W,
    target: &str,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let csv_err = |e: csv::Error| ExportError::Csv {
        target: target.to_string(),
        source: e,
    };

    csv_writer
        .write_record(Column::all().iter().map(Column::key))
        .map_err(csv_err)?;

    let mut count = 0;
    for course in courses {
        let row: Vec<String> = Column::all()
            .iter()
            .map(|&c| course.field(c).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        csv_writer.write_record(&row).map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        target: target.to_string(),
        source: e,
    })?;

    Ok(count)
}

/// Export courses to JSON (array of objects, same shape as the source file:
/// integer cells stay integers and missing cells are left out).
pub fn export_json<W: Write>(
    courses: &[&Course],
    writer: W,
    target: &str,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, courses).map_err(|e| ExportError::Json {
        target: target.to_string(),
        source: e,
    })?;
    Ok(courses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FieldValue;

    fn make_course(number: &str, name: Option<&str>) -> Course {
        Course {
            trimester: Some(FieldValue::from(1)),
            course_number: Some(number.into()),
            course_name: name.map(FieldValue::from),
            semester_credits: Some(FieldValue::Number(2.5)),
            total_clock_hours: None,
        }
    }

    #[test]
    fn test_csv_export() {
        let courses = [make_course("CS101", Some("Intro")), make_course("CS201", None)];
        let refs: Vec<&Course> = courses.iter().collect();
        let mut buf = Vec::new();
        let count = export_csv(&refs, &mut buf, "stdout").unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "trimester,courseNumber,courseName,semesterCredits,totalClockHours"
        );
        assert_eq!(lines[1], "1,CS101,Intro,2.5,");
        assert_eq!(lines[2], "1,CS201,,2.5,");
    }

    #[test]
    fn test_json_export_matches_source_shape() {
        let courses = [make_course("CS101", Some("Intro")), make_course("CS201", None)];
        let refs: Vec<&Course> = courses.iter().collect();
        let mut buf = Vec::new();
        let count = export_json(&refs, &mut buf, "out.json").unwrap();
        assert_eq!(count, 2);

        // Whole numbers stay integers and missing fields are omitted, not null.
        let expected = r#"[
  {
    "trimester": 1,
    "courseNumber": "CS101",
    "courseName": "Intro",
    "semesterCredits": 2.5
  },
  {
    "trimester": 1,
    "courseNumber": "CS201",
    "semesterCredits": 2.5
  }
]"#;
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, expected);

        let reloaded: Vec<Course> = serde_json::from_str(&output).unwrap();
        assert_eq!(reloaded, courses.to_vec());
    }
}
