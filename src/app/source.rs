// CatalogView - app/source.rs
//
// Record sources: providers that yield the full, un-filtered course
// collection once per load cycle. The view pipeline never fetches; it only
// sees whatever the last successful load produced.

use crate::core::model::Course;
use crate::util::constants;
use crate::util::error::SourceError;
use std::path::PathBuf;

/// A read-only provider of the complete course collection.
pub trait RecordSource {
    /// Load every course. No partial or streamed loading.
    fn load(&self) -> Result<Vec<Course>, SourceError>;

    /// Short description for log lines and status messages.
    fn describe(&self) -> String;
}

/// Courses read from a JSON array file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Course>, SourceError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        if metadata.len() > constants::MAX_SOURCE_FILE_SIZE {
            return Err(SourceError::FileTooLarge {
                path: self.path.clone(),
                size: metadata.len(),
                max_size: constants::MAX_SOURCE_FILE_SIZE,
            });
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let courses = parse_courses(&content, &self.describe())?;
        tracing::debug!(path = %self.path.display(), count = courses.len(), "Course file parsed");
        Ok(courses)
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}

/// Courses parsed from an in-memory JSON document (embedded or piped data).
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    json: String,
}

impl JsonStrSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl RecordSource for JsonStrSource {
    fn load(&self) -> Result<Vec<Course>, SourceError> {
        parse_courses(&self.json, &self.describe())
    }

    fn describe(&self) -> String {
        "inline JSON".to_string()
    }
}

/// Parse a JSON array of course objects.
fn parse_courses(content: &str, origin: &str) -> Result<Vec<Course>, SourceError> {
    serde_json::from_str(content).map_err(|e| SourceError::Json {
        origin: origin.to_string(),
        source: e,
    })
}
