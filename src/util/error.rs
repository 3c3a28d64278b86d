// CatalogView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Errors only arise at the edges (loading, config, shell input, export);
// the view pipeline itself is total and never fails.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CatalogView operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CatalogError {
    /// Loading the record collection failed.
    Source(SourceError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// A view parameter (column name etc.) was invalid.
    View(ViewError),

    /// A shell command could not be parsed.
    Command(CommandError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Record source error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::View(e) => write!(f, "View error: {e}"),
            Self::Command(e) => write!(f, "Command error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::View(e) => Some(e),
            Self::Command(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors related to loading the course collection.
#[derive(Debug)]
pub enum SourceError {
    /// I/O error reading the course file.
    Io { path: PathBuf, source: io::Error },

    /// The course JSON could not be deserialised.
    Json {
        origin: String,
        source: serde_json::Error,
    },

    /// Course file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read courses '{}': {source}", path.display())
            }
            Self::Json { origin, source } => {
                write!(f, "Invalid course JSON in {origin}: {source}")
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Course file '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::FileTooLarge { .. } => None,
        }
    }
}

impl From<SourceError> for CatalogError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// View errors
// ---------------------------------------------------------------------------

/// Errors raised while interpreting view parameters supplied by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The column name is not one of the sortable columns.
    UnknownColumn { name: String },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumn { name } => write!(
                f,
                "Unknown column '{name}'. Expected one of: trimester, courseNumber, \
                 courseName, semesterCredits, totalClockHours"
            ),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<ViewError> for CatalogError {
    fn from(e: ViewError) -> Self {
        Self::View(e)
    }
}

// ---------------------------------------------------------------------------
// Command errors
// ---------------------------------------------------------------------------

/// Errors related to parsing interactive shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    Unknown { word: String },

    /// The command requires an argument that was not supplied.
    MissingArgument { command: &'static str },

    /// The page argument is not a positive integer.
    InvalidPage { raw: String },

    /// The sort column is not recognised.
    Column(ViewError),

    /// The line exceeds the maximum accepted length.
    LineTooLong { length: usize, max_length: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { word } => {
                write!(f, "Unknown command '{word}'. Type 'help' for a list.")
            }
            Self::MissingArgument { command } => {
                write!(f, "'{command}' requires an argument")
            }
            Self::InvalidPage { raw } => {
                write!(f, "'{raw}' is not a valid page number")
            }
            Self::Column(e) => write!(f, "{e}"),
            Self::LineTooLong { length, max_length } => write!(
                f,
                "Input line is {length} bytes, exceeds maximum of {max_length}"
            ),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Column(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ViewError> for CommandError {
    fn from(e: ViewError) -> Self {
        Self::Column(e)
    }
}

impl From<CommandError> for CatalogError {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export output.
    Io { target: String, source: io::Error },

    /// CSV serialisation error.
    Csv { target: String, source: csv::Error },

    /// JSON serialisation error.
    Json {
        target: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { target, source } => {
                write!(f, "Export I/O error '{target}': {source}")
            }
            Self::Csv { target, source } => {
                write!(f, "CSV export error '{target}': {source}")
            }
            Self::Json { target, source } => {
                write!(f, "JSON export error '{target}': {source}")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for CatalogError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CatalogError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for CatalogView results.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_column_message_lists_columns() {
        let err = ViewError::UnknownColumn {
            name: "price".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'price'"));
        assert!(msg.contains("totalClockHours"));
    }

    #[test]
    fn test_command_error_preserves_view_source() {
        let err: CommandError = ViewError::UnknownColumn {
            name: "x".to_string(),
        }
        .into();
        assert!(err.source().is_some());

        let top: CatalogError = err.into();
        assert!(top.to_string().starts_with("Command error:"));
    }

    #[test]
    fn test_source_error_too_large_has_no_source() {
        let err = SourceError::FileTooLarge {
            path: PathBuf::from("big.json"),
            size: 20,
            max_size: 10,
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("big.json"));
    }
}
