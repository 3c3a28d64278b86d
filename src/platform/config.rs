// CatalogView - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::paginate::PaginationMode;
use crate::core::view::ViewConfig;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for CatalogView configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/catalogview/ or %APPDATA%\CatalogView\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[view]` section.
    pub view: ViewSection,
    /// `[source]` section.
    pub source: SourceSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[view]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ViewSection {
    /// Rows per page.
    pub page_size: Option<usize>,
    /// false = show every row with inert navigation.
    pub pagination_enabled: Option<bool>,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Course JSON file to load when none is given on the command line.
    pub path: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Windowed pagination on/off.
    pub pagination_enabled: bool,
    /// Course file path.
    pub source_path: PathBuf,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: constants::DEFAULT_PAGE_SIZE,
            pagination_enabled: constants::DEFAULT_PAGINATION_ENABLED,
            source_path: PathBuf::from(constants::DEFAULT_SOURCE_FILE),
            log_level: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// The fixed view configuration handed to the pipeline.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            page_size: self.page_size,
            pagination: PaginationMode::from_enabled(self.pagination_enabled),
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    load_config_file(&config_dir.join(constants::CONFIG_FILE_NAME))
}

/// Load and validate a specific config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the application still starts but the user is informed.
pub fn load_config_file(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- View: page_size --
    if let Some(size) = raw.view.page_size {
        if (constants::MIN_PAGE_SIZE..=constants::MAX_PAGE_SIZE).contains(&size) {
            config.page_size = size;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[view] page_size".to_string(),
                value: size.to_string(),
                expected: format!("{}-{}", constants::MIN_PAGE_SIZE, constants::MAX_PAGE_SIZE),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_PAGE_SIZE
            ));
        }
    }

    // -- View: pagination_enabled --
    if let Some(enabled) = raw.view.pagination_enabled {
        config.pagination_enabled = enabled;
    }

    // -- Source: path --
    if let Some(ref path) = raw.source.path {
        if path.is_empty() {
            warnings.push(format!(
                "[source] path is empty. Using default ({}).",
                constants::DEFAULT_SOURCE_FILE
            ));
        } else {
            config.source_path = PathBuf::from(path);
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
        assert!(config.pagination_enabled);
    }

    #[test]
    fn test_valid_values_are_applied() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[view]
page_size = 10
pagination_enabled = false

[source]
path = "data/catalog.json"

[logging]
level = "DEBUG"
file = "catalog.log"

[future]
unknown = 1
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.page_size, 10);
        assert!(!config.pagination_enabled);
        assert_eq!(config.source_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("catalog.log"));
        assert_eq!(
            config.view_config().pagination,
            PaginationMode::Unpaginated
        );
    }

    #[test]
    fn test_out_of_range_page_size_falls_back() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[view]\npage_size = 0\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("page_size"));
    }

    #[test]
    fn test_bad_log_level_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(dir.path());
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_unparseable_file_gives_defaults_with_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[view\npage_size = ");
        let (config, warnings) = load_config_file(&path);
        assert_eq!(config.page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }
}
