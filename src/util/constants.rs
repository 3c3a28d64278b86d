// CatalogView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CatalogView";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CatalogView";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Pagination
// =============================================================================

/// Number of rows shown per page when no config overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Minimum user-configurable page size (a zero-row page is never useful).
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum user-configurable page size.
pub const MAX_PAGE_SIZE: usize = 1_000;

/// Whether windowed pagination is active by default.
/// When false the whole filtered/sorted set is shown with inert navigation.
pub const DEFAULT_PAGINATION_ENABLED: bool = true;

// =============================================================================
// Record source limits
// =============================================================================

/// Maximum size of a course JSON file in bytes.
///
/// The whole collection is held in memory and re-sorted on every view, so a
/// catalog far beyond this size is almost certainly the wrong file.
pub const MAX_SOURCE_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Default course file name, resolved relative to the working directory.
pub const DEFAULT_SOURCE_FILE: &str = "courses.json";

// =============================================================================
// Shell
// =============================================================================

/// Prompt printed before each line in interactive mode.
pub const SHELL_PROMPT: &str = "catalog> ";

/// Maximum accepted length of a single shell input line (bytes).
pub const MAX_COMMAND_LINE_LENGTH: usize = 4_096;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
