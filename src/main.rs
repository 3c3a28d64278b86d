// CatalogView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. One-time course load from the record source
// 4. One-shot rendering/export, or the interactive shell

mod shell;

// Re-export modules from the library crate so that `shell.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use catalogview::app;
pub use catalogview::core;
pub use catalogview::platform;
pub use catalogview::ui;
pub use catalogview::util;

use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use crate::app::source::JsonFileSource;
use crate::app::state::AppState;
use crate::core::model::{Column, Course};

/// Output format for one-shot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Bordered text table with a navigation line.
    Table,
    Csv,
    Json,
}

/// CatalogView - search, sort, and page through a course catalog.
///
/// Loads a JSON array of course records once, then shows one page of the
/// filtered and sorted view.
#[derive(Parser, Debug)]
#[command(name = "catalogview", version, about)]
struct Cli {
    /// Course JSON file (defaults to [source] path in config.toml).
    path: Option<PathBuf>,

    /// Search text matched against course number and name.
    #[arg(short = 'q', long = "query")]
    query: Option<String>,

    /// Sort column; repeat to flip direction (e.g. -s trimester -s trimester).
    #[arg(short = 's', long = "sort")]
    sort: Vec<Column>,

    /// Page to show (1-based).
    #[arg(long = "page", default_value_t = 1)]
    page: usize,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output every matching course instead of the current page.
    #[arg(long = "all")]
    all: bool,

    /// Start the interactive shell after loading.
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging so [logging] can take effect; its
    // warnings are replayed once the subscriber exists.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config_file(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "CatalogView starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
        eprintln!("Warning: {warning}");
    }

    let source_path = cli.path.clone().unwrap_or_else(|| config.source_path.clone());
    let source = JsonFileSource::new(source_path);

    let mut state = AppState::new(config.view_config(), cli.debug);
    if let Err(e) = state.reload(&source) {
        eprintln!("Error: {e}");
        if !cli.interactive {
            std::process::exit(1);
        }
    }

    if let Some(ref query) = cli.query {
        state.apply(&app::command::Command::Search(query.clone()));
    }
    for column in &cli.sort {
        state.apply(&app::command::Command::Sort(*column));
    }
    state.apply(&app::command::Command::Page(cli.page));

    let result = if cli.interactive {
        let stdin = std::io::stdin();
        shell::run(&mut state, &source, stdin.lock(), std::io::stdout().lock())
            .map_err(|e| util::error::CatalogError::Io {
                path: PathBuf::from("<stdio>"),
                operation: "interactive shell",
                source: e,
            })
    } else {
        print_once(&state, cli.format, cli.all)
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "CatalogView failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Render or export the current view to stdout.
fn print_once(state: &AppState, format: OutputFormat, all: bool) -> util::error::Result<()> {
    let stdout = std::io::stdout();
    write_view(state, format, all, stdout.lock())
}

/// Render or export the current view to `out`.
///
/// With `all`, every matching course is written; the table then shows the
/// whole ordered set as one page.
fn write_view<W: Write>(
    state: &AppState,
    format: OutputFormat,
    all: bool,
    mut out: W,
) -> util::error::Result<()> {
    let window = if all { state.full_window() } else { state.window() };
    let rows: &[&Course] = &window.items;
    let io_err = |e: std::io::Error| util::error::CatalogError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "render",
        source: e,
    };

    match format {
        OutputFormat::Table => {
            let table = ui::table::render_table(&window, &state.view().sort());
            writeln!(out, "{table}\n{}", ui::table::render_navigation(&window)).map_err(io_err)?;
        }
        OutputFormat::Csv => {
            core::export::export_csv(rows, &mut out, "stdout")?;
        }
        OutputFormat::Json => {
            core::export::export_json(rows, &mut out, "stdout")?;
            writeln!(out).map_err(io_err)?;
        }
    }

    tracing::debug!(rows = rows.len(), format = ?format, "View printed");
    Ok(())
}
