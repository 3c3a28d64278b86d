// CatalogView - shell.rs
//
// Interactive line shell. Reads one command per line, applies it to the
// app state, and re-renders the current page after every view change.

use crate::app::command::{parse_command, Command, HELP_TEXT};
use crate::app::source::RecordSource;
use crate::app::state::AppState;
use crate::ui::table::{render_navigation, render_table};
use crate::util::constants;
use std::io::{BufRead, Write};

/// Run the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    source: &dyn RecordSource,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    render(state, &mut output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", constants::SHELL_PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected shell input");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Reload => {
                // Failure keeps the stale collection; the status line says why.
                let _ = state.reload(source);
                writeln!(output, "{}", state.status_message)?;
                render(state, &mut output)?;
            }
            other => {
                if !state.apply(&other) {
                    break;
                }
                render(state, &mut output)?;
            }
        }
    }

    tracing::debug!("Shell exited");
    Ok(())
}

fn render<W: Write>(state: &AppState, output: &mut W) -> std::io::Result<()> {
    let window = state.window();
    let query = state.view().query();
    if !query.is_empty() {
        writeln!(output, "Search: \"{query}\"")?;
    }
    writeln!(output, "{}", render_table(&window, &state.view().sort()))?;
    writeln!(output, "{}", render_navigation(&window))?;
    if state.debug_mode {
        let view = state.view();
        let config = state.config();
        writeln!(
            output,
            "[debug] query={:?} sort={:?} page={} page_size={} pagination={:?} courses={} | {}",
            view.query(),
            view.sort(),
            view.page(),
            config.page_size,
            config.pagination,
            state.courses().len(),
            state.status_message
        )?;
    }
    Ok(())
}
