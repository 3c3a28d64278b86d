// CatalogView - app/command.rs
//
// Line-oriented shell commands. Each parsed command maps onto one view
// transition (or a shell-only action such as help/quit).

use crate::core::model::Column;
use crate::util::constants;
use crate::util::error::CommandError;

/// One user input event from the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search text. An empty string clears the search.
    Search(String),
    /// Header click on a column.
    Sort(Column),
    /// Move to the following page, if one exists.
    Next,
    /// Move to the preceding page, if one exists.
    Previous,
    /// Jump to a specific page.
    Page(usize),
    /// Re-read the record source.
    Reload,
    Help,
    Quit,
}

/// Help text listing every command.
pub const HELP_TEXT: &str = "\
Commands:
  search <text>   filter by course number or name (empty text clears)
  clear           clear the search
  sort <column>   sort by column; repeat to flip direction
                  columns: trimester, courseNumber, courseName,
                           semesterCredits, totalClockHours
  next | n        next page
  prev | p        previous page
  page <n>        jump to page n
  reload          reload the course file
  help            show this help
  quit | q        exit";

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line. The search text is everything after
/// the first space, kept verbatim.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    if line.len() > constants::MAX_COMMAND_LINE_LENGTH {
        return Err(CommandError::LineTooLong {
            length: line.len(),
            max_length: constants::MAX_COMMAND_LINE_LENGTH,
        });
    }

    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(' ') {
        Some((w, r)) => (w, r),
        None => (trimmed.trim_end(), ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" | "/" => Command::Search(rest.to_string()),
        "clear" => Command::Search(String::new()),
        "sort" => {
            let name = rest.trim();
            if name.is_empty() {
                return Err(CommandError::MissingArgument { command: "sort" });
            }
            Command::Sort(name.parse()?)
        }
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "page" => {
            let raw = rest.trim();
            if raw.is_empty() {
                return Err(CommandError::MissingArgument { command: "page" });
            }
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Page(n),
                _ => {
                    return Err(CommandError::InvalidPage {
                        raw: raw.to_string(),
                    })
                }
            }
        }
        "reload" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(CommandError::Unknown {
                word: other.to_string(),
            })
        }
    };

    Ok(Some(command))
}
