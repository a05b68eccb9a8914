//! Capturing the last executed command from shell history.
//!
//! History lines are expected as `<timestamp><separator><command>`. Zsh's
//! extended history format (`: 1700000000:0;ls -la`) and plain
//! `1700000000;ls -la` lines both fit, since only the first separator counts.

pub mod history;

pub use history::{HistorySource, ShellHistory};

use std::fmt;

/// Separator between the timestamp prefix and the command text.
pub const DEFAULT_SEPARATOR: char = ';';

/// Errors that can occur while capturing a command from history.
#[derive(Debug)]
pub enum CaptureError {
    /// The history line has no separator after its timestamp.
    MissingSeparator {
        /// The line that was inspected
        line: String,
        /// The separator that was expected
        separator: char,
    },

    /// The history source returned nothing.
    NoHistory {
        /// Where the history was read from
        source: String,
    },

    /// The text after the separator is blank.
    EmptyCommand {
        /// The line that was inspected
        line: String,
    },

    /// The history reader process could not be started.
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The history reader process ran but reported failure.
    HistoryCommand {
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::MissingSeparator { line, separator } => write!(
                f,
                "Failed to parse history line '{}'. History records are expected to be prefixed with a timestamp and '{}', but no '{}' was found",
                line, separator, separator
            ),
            CaptureError::NoHistory { source } => write!(
                f,
                "No previous command found; check that your history file at {} is being written",
                source
            ),
            CaptureError::EmptyCommand { line } => {
                write!(f, "History line '{}' contains no command", line)
            }
            CaptureError::Spawn { program, source } => {
                write!(f, "Failed to start '{}' to read history: {}", program, source)
            }
            CaptureError::HistoryCommand { code, stderr } => {
                match code {
                    Some(code) => write!(f, "Reading history failed with exit code {}", code)?,
                    None => write!(f, "Reading history was terminated by a signal")?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Returns the newest entry of newest-first history output.
///
/// # Errors
///
/// Returns `CaptureError::NoHistory` if the output has no non-blank line.
/// `source` only feeds the error message.
pub fn latest_line<'a>(history: &'a str, source: &str) -> Result<&'a str, CaptureError> {
    history
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| CaptureError::NoHistory {
            source: source.to_string(),
        })
}

/// Extracts the runnable command from a history line.
///
/// Splits on the first `separator` and returns everything after it, with the
/// trailing line ending removed.
///
/// # Errors
///
/// Returns `CaptureError::MissingSeparator` if the line has no separator and
/// `CaptureError::EmptyCommand` if nothing but whitespace follows it.
///
/// # Example
///
/// ```
/// use mycmds::capture::extract_command;
///
/// assert_eq!(extract_command("1700000000;ls -la", ';').unwrap(), "ls -la");
/// ```
pub fn extract_command(line: &str, separator: char) -> Result<String, CaptureError> {
    let (_, command) = line
        .split_once(separator)
        .ok_or_else(|| CaptureError::MissingSeparator {
            line: line.to_string(),
            separator,
        })?;

    let command = command.trim_end_matches(['\r', '\n']);
    if command.trim().is_empty() {
        return Err(CaptureError::EmptyCommand {
            line: line.to_string(),
        });
    }

    Ok(command.to_string())
}

/// Reads the most recent history entry from `source` and extracts its command.
pub fn capture_last_command<H: HistorySource + ?Sized>(
    source: &H,
    separator: char,
) -> Result<String, CaptureError> {
    let history = source.read_recent()?;
    let line = latest_line(&history, &source.describe())?;
    log::debug!("captured history line {:?}", line);
    extract_command(line, separator)
}
