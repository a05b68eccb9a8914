//! Resolution of user tokens to saved commands.
//!
//! A token containing at least one decimal digit anywhere is looked up by
//! index, everything else by alias. `room2` therefore counts as an index
//! token; since it does not parse as a number it is reported as an invalid
//! index rather than resolved.

use crate::store::{CommandList, SavedCommand};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::num::IntErrorKind;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

/// How a token will be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Contains a digit; looked up by position.
    Index(&'a str),
    /// Looked up by exact alias.
    Alias(&'a str),
}

/// Errors that can occur while resolving a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The index is negative or past the end of the list.
    IndexOutOfRange {
        /// The requested index
        index: i64,
        /// Number of saved commands
        len: usize,
    },

    /// No saved command has this alias.
    AliasNotFound {
        /// The alias that was looked up
        alias: String,
    },

    /// The token was classified as an index but is not an integer.
    InvalidIndex {
        /// The original token
        token: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::IndexOutOfRange { index, len } => write!(
                f,
                "Attempted to call index {} but there are only {} saved commands",
                index, len
            ),
            ResolveError::AliasNotFound { alias } => {
                write!(f, "No argument named '{}' and no alias by that name found", alias)
            }
            ResolveError::InvalidIndex { token } => {
                write!(f, "Could not find index of '{}': not a number", token)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Classifies a token as an index or an alias lookup.
pub fn classify(token: &str) -> Token<'_> {
    if DIGIT.is_match(token) {
        Token::Index(token)
    } else {
        Token::Alias(token)
    }
}

/// Returns the command at position `index`.
///
/// # Errors
///
/// Returns `ResolveError::IndexOutOfRange` unless `0 <= index < len`.
pub fn resolve_by_index(commands: &CommandList, index: i64) -> Result<&SavedCommand, ResolveError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| commands.get(i))
        .ok_or(ResolveError::IndexOutOfRange {
            index,
            len: commands.len(),
        })
}

/// Returns the earliest saved command whose alias equals `alias` exactly.
///
/// # Errors
///
/// Returns `ResolveError::AliasNotFound` if no alias matches.
pub fn resolve_by_alias<'a>(
    commands: &'a CommandList,
    alias: &str,
) -> Result<&'a SavedCommand, ResolveError> {
    commands
        .iter()
        .find(|saved| saved.alias == alias)
        .ok_or_else(|| ResolveError::AliasNotFound {
            alias: alias.to_string(),
        })
}

/// Classifies `token` and resolves it against `commands`.
pub fn resolve<'a>(commands: &'a CommandList, token: &str) -> Result<&'a SavedCommand, ResolveError> {
    match classify(token) {
        Token::Index(raw) => {
            let index = raw.trim().parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => ResolveError::IndexOutOfRange {
                    index: i64::MAX,
                    len: commands.len(),
                },
                IntErrorKind::NegOverflow => ResolveError::IndexOutOfRange {
                    index: i64::MIN,
                    len: commands.len(),
                },
                _ => ResolveError::InvalidIndex {
                    token: raw.to_string(),
                },
            })?;
            resolve_by_index(commands, index)
        }
        Token::Alias(alias) => resolve_by_alias(commands, alias),
    }
}
