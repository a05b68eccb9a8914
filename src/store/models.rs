//! Data models for the saved command store.
//!
//! This module defines the records persisted in `cmds.json` and the error
//! type shared by the in-memory and on-disk store operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single saved command.
///
/// Field order is the serialization order, so the persisted form is always
/// `{"alias": ..., "command": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCommand {
    /// User-chosen label used for lookup by name.
    ///
    /// May be empty and is not required to be unique.
    pub alias: String,

    /// The literal command line that gets re-executed.
    pub command: String,
}

impl SavedCommand {
    /// Creates a new saved command.
    pub fn new(alias: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            command: command.into(),
        }
    }
}

/// Ordered list of saved commands.
///
/// Insertion order is the persisted order and also the index shown in the
/// listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandList(Vec<SavedCommand>);

impl CommandList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of saved commands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the command at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SavedCommand> {
        self.0.get(index)
    }

    /// Iterates over the saved commands in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, SavedCommand> {
        self.0.iter()
    }

    /// Adds a command at the end of the list.
    pub fn push(&mut self, command: SavedCommand) {
        self.0.push(command);
    }

    /// Borrows the underlying slice.
    pub fn as_slice(&self) -> &[SavedCommand] {
        &self.0
    }
}

impl From<Vec<SavedCommand>> for CommandList {
    fn from(commands: Vec<SavedCommand>) -> Self {
        Self(commands)
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a SavedCommand;
    type IntoIter = std::slice::Iter<'a, SavedCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Errors that can occur while reading or writing the store.
#[derive(Debug)]
pub enum StoreError {
    /// The store file or its directory could not be opened, created or written.
    FileAccess {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The store contents are not a valid JSON list of saved commands.
    ///
    /// The file is never overwritten after this error.
    Parse(serde_json::Error),

    /// The in-memory list could not be serialized.
    Serialize(serde_json::Error),
}

impl StoreError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::FileAccess { path, source } => {
                write!(f, "Could not access {}: {}", path.display(), source)
            }
            StoreError::Parse(err) => {
                write!(f, "Saved commands file is not valid JSON: {}", err)
            }
            StoreError::Serialize(err) => {
                write!(f, "Failed to serialize saved commands: {}", err)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::FileAccess { source, .. } => Some(source),
            StoreError::Parse(err) => Some(err),
            StoreError::Serialize(err) => Some(err),
        }
    }
}
