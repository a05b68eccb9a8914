//! Saved command store.
//!
//! The store is an ordered list of `{alias, command}` records persisted as a
//! JSON array. It is loaded fresh on every invocation and rewritten in full
//! after every mutation.
//!
//! # Example
//!
//! ```no_run
//! use mycmds::store::{append, CommandStore};
//!
//! let store = CommandStore::open(std::path::Path::new("/tmp/data"))?;
//! let commands = store.load()?;
//! let commands = append(commands, "build", "make all");
//! store.save(&commands)?;
//! # Ok::<(), mycmds::store::StoreError>(())
//! ```

pub mod models;
pub mod storage;

pub use models::{CommandList, SavedCommand, StoreError};
pub use storage::CommandStore;

/// Decodes a store buffer.
///
/// A zero-length (or whitespace-only) buffer is a freshly created file and
/// decodes to an empty list. Anything else must be a JSON array of
/// `{alias, command}` objects; unknown fields are ignored.
///
/// # Errors
///
/// Returns `StoreError::Parse` if the buffer is not a valid command list.
pub fn load(bytes: &[u8]) -> Result<CommandList, StoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(CommandList::new());
    }

    serde_json::from_slice(bytes).map_err(StoreError::Parse)
}

/// Encodes the full list for a complete overwrite of the store file.
pub fn save(commands: &CommandList) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(commands).map_err(StoreError::Serialize)
}

/// Returns `commands` with one record appended at the end.
///
/// Aliases and commands are not deduplicated and the alias may be empty.
pub fn append(
    mut commands: CommandList,
    alias: impl Into<String>,
    command: impl Into<String>,
) -> CommandList {
    commands.push(SavedCommand::new(alias, command));
    commands
}

/// Returns an empty list.
pub fn clear() -> CommandList {
    CommandList::new()
}
