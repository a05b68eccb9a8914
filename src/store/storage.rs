//! On-disk persistence for the saved command store.
//!
//! The store lives at `<data-dir>/mycmds/cmds.json`. Every write replaces the
//! whole file: the new contents go to a sibling temporary file which is then
//! renamed over the store, so a failed write leaves the previous file intact.

use super::models::{CommandList, StoreError};
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Directory created under the data directory.
pub const STORE_DIR_NAME: &str = "mycmds";

/// File name of the store inside [`STORE_DIR_NAME`].
pub const STORE_FILE_NAME: &str = "cmds.json";

/// Handle to the persisted command list.
///
/// Holds only the path; the file is opened and closed inside each operation.
#[derive(Debug, Clone)]
pub struct CommandStore {
    path: PathBuf,
}

impl CommandStore {
    /// Opens the store under `data_dir`, creating `<data_dir>/mycmds` if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileAccess` if the directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let store_dir = data_dir.join(STORE_DIR_NAME);

        if !store_dir.exists() {
            log::debug!("creating store directory {}", store_dir.display());
            fs::create_dir_all(&store_dir)
                .map_err(|e| StoreError::file_access(&store_dir, e))?;
        }

        Ok(Self::at_path(store_dir.join(STORE_FILE_NAME)))
    }

    /// Uses an explicit file path without touching the filesystem.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved commands.
    ///
    /// A missing or zero-length file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileAccess` if the file exists but cannot be read,
    /// or `StoreError::Parse` if its contents are not a valid command list.
    pub fn load(&self) -> Result<CommandList, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no store at {}, starting empty", self.path.display());
                return Ok(CommandList::new());
            }
            Err(e) => return Err(StoreError::file_access(&self.path, e)),
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| StoreError::file_access(&self.path, e))?;

        let commands = super::load(&bytes)?;
        log::debug!(
            "loaded {} saved commands from {}",
            commands.len(),
            self.path.display()
        );
        Ok(commands)
    }

    /// Overwrites the store with `commands`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or any file operation fails. The
    /// existing store file is left unchanged in that case.
    pub fn save(&self, commands: &CommandList) -> Result<(), StoreError> {
        let bytes = super::save(commands)?;

        let temp_path = self.path.with_extension("json.tmp");
        let written = write_file(&temp_path, &bytes)
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::file_access(&self.path, e));
        }

        log::debug!(
            "wrote {} saved commands to {}",
            commands.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Erases every saved command.
    ///
    /// The old contents are not read, so this also recovers a corrupted store.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&super::clear())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()
}
