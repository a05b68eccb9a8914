//! Sources of shell history text.

use super::CaptureError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can return recent shell history, newest entry first.
pub trait HistorySource {
    /// Returns the recent history text, one entry per line, newest first.
    fn read_recent(&self) -> Result<String, CaptureError>;

    /// Human-readable location used in error messages.
    fn describe(&self) -> String;
}

/// Reads history through `bash`'s `history` builtin.
///
/// The file is loaded with `history -r` and, if that succeeds, the two
/// newest entries are printed. `bash` lists them oldest first, and the
/// newest entry is the `mycmds add` invocation itself, so the first line of
/// the output is the command the user ran before it. An unreadable file
/// makes `history -r` fail, which is reported as
/// `CaptureError::HistoryCommand`.
#[derive(Debug, Clone)]
pub struct ShellHistory {
    histfile: PathBuf,
    shell: String,
}

impl ShellHistory {
    /// Reads `histfile` using `bash`.
    pub fn new(histfile: impl Into<PathBuf>) -> Self {
        Self {
            histfile: histfile.into(),
            shell: "bash".to_string(),
        }
    }

    /// Uses a different shell binary. It must accept `-c` and provide a
    /// bash-compatible `history` builtin.
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Path of the history file.
    pub fn histfile(&self) -> &Path {
        &self.histfile
    }

    fn script(&self) -> String {
        format!(
            "history -r {} && history 2",
            quote(&self.histfile.to_string_lossy())
        )
    }
}

impl HistorySource for ShellHistory {
    fn read_recent(&self) -> Result<String, CaptureError> {
        let script = self.script();
        log::debug!("reading history with {} -c {:?}", self.shell, script);

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&script)
            .output()
            .map_err(|source| CaptureError::Spawn {
                program: self.shell.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CaptureError::HistoryCommand {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self) -> String {
        self.histfile.display().to_string()
    }
}

/// Single-quotes `value` for a POSIX shell.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
