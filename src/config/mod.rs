//! Configuration for mycmds.
//!
//! Everything is read from environment variables:
//!
//! - `XDG_DATA_HOME`: base data directory, defaulting to `$HOME/.local/share`
//! - `HISTFILE`: shell history file, defaulting to `$HOME/.zsh_history`
//! - `MYCMDS_SEPARATOR`: character between a history line's timestamp and
//!   its command, defaulting to `;`
//!
//! Empty variables are treated as unset.

use crate::capture::DEFAULT_SEPARATOR;
use std::fmt;
use std::path::PathBuf;

/// Environment variable for the separator override.
pub const SEPARATOR_VAR: &str = "MYCMDS_SEPARATOR";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base data directory; the store lives in `<data_dir>/mycmds/cmds.json`.
    pub data_dir: PathBuf,

    /// Shell history file read by `add`.
    pub histfile: PathBuf,

    /// Separator between a history line's timestamp and its command.
    pub separator: char,
}

/// Errors that can occur while building the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the variable nor a home directory is available.
    NoHomeDirectory {
        /// The variable that would have overridden the default
        variable: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoHomeDirectory { variable } => write!(
                f,
                "Could not determine home directory; set {} or HOME",
                variable
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use mycmds::config::Config;
    ///
    /// let config = Config::with_lookup(|name| match name {
    ///     "HOME" => Some("/home/me".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.data_dir, std::path::PathBuf::from("/home/me/.local/share"));
    /// ```
    pub fn with_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let home = var("HOME").map(PathBuf::from).or_else(dirs::home_dir);

        let data_dir = match var("XDG_DATA_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => home
                .as_ref()
                .map(|home| home.join(".local").join("share"))
                .or_else(dirs::data_dir)
                .ok_or(ConfigError::NoHomeDirectory {
                    variable: "XDG_DATA_HOME",
                })?,
        };

        let histfile = match var("HISTFILE") {
            Some(file) => PathBuf::from(file),
            None => home
                .as_ref()
                .map(|home| home.join(".zsh_history"))
                .ok_or(ConfigError::NoHomeDirectory {
                    variable: "HISTFILE",
                })?,
        };

        let separator = match var(SEPARATOR_VAR) {
            Some(value) => parse_separator(&value).unwrap_or_else(|| {
                log::warn!(
                    "{} must be a single character, got {:?}; using '{}'",
                    SEPARATOR_VAR,
                    value,
                    DEFAULT_SEPARATOR
                );
                DEFAULT_SEPARATOR
            }),
            None => DEFAULT_SEPARATOR,
        };

        Ok(Self {
            data_dir,
            histfile,
            separator,
        })
    }
}

fn parse_separator(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
