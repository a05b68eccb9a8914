//! Command handlers for mycmds.
//!
//! The [`Controller`] composes the store, the history capture, the resolver
//! and the dispatcher. Each handler is a linear sequence that stops at the
//! first failing step; in particular a store that fails to load is never
//! written back.

use crate::capture::{capture_last_command, CaptureError, HistorySource};
use crate::config::ConfigError;
use crate::dispatch::{DispatchError, Dispatcher, ExitOutcome, SPAWN_FAILURE_EXIT_CODE};
use crate::resolver::{self, ResolveError};
use crate::store::{self, CommandStore, SavedCommand, StoreError};
use crate::ui;
use std::fmt;

/// Error types for command execution.
#[derive(Debug)]
pub enum CommandError {
    /// Configuration could not be resolved.
    Config(ConfigError),

    /// The store could not be read, parsed or written.
    Store(StoreError),

    /// No command could be captured from history.
    Capture(CaptureError),

    /// The token did not match a saved command.
    Resolve(ResolveError),

    /// The resolved command could not be started.
    Dispatch(DispatchError),
}

impl CommandError {
    /// Exit status the process should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Dispatch(DispatchError::Spawn { .. }) => SPAWN_FAILURE_EXIT_CODE,
            _ => 1,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Config(err) => write!(f, "{}", err),
            CommandError::Store(err) => write!(f, "{}", err),
            CommandError::Capture(err) => write!(f, "{}", err),
            CommandError::Resolve(err) => write!(f, "{}", err),
            CommandError::Dispatch(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Config(err) => Some(err),
            CommandError::Store(err) => Some(err),
            CommandError::Capture(err) => Some(err),
            CommandError::Resolve(err) => Some(err),
            CommandError::Dispatch(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Config(err)
    }
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        CommandError::Store(err)
    }
}

impl From<CaptureError> for CommandError {
    fn from(err: CaptureError) -> Self {
        CommandError::Capture(err)
    }
}

impl From<ResolveError> for CommandError {
    fn from(err: ResolveError) -> Self {
        CommandError::Resolve(err)
    }
}

impl From<DispatchError> for CommandError {
    fn from(err: DispatchError) -> Self {
        CommandError::Dispatch(err)
    }
}

/// Orchestrates one invocation against a store.
pub struct Controller<H, D> {
    store: CommandStore,
    history: H,
    dispatcher: D,
    separator: char,
    colored: bool,
}

impl<H: HistorySource, D: Dispatcher> Controller<H, D> {
    /// Creates a controller over `store`.
    pub fn new(store: CommandStore, history: H, dispatcher: D, separator: char) -> Self {
        Self {
            store,
            history,
            dispatcher,
            separator,
            colored: false,
        }
    }

    /// Enables ANSI colors in listings.
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// The store this controller operates on.
    pub fn store(&self) -> &CommandStore {
        &self.store
    }

    /// The dispatcher used by [`Controller::run`].
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Renders the saved commands, or the empty-state notice.
    pub fn list(&self) -> Result<String, CommandError> {
        let commands = self.store.load()?;
        Ok(ui::format_listing(&commands, self.colored))
    }

    /// Saves the most recent history entry under `alias`.
    ///
    /// # Returns
    ///
    /// The saved command.
    ///
    /// # Errors
    ///
    /// Fails without touching the store if the history cannot be read, the
    /// latest line has no separator, or the existing store cannot be loaded.
    pub fn add(&self, alias: &str) -> Result<SavedCommand, CommandError> {
        let command = capture_last_command(&self.history, self.separator)?;
        let commands = self.store.load()?;

        let commands = store::append(commands, alias, command.as_str());
        self.store.save(&commands)?;

        log::info!(
            "saved {:?} as index {} with alias {:?}",
            command,
            commands.len() - 1,
            alias
        );
        Ok(SavedCommand::new(alias, command))
    }

    /// Erases all saved commands.
    pub fn clear(&self) -> Result<(), CommandError> {
        self.store.clear()?;
        log::info!("cleared {}", self.store.path().display());
        Ok(())
    }

    /// Resolves `token` and runs the matching command.
    ///
    /// Nothing is dispatched if the token does not resolve.
    pub fn run(&self, token: &str) -> Result<ExitOutcome, CommandError> {
        let commands = self.store.load()?;
        let saved = resolver::resolve(&commands, token)?;
        log::debug!("token {:?} resolved to {:?}", token, saved.command);
        Ok(self.dispatcher.dispatch(&saved.command)?)
    }
}
