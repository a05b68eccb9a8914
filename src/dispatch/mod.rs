//! Re-execution of saved commands.
//!
//! A command string is split on whitespace into a program and its arguments
//! and run as a child process sharing this process's terminal. There is no
//! shell involved, so quoting, pipes and globs are not interpreted: a
//! quoted argument containing spaces arrives as several arguments.

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

/// Exit code reported when a program cannot be started, as shells do.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// How a dispatched command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The child exited with status 0.
    Success,

    /// The child exited unsuccessfully.
    ///
    /// `code` is `None` when the child was terminated by a signal.
    Failed {
        /// Exit code of the child, if any
        code: Option<i32>,
    },
}

impl ExitOutcome {
    /// Maps the child's status to this process's exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitOutcome::Success => 0,
            ExitOutcome::Failed { code: Some(code) } => *code,
            ExitOutcome::Failed { code: None } => 1,
        }
    }

    /// Returns `true` if the child exited with status 0.
    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Success)
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            ExitOutcome::Success
        } else {
            ExitOutcome::Failed {
                code: status.code(),
            }
        }
    }
}

/// Errors that prevent a command from running at all.
#[derive(Debug)]
pub enum DispatchError {
    /// The command string contains no program name.
    EmptyCommand,

    /// The program could not be found or started.
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::EmptyCommand => write!(f, "Saved command is empty, nothing to run"),
            DispatchError::Spawn { program, source } => {
                write!(f, "Failed to run '{}': {}", program, source)
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::EmptyCommand => None,
            DispatchError::Spawn { source, .. } => Some(source),
        }
    }
}

/// Runs resolved commands.
pub trait Dispatcher {
    /// Runs `command` to completion.
    fn dispatch(&self, command: &str) -> Result<ExitOutcome, DispatchError>;
}

/// Splits a command string into program and arguments on whitespace.
///
/// # Errors
///
/// Returns `DispatchError::EmptyCommand` if the string is blank.
pub fn split_command(command: &str) -> Result<(&str, Vec<&str>), DispatchError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(DispatchError::EmptyCommand)?;
    Ok((program, parts.collect()))
}

/// Runs `command` with inherited standard streams and waits for it.
///
/// # Errors
///
/// Returns `DispatchError` if the command is blank or cannot be started. A
/// child that starts but exits unsuccessfully is an `Ok(ExitOutcome::Failed)`.
pub fn execute(command: &str) -> Result<ExitOutcome, DispatchError> {
    let (program, args) = split_command(command)?;
    log::debug!("spawning {:?} with args {:?}", program, args);

    let status = Command::new(program)
        .args(&args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| DispatchError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let outcome = ExitOutcome::from(status);
    log::debug!("{:?} finished with {:?}", program, outcome);
    Ok(outcome)
}

/// Dispatcher that spawns real processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessDispatcher {
    echo: bool,
}

impl ProcessDispatcher {
    /// Creates a dispatcher that runs commands silently.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints each command to stdout before running it.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }
}

impl Dispatcher for ProcessDispatcher {
    fn dispatch(&self, command: &str) -> Result<ExitOutcome, DispatchError> {
        if self.echo {
            println!("{}", command);
        }
        execute(command)
    }
}
