//! mycmds: save shell commands under an alias and run them again later.
//!
//! `mycmds add -a build` reads the shell history, takes the command that ran
//! just before it and stores it in `<data-dir>/mycmds/cmds.json`. `mycmds`
//! lists the saved commands and `mycmds build` (or `mycmds 0`) runs one again.
//!
//! # Architecture
//!
//! - **store**: the JSON-backed ordered list of saved commands
//! - **resolver**: maps a user token to a saved command by index or alias
//! - **capture**: reads shell history and extracts the last command
//! - **dispatch**: runs a command string as a child process
//! - **commands**: the controller composing the above
//! - **config**: environment-driven settings
//! - **ui**: table rendering for the listing
//! - **cli**: the clap argument definitions

pub mod capture;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod resolver;
pub mod store;
pub mod ui;

use capture::ShellHistory;
use cli::{Cli, CliCommand};
use commands::{CommandError, Controller};
use config::Config;
use dispatch::ProcessDispatcher;
use std::io::IsTerminal;
use store::CommandStore;

/// Runs one invocation and returns the process exit code.
///
/// # Errors
///
/// Returns `CommandError` for any failure before a command is dispatched, or
/// when the dispatched program cannot be started. A dispatched program that
/// exits unsuccessfully is not an error; its exit code is returned.
pub fn run(cli: Cli) -> Result<i32, CommandError> {
    let config = Config::from_env()?;
    log::debug!("using configuration {:?}", config);

    let store = CommandStore::open(&config.data_dir)?;
    let controller = Controller::new(
        store,
        ShellHistory::new(&config.histfile),
        ProcessDispatcher::new().with_echo(true),
        config.separator,
    )
    .with_colors(std::io::stdout().is_terminal());

    match cli.command {
        None => {
            println!("{}", controller.list()?);
            Ok(0)
        }
        Some(CliCommand::Add { alias }) => {
            controller.add(&alias)?;
            Ok(0)
        }
        Some(CliCommand::Clear) => {
            controller.clear()?;
            Ok(0)
        }
        Some(CliCommand::Run(args)) => {
            let Some((token, rest)) = args.split_first() else {
                return Ok(0);
            };
            if !rest.is_empty() {
                log::warn!("ignoring extra arguments {:?}", rest);
            }
            Ok(controller.run(token)?.exit_code())
        }
    }
}
