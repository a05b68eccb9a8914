//! Command-line surface.
//!
//! ```text
//! mycmds                 list saved commands
//! mycmds add [-a ALIAS]  save the most recent shell history entry
//! mycmds clear           erase all saved commands
//! mycmds <TOKEN>         run a saved command by index or alias
//! ```

use clap::{Parser, Subcommand};

/// Save recently executed shell commands and run them again later.
#[derive(Parser, Debug)]
#[command(name = "mycmds", version, about, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CliCommand {
    /// Save the most recent shell history entry
    Add {
        /// Alias for the saved command
        #[arg(short, long, default_value = "")]
        alias: String,
    },

    /// Erase all saved commands
    Clear,

    /// Run a saved command by index (any token containing a digit) or alias
    #[command(external_subcommand)]
    Run(Vec<String>),
}
