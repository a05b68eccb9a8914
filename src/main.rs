//! mycmds binary entry point.
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` to see
//! store paths and dispatched programs.

use clap::Parser;
use mycmds::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match mycmds::run(cli) {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("mycmds: {}", err);
            exit_code(err.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    // Exit statuses are a single byte on Unix; anything else becomes a failure.
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
