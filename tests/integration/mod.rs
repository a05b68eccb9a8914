//! Integration tests module for mycmds
//!
//! Shared fixtures: a history source with fixed contents, a dispatcher that
//! records instead of spawning, and helpers for running the real binary
//! against an isolated data directory.

pub mod binary_test;
pub mod end_to_end_test;

use mycmds::capture::{CaptureError, HistorySource};
use mycmds::dispatch::{DispatchError, Dispatcher, ExitOutcome};
use std::cell::RefCell;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// History source returning fixed text.
pub struct FixedHistory(pub String);

impl FixedHistory {
    pub fn new(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl HistorySource for FixedHistory {
    fn read_recent(&self) -> Result<String, CaptureError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed test history".to_string()
    }
}

/// Dispatcher that records every command it is asked to run.
#[derive(Default)]
pub struct RecordingDispatcher {
    pub dispatched: RefCell<Vec<String>>,
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, command: &str) -> Result<ExitOutcome, DispatchError> {
        self.dispatched.borrow_mut().push(command.to_string());
        Ok(ExitOutcome::Success)
    }
}

/// Runs the `mycmds` binary with `data_dir` as `XDG_DATA_HOME`.
pub fn run_binary(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mycmds"))
        .args(args)
        .env("XDG_DATA_HOME", data_dir)
        .env("HISTFILE", data_dir.join("history"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run mycmds binary")
}
