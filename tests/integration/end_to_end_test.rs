//! End-to-end tests for mycmds
//!
//! These tests drive the controller through complete user workflows against
//! a real store file, with history and dispatch replaced by fixtures.

use super::{init_test_env, FixedHistory, RecordingDispatcher};
use mycmds::commands::{CommandError, Controller};
use mycmds::resolver::ResolveError;
use mycmds::store::{CommandStore, SavedCommand};
use std::fs;
use tempfile::TempDir;

fn create_controller(
    data_dir: &TempDir,
    history: &str,
) -> Controller<FixedHistory, RecordingDispatcher> {
    init_test_env();
    let store = CommandStore::open(data_dir.path()).expect("Failed to open store");
    Controller::new(
        store,
        FixedHistory::new(history),
        RecordingDispatcher::default(),
        ';',
    )
}

#[test]
fn test_end_to_end_add_list_run_clear() {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let controller = create_controller(&data_dir, "123;make all\n");

    // Step 1: empty store lists the empty-state message
    assert!(controller.list().unwrap().contains("No commands saved"));

    // Step 2: add -a build
    controller.add("build").unwrap();

    // Step 3: listing shows one row
    let listing = controller.list().unwrap();
    let rows: Vec<&str> = listing.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 2, "Expected header plus one row: {:?}", rows);
    let cells: Vec<&str> = rows[1].split_whitespace().collect();
    assert_eq!(cells, vec!["0", "build", "make", "all"]);

    // Step 4: run by index and by alias
    controller.run("0").unwrap();
    controller.run("build").unwrap();
    assert_eq!(
        *controller.dispatcher().dispatched.borrow(),
        vec!["make all".to_string(), "make all".to_string()]
    );

    // Step 5: clear
    controller.clear().unwrap();
    assert!(controller.list().unwrap().contains("No commands saved"));
}

#[test]
fn test_store_file_format() {
    let data_dir = TempDir::new().unwrap();
    let controller = create_controller(&data_dir, ": 1700000000:0;ssh prod deploy.sh\n");

    controller.add("deploy").unwrap();

    let path = data_dir.path().join("mycmds").join("cmds.json");
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        r#"[{"alias":"deploy","command":"ssh prod deploy.sh"}]"#
    );
}

#[test]
fn test_store_survives_new_controller() {
    let data_dir = TempDir::new().unwrap();

    create_controller(&data_dir, "1;echo one\n").add("one").unwrap();
    create_controller(&data_dir, "2;echo two\n").add("two").unwrap();

    let controller = create_controller(&data_dir, "");
    let stored = controller.store().load().unwrap();
    assert_eq!(
        stored.as_slice(),
        &[
            SavedCommand::new("one", "echo one"),
            SavedCommand::new("two", "echo two"),
        ]
    );

    controller.run("1").unwrap();
    assert_eq!(
        *controller.dispatcher().dispatched.borrow(),
        vec!["echo two".to_string()]
    );
}

#[test]
fn test_duplicate_alias_runs_earliest() {
    let data_dir = TempDir::new().unwrap();
    create_controller(&data_dir, "1;make debug\n").add("build").unwrap();
    create_controller(&data_dir, "2;make release\n").add("build").unwrap();

    let controller = create_controller(&data_dir, "");
    controller.run("build").unwrap();
    assert_eq!(
        *controller.dispatcher().dispatched.borrow(),
        vec!["make debug".to_string()]
    );
}

#[test]
fn test_unresolved_tokens_are_not_dispatched() {
    let data_dir = TempDir::new().unwrap();
    let controller = create_controller(&data_dir, "1;make all\n");
    controller.add("build").unwrap();

    let err = controller.run("3").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Resolve(ResolveError::IndexOutOfRange { index: 3, len: 1 })
    ));
    assert_eq!(
        format!("{}", err),
        "Attempted to call index 3 but there are only 1 saved commands"
    );

    assert!(controller.run("nope").is_err());
    assert!(controller.dispatcher().dispatched.borrow().is_empty());
}

#[test]
fn test_corrupted_store_is_preserved() {
    let data_dir = TempDir::new().unwrap();
    let controller = create_controller(&data_dir, "1;make all\n");
    fs::write(controller.store().path(), "[{\"alias\":").unwrap();

    assert!(controller.list().is_err());
    assert!(controller.add("build").is_err());
    assert!(controller.run("0").is_err());

    assert_eq!(
        fs::read_to_string(controller.store().path()).unwrap(),
        "[{\"alias\":"
    );
}
