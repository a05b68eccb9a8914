//! Tests that run the compiled `mycmds` binary.

use super::run_binary;
use std::fs;
use tempfile::TempDir;

fn seed_store(data_dir: &TempDir, json: &str) {
    let store_dir = data_dir.path().join("mycmds");
    fs::create_dir_all(&store_dir).unwrap();
    fs::write(store_dir.join("cmds.json"), json).unwrap();
}

#[test]
fn test_list_empty() {
    let data_dir = TempDir::new().unwrap();

    let output = run_binary(data_dir.path(), &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No commands saved"));
    assert!(data_dir.path().join("mycmds").is_dir());
}

#[test]
fn test_list_table() {
    let data_dir = TempDir::new().unwrap();
    seed_store(&data_dir, r#"[{"alias":"build","command":"make all"}]"#);

    let output = run_binary(data_dir.path(), &[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Index  Alias  Command"));
    assert!(stdout.contains("0      build  make all"));
}

#[test]
fn test_clear() {
    let data_dir = TempDir::new().unwrap();
    seed_store(&data_dir, r#"[{"alias":"build","command":"make all"}]"#);

    let output = run_binary(data_dir.path(), &["clear"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(data_dir.path().join("mycmds").join("cmds.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_corrupted_store_reports_error() {
    let data_dir = TempDir::new().unwrap();
    seed_store(&data_dir, "not json");

    let output = run_binary(data_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid JSON"));
}

#[test]
fn test_unknown_alias_fails_without_running() {
    let data_dir = TempDir::new().unwrap();
    seed_store(&data_dir, r#"[{"alias":"build","command":"make all"}]"#);

    let output = run_binary(data_dir.path(), &["deploy"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'deploy'"));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn test_run_echoes_and_propagates_exit_code() {
    let data_dir = TempDir::new().unwrap();
    let script = data_dir.path().join("exit3.sh");
    fs::write(&script, "echo from-child\nexit 3\n").unwrap();
    seed_store(
        &data_dir,
        &format!(
            r#"[{{"alias":"fail","command":"sh {}"}}]"#,
            script.display()
        ),
    );

    for token in ["0", "fail"] {
        let output = run_binary(data_dir.path(), &[token]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(output.status.code(), Some(3));
        assert!(stdout.contains(&format!("sh {}", script.display())));
        assert!(stdout.contains("from-child"));
    }
}

#[cfg(unix)]
#[test]
fn test_help_runs_as_alias() {
    let data_dir = TempDir::new().unwrap();
    seed_store(&data_dir, r#"[{"alias":"help","command":"echo ran-help-alias"}]"#);

    let output = run_binary(data_dir.path(), &["help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("ran-help-alias"));
}

#[test]
fn test_help_flag_still_prints_usage() {
    let data_dir = TempDir::new().unwrap();

    let output = run_binary(data_dir.path(), &["--help"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_missing_program_exits_127() {
    let data_dir = TempDir::new().unwrap();
    seed_store(
        &data_dir,
        r#"[{"alias":"bad","command":"mycmds-no-such-program --x"}]"#,
    );

    let output = run_binary(data_dir.path(), &["bad"]);

    assert_eq!(output.status.code(), Some(127));
    assert!(String::from_utf8_lossy(&output.stderr).contains("mycmds-no-such-program"));
}
