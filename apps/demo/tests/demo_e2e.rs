//! End-to-end checks against the compiled demo binary

use std::process::Command;

const EXPECTED: &str = "Windows button rendered.\nUbuntu button rendered.\n";

#[test]
fn test_prints_both_buttons_in_order() {
    let output = Command::new(env!("CARGO_BIN_EXE_dialog-demo"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dialog-demo");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_verbose_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_dialog-demo"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("failed to run dialog-demo");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Initializing Windows dialog"));
    assert!(stderr.contains("Initializing Ubuntu dialog"));
}
