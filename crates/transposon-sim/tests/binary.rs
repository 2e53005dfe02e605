//! The `transposon-sim` binary, run as a subprocess.

use std::process::Command;

fn sim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_transposon-sim"))
}

#[test]
fn invalid_config_reported_with_logging_off() {
    let out = sim()
        .args(["--steps", "0"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
}

#[test]
fn usage_error_exits_two() {
    let out = sim()
        .arg("--frobnicate")
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown option"));
}

#[test]
fn small_run_prints_report_and_render() {
    let out = sim()
        .args(["-n", "12", "-s", "20", "--seed", "5", "--render"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("steps:          20"), "stdout: {stdout}");
    let last = stdout.lines().last().unwrap_or_default();
    assert!(last.chars().all(|c| matches!(c, '-' | 'A' | 'x')));
    assert!(last.len() >= 12);
}
