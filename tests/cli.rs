use std::process::{Command, Output};
use std::time::{Duration, Instant};

fn msleep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_msleep"))
        .args(args)
        .output()
        .expect("failed to run msleep")
}

#[test]
fn test_no_arguments_prints_usage() {
    let out = msleep(&[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Usage: "), "stdout: {}", stdout);
    assert!(stdout.contains("sleeptime(ms)"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_too_many_arguments_does_not_sleep() {
    let start = Instant::now();
    let out = msleep(&["5000", "5000"]);
    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(String::from_utf8_lossy(&out.stdout).contains("sleeptime(ms)"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_invalid_argument_is_reported() {
    for bad in ["abc", "-5", ""] {
        let out = msleep(&[bad]);
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.starts_with("Error: "), "stderr for {:?}: {}", bad, stderr);
        assert_eq!(out.status.code(), Some(1));
    }
}

#[test]
fn test_zero_exits_immediately() {
    let out = msleep(&["0"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_sleeps_for_requested_time() {
    let start = Instant::now();
    let out = msleep(&["150"]);
    assert!(out.status.success());
    assert!(start.elapsed() >= Duration::from_millis(150));
}

#[test]
fn test_mypoke_absorbs_interruptions() {
    let start = Instant::now();
    let out = Command::new(env!("CARGO_BIN_EXE_mypoke"))
        .args(["300", "40"])
        .output()
        .expect("failed to run mypoke");
    let elapsed = start.elapsed();

    assert!(out.status.success());
    assert!(elapsed >= Duration::from_millis(300));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("slept "), "stdout: {}", stdout);
    assert!(!stdout.contains("across 0 interruptions"), "stdout: {}", stdout);
}

#[test]
fn test_mypoke_rejects_zero_interval() {
    let out = Command::new(env!("CARGO_BIN_EXE_mypoke"))
        .args(["100", "0"])
        .output()
        .expect("failed to run mypoke");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {}", stderr);
    assert!(out.stdout.is_empty());
    assert_eq!(out.status.code(), Some(1));
}
