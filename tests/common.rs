#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("timecard")
}

/// Create a unique test data dir path inside the system temp dir and remove
/// any leftovers from a previous run
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data dir (config writes suppressed via --test)
pub fn init_dir(dir: &str) {
    tc().args(["--dir", dir, "--test", "init"]).assert().success();
}

/// Record one full session for the default client: clock in, one backdated
/// task, clock out
pub fn clocked_day(dir: &str, description: &str) {
    tc().args(["--dir", dir, "--test", "in"]).assert().success();
    tc().args(["--dir", dir, "--test", "task", description, "--minutes", "30"])
        .assert()
        .success();
    tc().args(["--dir", dir, "--test", "out"]).assert().success();
}

/// Path of the default client's first log file inside a test data dir
pub fn first_log(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("logs").join("self").join("1.log")
}
