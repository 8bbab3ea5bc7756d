#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rclics::db::pool::DbPool;
use rclics::models::days::{WeekDays, Weekday};
use rclics::models::entry::EntryForm;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcl() -> Command {
    cargo_bin_cmd!("rclics")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclics.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh test DB through the CLI
pub fn init_db(db_path: &str) {
    rcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI and return its id
pub fn add_entry(db_path: &str, owner: &str, week: &str, extra: &[&str]) -> String {
    let mut args = vec!["--db", db_path, "--owner", owner, "add", "--week", week];
    args.extend_from_slice(extra);

    let output = rcl().args(&args).output().expect("failed to run add");
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_id(&stdout).expect("no id in add output")
}

pub fn extract_id(s: &str) -> Option<String> {
    let re = regex::Regex::new(
        r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
    )
    .unwrap();
    re.find(s).map(|m| m.as_str().to_string())
}

pub fn mem_pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

pub fn form(ian: &str, activity: &str, object: &str, days: &[Weekday]) -> EntryForm {
    EntryForm {
        ian: ian.into(),
        activity: activity.into(),
        object: object.into(),
        days: WeekDays::from_days(days),
    }
}
