#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ct() -> Command {
    cargo_bin_cmd!("cycletrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cycletrack.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    ct().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // add two periods a month apart via the CLI
    ct().args([
        "--db",
        db_path,
        "add",
        "2025-06-01",
        "2025-06-05",
        "--flow",
        "M",
    ])
    .assert()
    .success();

    ct().args([
        "--db",
        db_path,
        "add",
        "2025-06-29",
        "2025-07-03",
        "--flow",
        "H",
    ])
    .assert()
    .success();
}
