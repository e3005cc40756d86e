#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Date every test runs at: project 3 (due 2024-05-20, in progress) is overdue.
pub const TODAY: &str = "2024-05-25";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 25).expect("valid test date")
}

pub fn pm_bin() -> Command {
    cargo_bin_cmd!("pmdash")
}

/// Binary pinned to `TODAY` with a private (missing) config file, so the
/// user's home directory is never read.
pub fn pm(name: &str) -> Command {
    let cfg = temp_config(name);
    let mut cmd = pm_bin();
    cmd.args(["--config", &cfg, "--today", TODAY]);
    cmd
}

/// Unique config path inside the system temp dir; any existing file is removed.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pmdash.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pmdash_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
