#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rdp() -> Command {
    cargo_bin_cmd!("rdeparture")
}

/// Fresh temp dir plus the settings path inside it (file not created).
pub fn setup_settings() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("rdeparture.conf");
    (dir, path)
}

pub fn write_settings(path: &Path, content: &str) {
    std::fs::write(path, content).expect("write settings");
}

/// 2025-03-14 at hh:mm:ss
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .expect("valid date")
        .and_hms_opt(h, m, s)
        .expect("valid time")
}
