#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DAY: &str = "2024-03-01";

/// Isolated home directory plus a daily log path inside it.
pub struct Sandbox {
    pub home: TempDir,
    pub log: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let home = TempDir::new().expect("create temp home");
        let log = home.path().join("water_log.txt");
        Self { home, log }
    }

    /// Binary with HOME redirected and `--file` pointing at the sandbox log.
    pub fn wb(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("waterbuddy");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("RUST_LOG")
            .args(["--file", self.log_str()]);
        cmd
    }

    /// Same as `wb` but pinned to `DAY`.
    pub fn wb_day(&self) -> Command {
        let mut cmd = self.wb();
        cmd.args(["--date", DAY]);
        cmd
    }

    pub fn log_str(&self) -> &str {
        self.log.to_str().expect("utf-8 temp path")
    }

    pub fn log_content(&self) -> String {
        fs::read_to_string(&self.log).unwrap_or_default()
    }

    pub fn write_log(&self, content: &str) {
        fs::write(&self.log, content).expect("write log");
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".waterbuddy").join("waterbuddy.conf")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }
}

pub fn path_str(p: &Path) -> String {
    p.to_string_lossy().to_string()
}
