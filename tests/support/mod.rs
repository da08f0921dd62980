use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use tsk::task::Task;

/// Temporary working directory for one test; the database and config files
/// the binary touches are resolved relative to it.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("db.json")
    }

    pub fn write_db(&self, tasks: &[Task]) {
        let json = serde_json::to_string_pretty(tasks).expect("serialize tasks");
        fs::write(self.db_path(), json).expect("write db");
    }

    pub fn read_db(&self) -> Vec<Task> {
        let content = fs::read_to_string(self.db_path()).expect("read db");
        serde_json::from_str(&content).expect("parse db")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join(".tsk.toml"), contents).expect("write config");
    }
}

/// Command for the tsk binary, rooted in the test directory with a clean
/// environment.
pub fn tsk_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("tsk").expect("binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("TSK_DB");
    cmd
}
