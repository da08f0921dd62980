//! Configuration loading and management
//!
//! Handles parsing of optional `.tsk.toml` files in the working directory.
//! The file selects the default storage backend and database path; command
//! line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::DEFAULT_DB_FILE;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".tsk.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend used when `--storage` is not given: `slice` or `file`
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Database file used by the `file` backend
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_backend() -> String {
    "slice".to_string()
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            file: default_file(),
        }
    }
}

impl Config {
    /// Load configuration from a `.tsk.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults when the file
    /// is absent. A file that exists but does not parse is an error.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_expected() {
        let cfg = Config::default();
        assert_eq!(cfg.storage.backend, "slice");
        assert_eq!(cfg.storage.file, PathBuf::from("db.json"));
    }

    #[test]
    fn load_parses_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        let content = r#"
[storage]
backend = "file"
file = "tasks/db.json"
"#;
        fs::write(&path, content.trim()).expect("write config");

        let cfg = Config::load(&path).expect("load config");
        assert_eq!(cfg.storage.backend, "file");
        assert_eq!(cfg.storage.file, PathBuf::from("tasks/db.json"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[storage]\nbackend = \"file\"\n").expect("write config");

        let cfg = Config::load(&path).expect("load config");
        assert_eq!(cfg.storage.backend, "file");
        assert_eq!(cfg.storage.file, PathBuf::from("db.json"));
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from_dir(dir.path()).expect("load");
        assert_eq!(cfg.storage.backend, "slice");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "storage = [not toml").expect("write config");

        let err = Config::load_from_dir(dir.path()).expect_err("malformed config");
        match err {
            crate::error::Error::TomlParse(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
