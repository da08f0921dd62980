//! Storage backends for the task list.
//!
//! Two implementations of the [`Storage`] trait:
//! - [`MemoryStorage`]: an ordered in-process collection, gone when the
//!   process exits.
//! - [`FileStorage`]: a JSON array persisted to a local file, re-read on
//!   every operation and rewritten via temp file + rename.
//!
//! The service only ever sees the trait, so another backend slots in
//! without touching it.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::task::{Task, TaskId};

/// Default database file for the `file` backend, relative to the working
/// directory.
pub const DEFAULT_DB_FILE: &str = "db.json";

/// Capability set the task service requires from a backend.
///
/// Tasks keep insertion order; ids are unique within one instance and
/// assigned as `max(existing id) + 1`, so deleting a task never renumbers
/// the rest.
pub trait Storage {
    /// Full snapshot of the stored set.
    fn load(&self) -> Result<Vec<Task>>;

    /// Create a task from `description` and return it.
    fn add(&mut self, description: &str) -> Result<Task>;

    /// Remove the task with `id` permanently.
    fn delete(&mut self, id: TaskId) -> Result<()>;

    /// Mark the task with `id` as done. Already-done tasks stay done.
    fn complete(&mut self, id: TaskId) -> Result<()>;

    /// Tasks in insertion order.
    fn list(&self) -> Result<Vec<Task>>;
}

/// Storage backend selector, as named on the command line and in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// In-process, non-persisted.
    Slice,
    /// JSON file in the working directory.
    File,
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "slice" => Ok(Backend::Slice),
            "file" => Ok(Backend::File),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}

/// Construct the backend selected by `backend`. `db_path` is only used by
/// the `file` variant.
pub fn open(backend: Backend, db_path: PathBuf) -> Box<dyn Storage> {
    match backend {
        Backend::Slice => Box::new(MemoryStorage::new()),
        Backend::File => Box::new(FileStorage::new(db_path)),
    }
}

fn next_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(())
}

/// Ephemeral backend: the task set lives in a `Vec` for the process
/// lifetime. No I/O failure modes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tasks: Vec<Task>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set, for callers that already hold tasks.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn add(&mut self, description: &str) -> Result<Task> {
        validate_description(description)?;
        let task = Task::new(next_id(&self.tasks), description);
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn delete(&mut self, id: TaskId) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    fn complete(&mut self, id: TaskId) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.done = true;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }
}

/// Persistent backend: the whole task set is read from and rewritten to a
/// single JSON file on every operation.
///
/// A missing file is an empty set. A file that exists but cannot be read or
/// parsed is an error; treating it as empty would let the next mutation
/// overwrite it.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Rewrite the whole database using temp file + rename, so a crash
    /// mid-write leaves the previous contents in place.
    fn write(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), count = tasks.len(), "database written");
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Vec<Task>> {
        self.read()
    }

    fn add(&mut self, description: &str) -> Result<Task> {
        validate_description(description)?;
        let mut tasks = self.read()?;
        let task = Task::new(next_id(&tasks), description);
        tasks.push(task.clone());
        self.write(&tasks)?;
        Ok(task)
    }

    fn delete(&mut self, id: TaskId) -> Result<()> {
        let mut tasks = self.read()?;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        tasks.remove(index);
        self.write(&tasks)
    }

    fn complete(&mut self, id: TaskId) -> Result<()> {
        let mut tasks = self.read()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.done = true;
        self.write(&tasks)
    }

    fn list(&self) -> Result<Vec<Task>> {
        self.read()
    }
}
