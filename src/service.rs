//! Task service: the single entry point command execution goes through.
//!
//! Owns one storage backend and one display, and wires the four user-facing
//! operations together. Every successful mutation refreshes the display with
//! the updated full list.

use tracing::debug;

use crate::display::TaskDisplay;
use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::{Task, TaskId};

/// Stateless orchestrator over a storage backend and a display.
///
/// Both collaborators are trait objects, so a different backend or renderer
/// plugs in without changing the service.
pub struct TaskService {
    storage: Box<dyn Storage>,
    display: Box<dyn TaskDisplay>,
}

impl TaskService {
    pub fn new(storage: Box<dyn Storage>, display: Box<dyn TaskDisplay>) -> Self {
        Self { storage, display }
    }

    /// Create a task from `description` and show the updated list.
    ///
    /// Whitespace-only descriptions are rejected before the backend is
    /// touched.
    pub fn add_task(&mut self, description: &str) -> Result<Task> {
        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }
        let task = self.storage.add(description)?;
        debug!(id = task.id, "task added");
        self.refresh()?;
        Ok(task)
    }

    /// Remove the task with `id` and show the updated list.
    pub fn delete_task(&mut self, id: TaskId) -> Result<()> {
        self.storage.delete(id)?;
        debug!(id, "task deleted");
        self.refresh()
    }

    /// Mark the task with `id` as done and show the updated list. Completing
    /// an already-done task is a no-op, not an error.
    pub fn complete_task(&mut self, id: TaskId) -> Result<()> {
        self.storage.complete(id)?;
        debug!(id, "task completed");
        self.refresh()
    }

    /// Show the current list. Reads only.
    pub fn list_tasks(&self) -> Result<()> {
        self.refresh()
    }

    fn refresh(&self) -> Result<()> {
        let tasks = self.storage.list()?;
        self.display.show(&tasks);
        Ok(())
    }
}
