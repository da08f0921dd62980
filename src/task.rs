//! The task record.
//!
//! A task is a plain record: numeric id, free-text description, done flag.
//! The serialized field names (`id`, `task`, `done`) are fixed so that a
//! database file written by earlier versions of the tool keeps loading.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a task when it is created.
pub type TaskId = u32;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Wire name is `task`, matching the persisted format.
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create an open task. The description is stored as given; callers
    /// validate non-emptiness before construction.
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_open() {
        let task = Task::new(1, "Buy milk");
        assert_eq!(task.id, 1);
        assert_eq!(task.description, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let task = Task::new(7, "Water plants");
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["task"], "Water plants");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn deserializes_legacy_records() {
        let json = r#"{"id": 3, "task": "Ship release", "done": true}"#;
        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(task.id, 3);
        assert_eq!(task.description, "Ship release");
        assert!(task.done);
    }

    #[test]
    fn missing_done_defaults_to_open() {
        let json = r#"{"id": 1, "task": "Old record"}"#;
        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert!(!task.done);
    }
}
