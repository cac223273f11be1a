//! Task persistence.
//!
//! The store is a single JSON file holding the ordered task sequence,
//! written whole on every save. Order is insertion order and carries no
//! meaning; display order is always recomputed by the scheduling engine.
//! A missing or corrupt file degrades to an empty list so the application
//! never fails to start over bad stored data.

use crate::libs::data_storage::DataStorage;
use crate::libs::task::Task;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub const TASKS_FILE_NAME: &str = "tasks.json";

pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new() -> Result<TaskStore> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Ok(TaskStore { path })
    }

    /// Store backed by an explicit file path. Used by tests; the
    /// application itself always goes through [`TaskStore::new`].
    pub fn with_path(path: PathBuf) -> TaskStore {
        TaskStore { path }
    }

    /// Loads the stored task sequence. Missing file means no tasks yet;
    /// a file that fails to parse is reported and treated the same way.
    pub fn load(&self) -> Vec<Task> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("task store at {} is unreadable, starting empty: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Loads and normalizes every record, so callers only ever see fully
    /// populated tasks regardless of the schema they were written with.
    pub fn load_normalized(&self, now: i64) -> Vec<Task> {
        let mut tasks = self.load();
        for task in &mut tasks {
            task.normalize(now);
        }
        tasks
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
