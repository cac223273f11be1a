use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskNotFound(id) => format!("No task matches '{}'", id),
            Message::AmbiguousTaskId(id, count) => format!("'{}' matches {} tasks, use a longer id prefix", id, count),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::NoTasks => "No tasks yet. Add one with 'duely add'".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted(secs) => format!("Watching tasks, refreshing every {}s (Ctrl-C to stop)", secs),
        };
        write!(f, "{}", text)
    }
}
