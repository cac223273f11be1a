/// All user-facing application messages.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigDeleted,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskNotFound(String),
    AmbiguousTaskId(String, usize),
    NoChangesDetected,
    NoTasks,

    // === PROMPT MESSAGES ===
    PromptTaskTitle,
    PromptDueDate,
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === WATCH MESSAGES ===
    WatchStarted(u64),
}
