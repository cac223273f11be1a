//! Completion toggle command.
//!
//! Completing an active task closes its work session and adds the elapsed
//! time to the stored total; reopening a completed task starts a new
//! session and leaves the total untouched.

use crate::commands::find_task;
use crate::db::tasks::TaskStore;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::lifecycle::{apply_status, Status};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id (unique prefix is enough)
    id: String,
}

pub async fn cmd(args: ToggleArgs) -> Result<()> {
    let now = SystemClock.now_ms();
    let store = TaskStore::new()?;
    let mut tasks = store.load_normalized(now);

    let Some(index) = find_task(&tasks, &args.id) else {
        return Ok(());
    };

    let task = &mut tasks[index];
    let target = task.status().toggled();
    apply_status(task, target, now);
    let message = match target {
        Status::Completed => Message::TaskCompleted(task.title.clone()),
        Status::Active => Message::TaskReopened(task.title.clone()),
    };

    store.save(&tasks)?;
    msg_success!(message);
    Ok(())
}
