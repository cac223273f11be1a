//! Task editing command.
//!
//! With field flags the edit is applied directly; without any, the command
//! drops into interactive prompts seeded with the current values. The
//! `--status` flag is the untyped entry point into the status machine: an
//! unrecognized token is rejected before anything changes. A completion
//! flip here goes through the same transition logic as an explicit toggle,
//! so edits are never a time-accounting loophole.

use crate::commands::find_task;
use crate::db::tasks::TaskStore;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::lifecycle::{self, Status, Transition};
use crate::libs::messages::Message;
use crate::libs::task::{Priority, TaskInput};
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id (unique prefix is enough)
    id: String,
    #[arg(long, help = "New title")]
    title: Option<String>,
    #[arg(long, help = "New due date (YYYY-MM-DD)")]
    due: Option<String>,
    #[arg(long, value_enum, help = "New priority")]
    priority: Option<Priority>,
    #[arg(long, help = "New status ('active' or 'completed')")]
    status: Option<String>,
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let clock = SystemClock;
    let now = clock.now_ms();
    let store = TaskStore::new()?;
    let mut tasks = store.load_normalized(now);

    // Reject an unrecognized target status before any mutation.
    let target = args.status.as_deref().map(str::parse::<Status>).transpose()?;

    let Some(index) = find_task(&tasks, &args.id) else {
        return Ok(());
    };
    let current = tasks[index].clone();

    let interactive = args.title.is_none() && args.due.is_none() && args.priority.is_none() && target.is_none();
    let (title, due, priority) = if interactive {
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .with_initial_text(&current.title)
            .interact_text()?;
        let due: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueDate.to_string())
            .with_initial_text(&current.due_date)
            .interact_text()?;
        let options = [Priority::Low, Priority::Medium, Priority::High];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Priority")
            .items(&options)
            .default(current.priority as usize)
            .interact()?;
        (title, due, options[selected])
    } else {
        (
            args.title.unwrap_or_else(|| current.title.clone()),
            args.due.unwrap_or_else(|| current.due_date.clone()),
            args.priority.unwrap_or(current.priority),
        )
    };
    let completed = match target {
        Some(Status::Completed) => true,
        Some(Status::Active) => false,
        None => current.completed,
    };

    let input = TaskInput::validated(&title, &due, priority, completed)?;
    let unchanged = input.title == current.title && input.due_date == current.due_date && input.priority == current.priority && input.completed == current.completed;

    let transition = lifecycle::update(&mut tasks[index], input, now);
    if unchanged && transition == Transition::NoOp {
        msg_print!(Message::NoChangesDetected);
        return Ok(());
    }

    let title = tasks[index].title.clone();
    store.save(&tasks)?;
    msg_success!(Message::TaskUpdated(title));
    Ok(())
}
