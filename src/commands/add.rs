//! Task creation command.
//!
//! Title and due date can be passed as arguments or collected via prompts.
//! Validation happens before any mutation: an empty title or due date and a
//! malformed date are rejected while the stored list is untouched.

use crate::db::tasks::TaskStore;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::lifecycle;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, TaskInput};
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use uuid::Uuid;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompted for when omitted
    title: Option<String>,
    #[arg(long, short, help = "Due date (YYYY-MM-DD)")]
    due: Option<String>,
    #[arg(long, short, value_enum, help = "Task priority")]
    priority: Option<Priority>,
    #[arg(long, help = "Create the task already completed")]
    done: bool,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let due = match args.due {
        Some(due) => due,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueDate.to_string())
            .interact_text()?,
    };
    let priority = match args.priority {
        Some(priority) => priority,
        None => {
            let options = [Priority::Low, Priority::Medium, Priority::High];
            let index = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Priority")
                .items(&options)
                .default(1)
                .interact()?;
            options[index]
        }
    };

    let input = TaskInput::validated(&title, &due, priority, args.done)?;

    let clock = SystemClock;
    let now = clock.now_ms();
    let task = lifecycle::create(input, Uuid::new_v4().to_string(), now);
    let title = task.title.clone();

    let store = TaskStore::new()?;
    let mut tasks = store.load_normalized(now);
    tasks.push(task);
    store.save(&tasks)?;

    msg_success!(Message::TaskCreated(title));
    Ok(())
}
