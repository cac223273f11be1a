pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod toggle;
pub mod watch;

use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task's fields", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Toggle a task between active and completed", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show tasks grouped by urgency")]
    List,
    #[command(about = "Re-render the task view on a fixed interval")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::List => list::cmd().await,
            Commands::Watch => watch::cmd().await,
        }
    }
}

/// Resolves a task by unique id prefix.
///
/// A referenced task may have been deleted by an earlier command, so a
/// missing id is a notice and a no-op rather than a hard failure. An
/// ambiguous prefix is treated the same way.
pub fn find_task(tasks: &[Task], id: &str) -> Option<usize> {
    let matches: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.id.starts_with(id))
        .map(|(index, _)| index)
        .collect();
    match matches.as_slice() {
        [index] => Some(*index),
        [] => {
            msg_warning!(Message::TaskNotFound(id.to_string()));
            None
        }
        many => {
            msg_warning!(Message::AmbiguousTaskId(id.to_string(), many.len()));
            None
        }
    }
}
