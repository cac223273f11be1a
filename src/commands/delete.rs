//! Task deletion command. Removal is outright; no history is retained.

use crate::commands::find_task;
use crate::db::tasks::TaskStore;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id (unique prefix is enough)
    id: String,
    #[arg(long, short, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let now = SystemClock.now_ms();
    let store = TaskStore::new()?;
    let mut tasks = store.load_normalized(now);

    let Some(index) = find_task(&tasks, &args.id) else {
        return Ok(());
    };

    let title = tasks[index].title.clone();
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    tasks.remove(index);
    store.save(&tasks)?;
    msg_success!(Message::TaskDeleted(title));
    Ok(())
}
