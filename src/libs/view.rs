//! Console table rendering of the bucketed task view.

use crate::libs::formatter::format_time_spent;
use crate::libs::lifecycle::elapsed;
use crate::libs::messages::Message;
use crate::libs::schedule::{bucketed, describe_deadline};
use crate::libs::task::Task;
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

/// Length of the id prefix shown in tables; long enough to be unique in
/// any personal-scale task list.
const ID_DISPLAY_LEN: usize = 8;

pub struct View {}

impl View {
    /// Renders every non-empty bucket as a heading plus a table. Time spent
    /// is computed live against `now`, so active tasks show a running total.
    pub fn buckets(tasks: &[Task], today: NaiveDate, now: i64) -> Result<()> {
        if tasks.is_empty() {
            msg_print!(Message::NoTasks);
            return Ok(());
        }

        for (bucket, group) in bucketed(tasks, today) {
            if group.is_empty() {
                continue;
            }
            println!("\n{} ({})", bucket.label(), group.len());

            let mut table = Table::new();
            table.add_row(row!["ID", "TITLE", "PRIORITY", "DUE", "DEADLINE", "TIME"]);
            for task in group {
                let deadline = describe_deadline(task, today);
                table.add_row(row![
                    short_id(&task.id),
                    task.title,
                    task.priority,
                    task.due_date,
                    deadline.text,
                    format_time_spent(elapsed(task, now))
                ]);
            }
            table.printstd();
        }

        Ok(())
    }
}

/// Truncates on character boundaries: ids the app generates are ASCII
/// UUIDs, but the store accepts any well-formed JSON and a foreign id must
/// not crash rendering.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(ID_DISPLAY_LEN).map_or(id, |(index, _)| &id[..index])
}
