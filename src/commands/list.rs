//! Bucketed task view command.

use crate::db::tasks::TaskStore;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::view::View;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let clock = SystemClock;
    let now = clock.now_ms();
    let tasks = TaskStore::new()?.load_normalized(now);
    View::buckets(&tasks, clock.today(), now)
}
