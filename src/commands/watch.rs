//! Periodic refresh loop.
//!
//! Re-renders the bucketed view on a fixed interval so time-dependent
//! labels stay fresh, including across midnight. The loop never mutates
//! task data; every tick reloads and recomputes derived views only.

use crate::db::tasks::TaskStore;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use std::time::Duration;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let refresh_secs = config.refresh_secs.max(1);
    msg_print!(Message::WatchStarted(refresh_secs));

    let clock = SystemClock;
    let store = TaskStore::new()?;
    let mut ticker = tokio::time::interval(Duration::from_secs(refresh_secs));

    loop {
        ticker.tick().await;
        let now = clock.now_ms();
        let tasks = store.load_normalized(now);
        println!("\n=== {} ===", Local::now().format("%Y-%m-%d %H:%M"));
        View::buckets(&tasks, clock.today(), now)?;
    }
}
