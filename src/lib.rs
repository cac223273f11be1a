//! # Duely - Due-date task tracker
//!
//! A command-line utility for tracking personal assignments with due dates,
//! priorities, completion state, and accumulated working time.
//!
//! ## Features
//!
//! - **Task Lifecycle**: Create, edit, toggle and delete tasks; completing a
//!   task closes its work session and accumulates time on task
//! - **Urgency Buckets**: Tasks are grouped into overdue / today / soon /
//!   upcoming / completed, recomputed against the current day on every view
//! - **Deadline Descriptors**: Human-readable countdown labels per task
//! - **Watch Mode**: Periodic re-render so labels stay fresh across midnight
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duely::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
