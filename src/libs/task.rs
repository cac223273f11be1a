//! Task data model and schema normalization.
//!
//! The `Task` record is the sole persistent entity. It is serialized with
//! camelCase field names (`dueDate`, `createdAt`, `activatedAt`,
//! `completedAt`, `timeSpentMs`) so stored files round-trip verbatim.
//! The due date is kept as the raw string the user entered; parsing is
//! strict and happens on demand, so an unparseable date on an old record
//! never blocks loading.

use crate::libs::lifecycle::{Status, TaskError};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Due dates are calendar dates without a time component.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority. Declaration order gives `Low < Medium < High`, which the
/// scheduling comparator relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    pub title: String,
    /// Raw due date string as entered; parse with [`Task::due`].
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    pub completed: bool,
    /// Creation instant, epoch milliseconds.
    pub created_at: i64,
    /// Start of the current open work session; set iff the task is active.
    #[serde(default)]
    pub activated_at: Option<i64>,
    /// Most recent completion instant; set iff the task is completed.
    #[serde(default)]
    pub completed_at: Option<i64>,
    /// Accumulated duration across all closed work sessions.
    #[serde(default)]
    pub time_spent_ms: i64,
}

impl Task {
    pub fn status(&self) -> Status {
        Status::from_completed(self.completed)
    }

    /// Strictly parsed due date, or `None` when missing or malformed.
    pub fn due(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }

    /// Repairs records migrated from older schema versions so every engine
    /// operation sees a fully populated task.
    ///
    /// - Negative (or absent, via serde defaults) `timeSpentMs` resets to 0.
    /// - An active task without a session start gets one at `now`.
    /// - A completed task never carries a session start; status is the
    ///   source of truth and the metrics fields are cleared to match.
    pub fn normalize(&mut self, now: i64) {
        if self.time_spent_ms < 0 {
            self.time_spent_ms = 0;
        }
        if self.completed {
            self.activated_at = None;
        } else {
            self.completed_at = None;
            if self.activated_at.is_none() {
                self.activated_at = Some(now);
            }
        }
    }
}

/// Parses a due date string with strict calendar validation.
///
/// Day-of-month overflow (e.g. `2025-02-31`), non-numeric components and
/// wrong field counts are all rejected. No normalization is performed, so a
/// stored string that parses always denotes exactly the date it spells.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT).ok()
}

/// Validated payload for create and edit operations.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub title: String,
    pub due_date: String,
    pub priority: Priority,
    pub completed: bool,
}

impl TaskInput {
    /// Validates user input before any mutation occurs.
    pub fn validated(title: &str, due_date: &str, priority: Priority, completed: bool) -> Result<Self, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::MissingRequiredField("title"));
        }
        let due_date = due_date.trim();
        if due_date.is_empty() {
            return Err(TaskError::MissingRequiredField("due date"));
        }
        if parse_due_date(due_date).is_none() {
            return Err(TaskError::MalformedDueDate(due_date.to_string()));
        }
        Ok(TaskInput {
            title: title.to_string(),
            due_date: due_date.to_string(),
            priority,
            completed,
        })
    }
}
