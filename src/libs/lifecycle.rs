//! Task lifecycle state machine.
//!
//! A task is either `Active` or `Completed`; both states are fully
//! reversible. The functions here own every status flip and the time
//! accounting that goes with it: completing a task closes the current work
//! session and folds its duration into `timeSpentMs`, reopening starts a
//! fresh session. They are pure with respect to I/O and take the current
//! instant as an argument, so the whole machine is deterministic under test.

use crate::libs::task::{Task, TaskInput};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors surfaced by the core engines. All are user-correctable; none
/// aborts the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("'{0}' is not a recognized task status (expected 'active' or 'completed')")]
    InvalidTransition(String),
    #[error("'{0}' is not a valid calendar date (expected YYYY-MM-DD)")]
    MalformedDueDate(String),
    #[error("a {0} is required")]
    MissingRequiredField(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Completed,
}

impl Status {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Status::Completed
        } else {
            Status::Active
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Completed,
            Status::Completed => Status::Active,
        }
    }
}

impl FromStr for Status {
    type Err = TaskError;

    /// Unrecognized target states are rejected here, before they ever reach
    /// the transition logic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "completed" => Ok(Status::Completed),
            other => Err(TaskError::InvalidTransition(other.to_string())),
        }
    }
}

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The status flipped and timestamps/metrics were updated.
    Applied,
    /// The task was already in the target state; nothing changed.
    NoOp,
}

/// Applies a target status to a task at instant `now`.
///
/// Requesting the current status is an idempotent no-op: no field changes,
/// no time added. On `Active -> Completed` the open session's duration is
/// added to `timeSpentMs`; a session start in the future contributes zero
/// rather than a negative amount, so a clock that moved backward can never
/// shrink the accumulated total. On `Completed -> Active` a new session
/// starts at `now` and the accumulated total is left untouched.
pub fn apply_status(task: &mut Task, target: Status, now: i64) -> Transition {
    if task.status() == target {
        return Transition::NoOp;
    }
    match target {
        Status::Completed => {
            task.completed = true;
            if let Some(started) = task.activated_at {
                task.time_spent_ms += (now - started).max(0);
            }
            task.completed_at = Some(now);
            task.activated_at = None;
        }
        Status::Active => {
            task.completed = false;
            task.completed_at = None;
            task.activated_at = Some(now);
        }
    }
    Transition::Applied
}

/// Creates a new task from validated input.
///
/// The caller supplies the identifier; uniqueness is the id generator's
/// contract, not the engine's. A task created already-completed gets a
/// completion stamp instead of a session start.
pub fn create(input: TaskInput, id: String, now: i64) -> Task {
    let completed = input.completed;
    Task {
        id,
        title: input.title,
        due_date: input.due_date,
        priority: input.priority,
        completed,
        created_at: now,
        activated_at: if completed { None } else { Some(now) },
        completed_at: if completed { Some(now) } else { None },
        time_spent_ms: 0,
    }
}

/// Overwrites a task's editable fields and reconciles its status.
///
/// Fields are applied first; a completion flip then routes through
/// [`apply_status`], so an edit that toggles completion accounts time
/// exactly as an explicit toggle would. When the status is unchanged and
/// the task is active but lost its session start, the start is repaired
/// at `now`.
pub fn update(task: &mut Task, input: TaskInput, now: i64) -> Transition {
    task.title = input.title;
    task.due_date = input.due_date;
    task.priority = input.priority;
    let target = Status::from_completed(input.completed);
    let transition = apply_status(task, target, now);
    if target == Status::Active && task.activated_at.is_none() {
        task.activated_at = Some(now);
    }
    transition
}

/// Total time on task as of `at`: the closed-session total plus the open
/// session so far, if any. Pure; callable at arbitrary instants for live
/// display without touching stored state.
pub fn elapsed(task: &Task, at: i64) -> i64 {
    let mut total = task.time_spent_ms.max(0);
    if !task.completed {
        if let Some(started) = task.activated_at {
            total += (at - started).max(0);
        }
    }
    total
}
