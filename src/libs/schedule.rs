//! Deadline categorization and ordering.
//!
//! Nothing here is ever stored: buckets, descriptors and sort positions are
//! recomputed from scratch against the current calendar day on every query,
//! so a task silently advances through `upcoming -> soon -> today -> overdue`
//! as real time passes, with no field mutation. Callers re-invoke these
//! functions on each render.

use crate::libs::task::Task;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Urgency bucket a task falls into for display grouping, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Overdue,
    Today,
    Soon,
    Upcoming,
    Completed,
}

impl Bucket {
    /// All buckets in the order they are rendered.
    pub const ALL: [Bucket; 5] = [Bucket::Overdue, Bucket::Today, Bucket::Soon, Bucket::Upcoming, Bucket::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Overdue => "Overdue",
            Bucket::Today => "Today",
            Bucket::Soon => "Soon",
            Bucket::Upcoming => "Upcoming",
            Bucket::Completed => "Completed",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Urgency tag attached to a deadline descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Safe,
    Warning,
    Overdue,
    Done,
}

/// Human-readable countdown label plus its urgency tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub text: String,
    pub urgency: Urgency,
}

/// Assigns a task to its urgency bucket as of `today` (start of the current
/// local calendar day).
///
/// Completed tasks always land in `Completed` regardless of due date. A
/// missing or unparseable due date fails open into `Upcoming` rather than
/// blocking on bad data. Otherwise the bucket follows the calendar-day
/// distance: past is `Overdue`, zero is `Today`, one through seven is
/// `Soon`, eight or more is `Upcoming`.
pub fn categorize(task: &Task, today: NaiveDate) -> Bucket {
    if task.completed {
        return Bucket::Completed;
    }
    let due = match task.due() {
        Some(due) => due,
        None => return Bucket::Upcoming,
    };
    match (due - today).num_days() {
        delta if delta < 0 => Bucket::Overdue,
        0 => Bucket::Today,
        1..=7 => Bucket::Soon,
        _ => Bucket::Upcoming,
    }
}

/// Builds the fine-grained countdown descriptor for a task, independent of
/// its bucket.
pub fn describe_deadline(task: &Task, today: NaiveDate) -> Deadline {
    if task.completed {
        return Deadline {
            text: "Completed".to_string(),
            urgency: Urgency::Done,
        };
    }
    let due = match task.due() {
        Some(due) => due,
        None => {
            return Deadline {
                text: "Due date invalid".to_string(),
                urgency: Urgency::Safe,
            }
        }
    };
    let delta = (due - today).num_days();
    if delta < 0 {
        let late = -delta;
        return Deadline {
            text: format!("Overdue by {} {}", late, days_word(late)),
            urgency: Urgency::Overdue,
        };
    }
    match delta {
        0 => Deadline {
            text: "Due today".to_string(),
            urgency: Urgency::Warning,
        },
        1 => Deadline {
            text: "Due tomorrow".to_string(),
            urgency: Urgency::Warning,
        },
        2..=3 => Deadline {
            text: format!("Due in {} days", delta),
            urgency: Urgency::Warning,
        },
        _ => Deadline {
            text: format!("Due in {} days", delta),
            urgency: Urgency::Safe,
        },
    }
}

fn days_word(n: i64) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

/// Total order within a bucket: higher priority first, then earlier due
/// date (a valid due date sorts before none), then earlier creation.
///
/// The final `createdAt` comparison makes this a strict weak ordering, so
/// any stable sort produces deterministic results.
pub fn compare(a: &Task, b: &Task) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| match (a.due(), b.due()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Groups a task slice into display buckets, each sorted with [`compare`].
/// Read-only; insertion order of the underlying collection is irrelevant.
pub fn bucketed(tasks: &[Task], today: NaiveDate) -> Vec<(Bucket, Vec<&Task>)> {
    Bucket::ALL
        .iter()
        .map(|&bucket| {
            let mut group: Vec<&Task> = tasks.iter().filter(|task| categorize(task, today) == bucket).collect();
            group.sort_by(|a, b| compare(a, b));
            (bucket, group)
        })
        .collect()
}
