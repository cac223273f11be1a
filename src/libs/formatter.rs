//! Duration formatting for display.
//!
//! Accumulated time is shown in "HH:MM" form everywhere: zero-padded hours
//! and minutes, seconds dropped, negative durations rendered as "00:00".

use chrono::Duration;

pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a raw millisecond total, as stored on a task.
pub fn format_time_spent(ms: i64) -> String {
    format_duration(&Duration::milliseconds(ms))
}
