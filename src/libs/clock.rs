//! Wall-clock access behind a trait so engine behavior stays deterministic
//! under test. The engines themselves never read the clock; commands read it
//! once per operation and pass instants in.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Current instant in epoch milliseconds.
    fn now_ms(&self) -> i64;

    /// Start of the current local calendar day.
    fn today(&self) -> NaiveDate;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
