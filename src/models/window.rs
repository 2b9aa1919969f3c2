//! Visible window model.
//!
//! The window is the contiguous run of calendar days currently rendered.
//! Windows are produced by `layout::grid` so that each one contains a
//! fixed count of weekday columns; weekend days inside the run are kept
//! (compressed by weight) rather than dropped.
//!
//! # Date Model
//! All dates are plain calendar dates (`chrono::NaiveDate`) with no
//! time-of-day component, so bucketing can never drift with wall-clock
//! time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date interval [start, end].
///
/// Invariant `start <= end`. The constructor does not check it; the
/// engine rejects violating windows via `validation::validate_input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First visible day (inclusive).
    pub start: NaiveDate,
    /// Last visible day (inclusive).
    pub end: NaiveDate,
}

impl TimeWindow {
    /// Creates a new window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether a date falls inside this window.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
