//! Weighted calendar column model.
//!
//! Each rendered day is a column. Weekend columns stay visible but are
//! compressed to a fixed fraction of a weekday's width, so a window's
//! horizontal space is distributed by weight rather than by day count.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A single calendar column in the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// The calendar day this column renders.
    pub date: NaiveDate,
    /// Weekday/weekend classification.
    pub kind: ColumnKind,
    /// Fractional share of horizontal space, relative to other columns.
    pub weight: f64,
}

/// Column classification by calendar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
}

impl ColumnKind {
    /// Classifies a date.
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => ColumnKind::Weekend,
            _ => ColumnKind::Weekday,
        }
    }
}

impl Column {
    /// Creates the column for a date, picking the weight by its kind.
    pub fn for_date(date: NaiveDate, weekday_weight: f64, weekend_weight: f64) -> Self {
        let kind = ColumnKind::of(date);
        let weight = match kind {
            ColumnKind::Weekday => weekday_weight,
            ColumnKind::Weekend => weekend_weight,
        };
        Self { date, kind, weight }
    }

    /// Whether this is a weekend column.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        self.kind == ColumnKind::Weekend
    }
}
