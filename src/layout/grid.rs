//! Date grid generation.
//!
//! Builds the ordered set of visible calendar columns for a window
//! anchor, and shifts anchors by working days for pagination.
//!
//! # Algorithm
//! Walk forward day-by-day from the anchor, appending every calendar
//! day (weekends included) until exactly `weekdays_per_window` weekday
//! columns have been appended. The walk stops on the final weekday, so
//! a trailing weekend is never included; a leading or interior weekend
//! is kept and tagged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Column, ColumnKind, LayoutConfig, TimeWindow};

/// Pagination direction for anchor shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftDirection {
    /// Advance one working day.
    Forward,
    /// Retreat one working day.
    Backward,
}

/// Generates the visible columns for the window anchored at `anchor`.
///
/// The result contains exactly `config.weekdays_per_window` weekday
/// columns plus any weekend days encountered before the final weekday.
pub fn generate_window(anchor: NaiveDate, config: &LayoutConfig) -> Vec<Column> {
    let mut columns = Vec::new();
    if config.weekdays_per_window == 0 {
        return columns;
    }

    let mut cursor = anchor;
    let mut weekdays = 0;
    loop {
        let column = Column::for_date(cursor, config.weekday_weight, config.weekend_weight);
        if column.kind == ColumnKind::Weekday {
            weekdays += 1;
        }
        columns.push(column);
        if weekdays == config.weekdays_per_window {
            break;
        }
        // succ_opt only fails at the calendar's representable maximum
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    columns
}

/// Shifts an anchor by one working day, skipping weekends.
pub fn shift_anchor(anchor: NaiveDate, direction: ShiftDirection) -> NaiveDate {
    let mut cursor = anchor;
    loop {
        let next = match direction {
            ShiftDirection::Forward => cursor.succ_opt(),
            ShiftDirection::Backward => cursor.pred_opt(),
        };
        match next {
            Some(date) => {
                cursor = date;
                if ColumnKind::of(cursor) == ColumnKind::Weekday {
                    return cursor;
                }
            }
            None => return cursor,
        }
    }
}

/// The inclusive date bounds of a generated column set.
pub fn window_bounds(columns: &[Column]) -> Option<TimeWindow> {
    let first = columns.first()?;
    let last = columns.last()?;
    Some(TimeWindow::new(first.date, last.date))
}
