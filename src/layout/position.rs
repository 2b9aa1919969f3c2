//! Horizontal position calculation.
//!
//! Maps a date interval to a left/width percentage on the weighted
//! column grid. Column weights (not day counts) distribute the space,
//! so compressed weekend columns take their fractional share and the
//! weighted widths of any window sum to exactly 100%.
//!
//! Items extending past the window are not clipped here; the engine
//! derives the extends-before/after flags from raw date comparisons.

use chrono::NaiveDate;

use crate::layout::grid;
use crate::models::{Column, ColumnSpan, LayoutConfig};

/// Computes an item's span on a pre-generated column grid.
///
/// # Algorithm
/// 1. `start_index` = first column whose date ≥ `item_start`, clamped
///    to the last column when the item starts past the window.
/// 2. `end_index` = last column whose date ≤ `item_end`, clamped to the
///    first column when the item ends before the window; never less
///    than `start_index`.
/// 3. Left/width = weight sums normalized against the total weight,
///    with a configured width floor for same-day items.
pub fn span_on(
    columns: &[Column],
    item_start: NaiveDate,
    item_end: NaiveDate,
    config: &LayoutConfig,
) -> ColumnSpan {
    if columns.is_empty() {
        return ColumnSpan {
            left_percent: 0.0,
            width_percent: config.min_width_percent,
        };
    }

    let start_index = columns
        .iter()
        .position(|c| c.date >= item_start)
        .unwrap_or(columns.len() - 1);
    let end_index = columns
        .iter()
        .rposition(|c| c.date <= item_end)
        .unwrap_or(0)
        .max(start_index);

    let total_weight: f64 = columns.iter().map(|c| c.weight).sum();
    let left_weight: f64 = columns[..start_index].iter().map(|c| c.weight).sum();
    let span_weight: f64 = columns[start_index..=end_index]
        .iter()
        .map(|c| c.weight)
        .sum();

    ColumnSpan {
        left_percent: left_weight / total_weight * 100.0,
        width_percent: (span_weight / total_weight * 100.0).max(config.min_width_percent),
    }
}

/// Computes an item's span on the window anchored at `window_start`.
///
/// Regenerates the column grid itself; the engine uses `span_on` with a
/// grid generated once per pass instead.
pub fn calculate_position(
    item_start: NaiveDate,
    item_end: NaiveDate,
    window_start: NaiveDate,
    config: &LayoutConfig,
) -> ColumnSpan {
    let columns = grid::generate_window(window_start, config);
    span_on(&columns, item_start, item_end, config)
}
