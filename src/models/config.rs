//! Layout configuration.
//!
//! One struct holds every geometry constant the engine uses: column
//! weights, sizing floors, gaps, and margins. Defaults model the
//! standard dashboard look; hosts override individual values with the
//! builder setters.
//!
//! # Ordering Invariant
//! `child_row_height < min_item_height < min_container_height` must
//! hold (checked by `validation::validate_input`), so a child row can
//! never outgrow its parent's floor and a single item always fits the
//! empty-container minimum.

use serde::{Deserialize, Serialize};

/// Geometry constants for one rendering context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal weight of a weekday column.
    pub weekday_weight: f64,
    /// Horizontal weight of a weekend column (compressed but visible).
    pub weekend_weight: f64,
    /// Weekday columns per generated window.
    pub weekdays_per_window: usize,
    /// Width floor (percent) so same-day items never collapse to zero.
    pub min_width_percent: f64,
    /// Minimum readable box height with zero children (px).
    pub min_item_height: f64,
    /// Item header height (px).
    pub header_height: f64,
    /// Height of one visible child row (px).
    pub child_row_height: f64,
    /// Vertical gap between child rows (px).
    pub child_gap: f64,
    /// Dates footer height (px).
    pub footer_height: f64,
    /// Vertical padding inside an item box (px).
    pub item_padding: f64,
    /// Gap between stacked lanes (px).
    pub lane_gap: f64,
    /// Margin above the first lane (px).
    pub top_margin: f64,
    /// Margin below the last lane (px).
    pub bottom_margin: f64,
    /// Gap separating independently-stacked groups (px).
    pub group_gap: f64,
    /// Container height when no items are visible (px).
    pub min_container_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            weekday_weight: 1.0,
            weekend_weight: 0.4,
            weekdays_per_window: 5,
            min_width_percent: 0.1,
            min_item_height: 80.0,
            header_height: 24.0,
            child_row_height: 18.0,
            child_gap: 6.0,
            footer_height: 16.0,
            item_padding: 10.0,
            lane_gap: 20.0,
            top_margin: 16.0,
            bottom_margin: 16.0,
            group_gap: 24.0,
            min_container_height: 96.0,
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weekday/weekend column weights.
    pub fn with_column_weights(mut self, weekday: f64, weekend: f64) -> Self {
        self.weekday_weight = weekday;
        self.weekend_weight = weekend;
        self
    }

    /// Sets the weekday count per window.
    pub fn with_weekdays_per_window(mut self, count: usize) -> Self {
        self.weekdays_per_window = count;
        self
    }

    /// Sets the width floor in percent.
    pub fn with_min_width_percent(mut self, percent: f64) -> Self {
        self.min_width_percent = percent;
        self
    }

    /// Sets the minimum item height.
    pub fn with_min_item_height(mut self, px: f64) -> Self {
        self.min_item_height = px;
        self
    }

    /// Sets the inter-lane gap.
    pub fn with_lane_gap(mut self, px: f64) -> Self {
        self.lane_gap = px;
        self
    }

    /// Sets the top and bottom container margins.
    pub fn with_margins(mut self, top: f64, bottom: f64) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Sets the minimum container height.
    pub fn with_min_container_height(mut self, px: f64) -> Self {
        self.min_container_height = px;
        self
    }
}
