//! Layout output models.
//!
//! These are the solution types the engine hands to a renderer: lane
//! assignments, horizontal spans, and the final per-item boxes with
//! their container height. Everything is ephemeral and recomputed on
//! every layout pass; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// An item's vertical slot within one rendering context.
///
/// Lane indices are zero-based and contiguous; no two overlapping items
/// share a lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackAssignment {
    /// The assigned item.
    pub item_id: String,
    /// Zero-based lane index.
    pub lane_index: usize,
}

/// Horizontal geometry of an item on the weighted column grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpan {
    /// Left edge as a percentage of the window width.
    pub left_percent: f64,
    /// Width as a percentage of the window width (floored so same-day
    /// items never collapse to zero).
    pub width_percent: f64,
}

/// Final geometry for one item, consumed directly by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBox {
    /// The item this box renders.
    pub item_id: String,
    /// Lane the item was stacked into.
    pub lane_index: usize,
    /// Left edge (percent of window width).
    pub left_percent: f64,
    /// Width (percent of window width).
    pub width_percent: f64,
    /// Top offset in pixels within the container.
    pub top_px: f64,
    /// Box height in pixels.
    pub height_px: f64,
    /// The item starts before the visible window.
    pub extends_before_window: bool,
    /// The item ends after the visible window.
    pub extends_after_window: bool,
    /// The item is open-ended (`start == end` sentinel).
    pub is_ongoing: bool,
}

/// Complete layout for one rendering context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupLayout {
    /// Total container height in pixels.
    pub container_height_px: f64,
    /// One box per visible item.
    pub boxes: Vec<RenderBox>,
}

impl GroupLayout {
    /// Finds the box for a given item.
    pub fn box_for_item(&self, item_id: &str) -> Option<&RenderBox> {
        self.boxes.iter().find(|b| b.item_id == item_id)
    }

    /// Number of lanes used (max lane index + 1).
    pub fn lane_count(&self) -> usize {
        self.boxes
            .iter()
            .map(|b| b.lane_index + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of boxes.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}
