//! Vertical sizing.
//!
//! Derives per-item and per-container pixel heights from stack
//! composition and nested content. An item grows with its count of
//! *visible* children (the injected rule decides which count); a floor
//! keeps zero-child boxes readable. Containers sum their lanes plus
//! gaps and margins, with a configured minimum for the empty case.

use crate::models::{LayoutConfig, ScheduledItem, StackAssignment};
use crate::visibility::ChildVisibility;

use super::stacking;

/// Intrinsic pixel height of one item box.
///
/// `max(min_item_height, header + nested + footer + padding)`, where
/// nested content grows linearly with the visible child count.
pub fn item_height(
    item: &ScheduledItem,
    config: &LayoutConfig,
    visibility: &dyn ChildVisibility,
) -> f64 {
    let visible_children = item
        .children
        .iter()
        .filter(|child| visibility.is_visible(child))
        .count();

    let nested = if visible_children == 0 {
        0.0
    } else {
        visible_children as f64 * config.child_row_height
            + (visible_children - 1) as f64 * config.child_gap
    };

    let content = config.header_height + nested + config.footer_height + config.item_padding;
    content.max(config.min_item_height)
}

/// Per-lane heights in lane index order.
///
/// A lane holding several non-overlapping items takes the tallest
/// item's intrinsic height.
pub fn lane_heights(
    items: &[ScheduledItem],
    assignments: &[StackAssignment],
    config: &LayoutConfig,
    visibility: &dyn ChildVisibility,
) -> Vec<f64> {
    let mut heights = vec![0.0_f64; stacking::lane_count(assignments)];
    for assignment in assignments {
        if let Some(item) = items.iter().find(|i| i.id == assignment.item_id) {
            let h = item_height(item, config, visibility);
            if h > heights[assignment.lane_index] {
                heights[assignment.lane_index] = h;
            }
        }
    }
    heights
}

/// Top offset of each lane, in the same traversal order as
/// [`container_height`]: a cumulative running offset, O(lanes).
pub fn lane_offsets(heights: &[f64], config: &LayoutConfig) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(heights.len());
    let mut top = config.top_margin;
    for &height in heights {
        offsets.push(top);
        top += height + config.lane_gap;
    }
    offsets
}

/// Total container height for a stack of lanes.
///
/// Empty stack → the configured minimum; otherwise margins plus lane
/// heights with one gap between consecutive lanes.
pub fn container_height(heights: &[f64], config: &LayoutConfig) -> f64 {
    if heights.is_empty() {
        return config.min_container_height;
    }
    let lanes: f64 = heights.iter().sum();
    let gaps = config.lane_gap * (heights.len() - 1) as f64;
    config.top_margin + lanes + gaps + config.bottom_margin
}
