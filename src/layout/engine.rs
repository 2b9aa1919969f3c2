//! Layout orchestration.
//!
//! Composes the grid, stacker, height, and position calculators into
//! final geometry for one rendering context: a lane-group of items on
//! one visible window.
//!
//! # Pipeline
//! 1. Validate the input contract.
//! 2. Filter items to those visible in the window.
//! 3. Assign lanes (owner-affinity stacking).
//! 4. Compute lane heights, offsets, and the container height.
//! 5. Compute each item's horizontal span on the window's column grid.
//!
//! The engine is a pure function of its inputs: no side effects, no
//! state across calls, identical inputs always produce identical
//! output.
//!
//! # Example
//!
//! ```
//! use u_timeline::layout::LayoutEngine;
//! use u_timeline::models::{ScheduledItem, TimeWindow};
//! use u_timeline::visibility::AllChildren;
//! use chrono::NaiveDate;
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let window = TimeWindow::new(monday, friday);
//! let items = vec![ScheduledItem::new("P1", monday, friday)];
//!
//! let engine = LayoutEngine::new();
//! let layout = engine.layout(&items, &window, &AllChildren).unwrap();
//! assert_eq!(layout.box_count(), 1);
//! ```

use log::debug;

use crate::models::{Column, GroupLayout, LayoutConfig, RenderBox, ScheduledItem, TimeWindow};
use crate::validation::{self, ContractViolation};
use crate::visibility::ChildVisibility;

use super::{grid, height, position, stacking};

/// Pure layout engine for one rendering context.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out one lane-group on one window.
    ///
    /// Empty input (or nothing visible) yields the configured minimum
    /// container height and no boxes. Contract violations (inverted
    /// intervals or windows, duplicate ids, broken config ordering) are
    /// returned instead of being repaired.
    pub fn layout(
        &self,
        items: &[ScheduledItem],
        window: &TimeWindow,
        visibility: &dyn ChildVisibility,
    ) -> Result<GroupLayout, Vec<ContractViolation>> {
        validation::validate_input(items, window, &self.config)?;

        let columns = grid::generate_window(window.start, &self.config);
        let (container_height_px, boxes) =
            self.layout_group(items, window, &columns, visibility, 0.0);

        debug!(
            "layout: {} of {} items visible, {} lanes, container {container_height_px}px",
            boxes.len(),
            items.len(),
            boxes.iter().map(|b| b.lane_index + 1).max().unwrap_or(0),
        );

        Ok(GroupLayout {
            container_height_px,
            boxes,
        })
    }

    /// Lays out several independently-stacked groups in one container.
    ///
    /// Each group stacks on its own; non-empty groups are appended
    /// top-to-bottom with `group_gap` between them (e.g., assigned
    /// items above, the unassigned bucket below). Groups with nothing
    /// visible contribute neither height nor a gap; if every group is
    /// empty the result equals the empty single-group layout.
    pub fn layout_groups(
        &self,
        groups: &[&[ScheduledItem]],
        window: &TimeWindow,
        visibility: &dyn ChildVisibility,
    ) -> Result<GroupLayout, Vec<ContractViolation>> {
        let combined: Vec<ScheduledItem> = groups.iter().flat_map(|g| g.iter().cloned()).collect();
        validation::validate_input(&combined, window, &self.config)?;

        let columns = grid::generate_window(window.start, &self.config);
        let mut boxes = Vec::new();
        let mut total_height = 0.0;
        let mut laid_out = 0usize;

        for group in groups {
            if !group.iter().any(|item| stacking::is_visible(item, window)) {
                continue;
            }
            if laid_out > 0 {
                total_height += self.config.group_gap;
            }
            let (group_height, group_boxes) =
                self.layout_group(group, window, &columns, visibility, total_height);
            boxes.extend(group_boxes);
            total_height += group_height;
            laid_out += 1;
        }

        if laid_out == 0 {
            total_height = self.config.min_container_height;
        }

        debug!(
            "layout_groups: {laid_out} of {} groups visible, total {total_height}px",
            groups.len(),
        );

        Ok(GroupLayout {
            container_height_px: total_height,
            boxes,
        })
    }

    /// Stacks and sizes one group, offsetting its boxes by `y_offset`.
    fn layout_group(
        &self,
        items: &[ScheduledItem],
        window: &TimeWindow,
        columns: &[Column],
        visibility: &dyn ChildVisibility,
        y_offset: f64,
    ) -> (f64, Vec<RenderBox>) {
        let visible = stacking::visible(items, window);
        let assignments = stacking::assign_lanes(&visible);
        let lane_heights = height::lane_heights(&visible, &assignments, &self.config, visibility);
        let offsets = height::lane_offsets(&lane_heights, &self.config);
        let container = height::container_height(&lane_heights, &self.config);

        let boxes = assignments
            .iter()
            .filter_map(|assignment| {
                let item = visible.iter().find(|i| i.id == assignment.item_id)?;
                let span = position::span_on(columns, item.start, item.end, &self.config);
                Some(RenderBox {
                    item_id: assignment.item_id.clone(),
                    lane_index: assignment.lane_index,
                    left_percent: span.left_percent,
                    width_percent: span.width_percent,
                    top_px: y_offset + offsets[assignment.lane_index],
                    height_px: height::item_height(item, &self.config, visibility),
                    extends_before_window: item.start < window.start,
                    extends_after_window: item.end > window.end,
                    is_ongoing: item.is_ongoing(),
                })
            })
            .collect();

        (container, boxes)
    }
}
