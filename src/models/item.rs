//! Scheduled item model.
//!
//! An item is a unit of work placed on the timeline: a project, a task,
//! or any dated entity the host dashboard renders as a box. Items may
//! nest children (e.g., tasks inside a project), which only affect the
//! parent's intrinsic height.
//!
//! # Ongoing Sentinel
//! `start == end` means "open-ended / no defined end date". Ongoing
//! items conflict with every other item during stacking, so they always
//! occupy a lane of their own instead of visually implying a bounded
//! duration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A work item to be placed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// Unique item identifier (stable across layout passes).
    pub id: String,
    /// Human-readable title.
    pub name: String,
    /// Owning person/team, if assigned. Items sharing an owner are kept
    /// vertically contiguous by the stacker.
    pub owner_id: Option<String>,
    /// Completion state (drives the built-in child visibility rules).
    pub status: ItemStatus,
    /// First day of work (inclusive).
    pub start: NaiveDate,
    /// Last day of work (inclusive). Equal to `start` for ongoing items.
    pub end: NaiveDate,
    /// Nested child items; only their visible count affects geometry.
    pub children: Vec<ScheduledItem>,
}

/// Completion state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Not started.
    Planned,
    /// In progress.
    Active,
    /// Finished.
    Done,
}

impl ScheduledItem {
    /// Creates a new item with the given id and date range.
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            owner_id: None,
            status: ItemStatus::Planned,
            start,
            end,
            children: Vec::new(),
        }
    }

    /// Creates an open-ended item (the `start == end` sentinel).
    pub fn ongoing(id: impl Into<String>, start: NaiveDate) -> Self {
        Self::new(id, start, start)
    }

    /// Sets the item name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Sets the completion state.
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a child item.
    pub fn with_child(mut self, child: ScheduledItem) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this item is open-ended (`start == end`).
    #[inline]
    pub fn is_ongoing(&self) -> bool {
        self.start == self.end
    }

    /// Duration in days for bounded items; `None` when ongoing.
    pub fn duration_days(&self) -> Option<i64> {
        if self.is_ongoing() {
            None
        } else {
            Some((self.end - self.start).num_days())
        }
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
