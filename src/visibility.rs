//! Child visibility rules.
//!
//! The host decides which nested children count toward an item's size —
//! a dashboard typically hides completed tasks from a project box. The
//! rule is injected into the engine rather than hardcoded, so sizing
//! and filtering always agree with whatever the host currently shows.
//!
//! # Usage
//!
//! ```
//! use u_timeline::visibility::{ChildVisibility, HideDone};
//! use u_timeline::models::{ItemStatus, ScheduledItem};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let child = ScheduledItem::new("T1", day, day).with_status(ItemStatus::Done);
//! assert!(!HideDone.is_visible(&child));
//! ```

use crate::models::{ItemStatus, ScheduledItem};

/// A rule deciding whether a nested child participates in sizing.
pub trait ChildVisibility {
    /// Rule name (e.g., "ALL", "HIDE_DONE").
    fn name(&self) -> &'static str {
        "CUSTOM"
    }

    /// Whether the child is counted when sizing its parent.
    fn is_visible(&self, child: &ScheduledItem) -> bool;
}

/// Every child counts.
#[derive(Debug, Clone, Copy)]
pub struct AllChildren;

impl ChildVisibility for AllChildren {
    fn name(&self) -> &'static str {
        "ALL"
    }

    fn is_visible(&self, _child: &ScheduledItem) -> bool {
        true
    }
}

/// Hides children whose status is `Done`.
#[derive(Debug, Clone, Copy)]
pub struct HideDone;

impl ChildVisibility for HideDone {
    fn name(&self) -> &'static str {
        "HIDE_DONE"
    }

    fn is_visible(&self, child: &ScheduledItem) -> bool {
        child.status != ItemStatus::Done
    }
}

/// Closures are rules too, for one-off host predicates.
impl<F> ChildVisibility for F
where
    F: Fn(&ScheduledItem) -> bool,
{
    fn is_visible(&self, child: &ScheduledItem) -> bool {
        self(child)
    }
}
