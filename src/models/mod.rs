//! Timeline layout domain models.
//!
//! Provides the core data types for timeline layout problems and their
//! solutions. All entities are ephemeral: the engine recomputes them on
//! every layout pass (window change, item-set change, filter change).
//!
//! # Pipeline Mapping
//!
//! | Model | Role |
//! |-------|------|
//! | `TimeWindow` | Visible page of calendar days |
//! | `Column` | One weighted day column |
//! | `ScheduledItem` | Input work item (with children) |
//! | `StackAssignment` | Item → lane solution |
//! | `RenderBox` / `GroupLayout` | Final geometry for the renderer |
//! | `LayoutConfig` | All geometry constants |

mod column;
mod config;
mod geometry;
mod item;
mod window;

pub use column::{Column, ColumnKind};
pub use config::LayoutConfig;
pub use geometry::{ColumnSpan, GroupLayout, RenderBox, StackAssignment};
pub use item::{ItemStatus, ScheduledItem};
pub use window::TimeWindow;
