//! Timeline layout engine for the U-Engine ecosystem.
//!
//! Places variable-duration work items on a horizontal calendar grid
//! split into per-person lanes, resolves visual overlap by stacking
//! items vertically, and computes the exact geometry (column position,
//! box height, container height) a renderer consumes. The crate fetches
//! nothing, mutates nothing, and draws nothing — hosts supply item
//! collections and window bounds, and read back geometry boxes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduledItem`, `TimeWindow`,
//!   `Column`, `StackAssignment`, `RenderBox`, `GroupLayout`,
//!   `LayoutConfig`
//! - **`layout`**: The computation pipeline — date grid, position,
//!   stacking, height, and the orchestrating `LayoutEngine`
//! - **`visibility`**: Injected child-visibility rules used for sizing
//! - **`validation`**: Input contract checks (intervals, windows, ids,
//!   config ordering)
//!
//! # Design
//!
//! Everything is synchronous and purely functional: each call receives
//! a complete snapshot of inputs and returns a complete output, so the
//! host simply re-invokes the engine on every relevant UI event. The
//! stacker optimizes per-owner visual contiguity over minimal lane
//! count — one person's items stay vertically adjacent even when a
//! denser packing exists.

pub mod layout;
pub mod models;
pub mod validation;
pub mod visibility;
