//! Timeline layout subsystem.
//!
//! Pure, stateless computations composed by [`LayoutEngine`]:
//!
//! - **`grid`**: visible calendar columns and working-day pagination
//! - **`position`**: date interval → left/width percent on the grid
//! - **`stacking`**: lane assignment with owner affinity
//! - **`height`**: item, lane, and container pixel heights
//! - **`engine`**: the orchestrator producing `GroupLayout`

mod engine;
pub mod grid;
pub mod height;
pub mod position;
pub mod stacking;

pub use engine::LayoutEngine;
pub use grid::ShiftDirection;
