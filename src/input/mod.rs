//! Input handling and gesture state machine.
//!
//! This module translates host pointer events into smoothed curve segments.
//! It keeps the per-gesture state and the live path of the stroke currently
//! being drawn.

pub mod events;
pub mod tracker;

// Re-export commonly used types at module level
pub use events::{PointerPhase, PointerSample};
pub use tracker::{GestureState, InputTracker, MoveOutcome, TrackerState};
