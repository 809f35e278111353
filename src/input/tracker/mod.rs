mod core;
mod pointer;
#[cfg(test)]
mod tests;

pub use core::{GestureState, InputTracker, TrackerState};
pub use pointer::MoveOutcome;
