//! Error type for canvas and gesture precondition violations.

use thiserror::Error;

/// Errors raised by the drawing surface.
///
/// Apart from [`CanvasError::Cairo`], every variant reports a host that broke
/// the calling contract (events out of order, render before resize) rather
/// than a condition to recover from at runtime.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas has not been sized; call resize before rendering or drawing")]
    NotSized,

    #[error("no active gesture; pointer move/end received without a start")]
    NoActiveGesture,

    #[error("a gesture is already active; pointer start received twice")]
    GestureAlreadyActive,

    #[error("invalid viewport dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}
