//! Gesture state machine and live path ownership.

use crate::draw::LivePath;
use crate::util::Point;

/// Per-gesture bookkeeping, alive only while the pointer is down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Most recent raw point baked into the live path
    pub last_committed: Point,
    /// Latest raw sample, committed or not
    pub pending: Point,
    /// Timestamp of the sample that started the gesture
    pub started_at: u64,
}

/// Current tracking mode.
///
/// There is no cancelled state: every gesture runs until its end event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    /// Pointer is up, waiting for a gesture to start
    Idle,
    /// Pointer is down and samples are being smoothed into the live path
    Tracking(GestureState),
}

/// Turns pointer samples into smoothed quadratic segments.
///
/// Consecutive samples are joined by curves whose control point is the
/// previous raw sample and whose end is the midpoint between the previous and
/// current sample, producing a rounded trace instead of a polyline.
pub struct InputTracker {
    /// Current tracking mode
    pub(super) state: TrackerState,
    /// Path of the stroke being drawn; empty while idle
    pub(super) path: LivePath,
    /// Minimum per-axis movement before a sample becomes a new segment
    tolerance: f64,
}

impl InputTracker {
    /// Creates an idle tracker with the given touch tolerance in pixels.
    pub fn new(tolerance: f64) -> Self {
        Self {
            state: TrackerState::Idle,
            path: LivePath::new(),
            tolerance: tolerance.max(0.0),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Returns true while a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking(_))
    }

    /// Gesture bookkeeping of the active gesture, if any.
    pub fn gesture(&self) -> Option<&GestureState> {
        match &self.state {
            TrackerState::Tracking(gesture) => Some(gesture),
            TrackerState::Idle => None,
        }
    }

    /// The live path of the current gesture.
    pub fn path(&self) -> &LivePath {
        &self.path
    }

    /// Returns true if moving from `from` to `to` clears the tolerance gate.
    pub(super) fn exceeds_tolerance(&self, from: Point, to: Point) -> bool {
        let (dx, dy) = from.axis_distance(to);
        dx >= self.tolerance || dy >= self.tolerance
    }
}
