//! Generic pointer event types delivered by the host.

use crate::util::Point;

/// Phase of a pointer gesture.
///
/// Hosts map their native down/move/up (or touch begin/move/end) events to
/// these phases and must deliver them as `Start, Move*, End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Initial contact (pointer down / touch begin)
    Start,
    /// Movement while in contact
    Move,
    /// Release (pointer up / touch end)
    End,
}

/// A raw pointer datum; not retained beyond the current gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// X coordinate in surface pixels
    pub x: f64,
    /// Y coordinate in surface pixels
    pub y: f64,
    /// Monotonic ordinal or timestamp assigned by the host
    pub timestamp: u64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, timestamp: u64) -> Self {
        Self { x, y, timestamp }
    }

    /// The sample's coordinates.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
