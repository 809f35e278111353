use crate::canvas::CanvasError;
use crate::draw::QuadSegment;
use crate::input::events::PointerSample;
use log::{debug, warn};

use super::{GestureState, InputTracker, TrackerState};

/// Result of feeding a move sample to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// A new segment was appended to the live path
    Appended(QuadSegment),
    /// The sample stayed within the touch tolerance and was not committed
    Dropped,
}

impl InputTracker {
    /// Processes the first sample of a gesture.
    ///
    /// # Behavior
    /// - Clears the live path and starts a new subpath at the sample
    /// - Records the sample as the last committed point
    /// - Transitions Idle → Tracking
    ///
    /// # Errors
    /// [`CanvasError::GestureAlreadyActive`] if a gesture is already being
    /// tracked; the running gesture is left untouched.
    pub fn on_gesture_start(&mut self, sample: PointerSample) -> Result<(), CanvasError> {
        if self.is_tracking() {
            warn!(
                "Rejecting gesture start at ({:.1}, {:.1}): gesture already active",
                sample.x, sample.y
            );
            return Err(CanvasError::GestureAlreadyActive);
        }

        let point = sample.position();
        self.path.reset();
        self.path.move_to(point);
        self.state = TrackerState::Tracking(GestureState {
            last_committed: point,
            pending: point,
            started_at: sample.timestamp,
        });
        debug!("Gesture started at ({:.1}, {:.1})", sample.x, sample.y);
        Ok(())
    }

    /// Processes a movement sample of the active gesture.
    ///
    /// # Behavior
    /// - Movement below the tolerance on both axes is dropped
    /// - Otherwise appends a quadratic segment with the last committed point
    ///   as control and the midpoint to the sample as end, then commits the
    ///   raw sample (not the midpoint)
    ///
    /// # Errors
    /// [`CanvasError::NoActiveGesture`] when no gesture was started.
    pub fn on_gesture_move(&mut self, sample: PointerSample) -> Result<MoveOutcome, CanvasError> {
        self.on_gesture_move_with(sample, |_| Ok(()))
    }

    /// Like [`on_gesture_move`](Self::on_gesture_move), but hands a new
    /// segment to `stencil` before committing it.
    ///
    /// If `stencil` fails, the path and the last committed point stay as they
    /// were and the error is returned. Only the pending sample is updated.
    pub fn on_gesture_move_with<F>(
        &mut self,
        sample: PointerSample,
        stencil: F,
    ) -> Result<MoveOutcome, CanvasError>
    where
        F: FnOnce(&QuadSegment) -> Result<(), CanvasError>,
    {
        let point = sample.position();
        let last = match &mut self.state {
            TrackerState::Tracking(gesture) => {
                gesture.pending = point;
                gesture.last_committed
            }
            TrackerState::Idle => {
                warn!(
                    "Rejecting move at ({:.1}, {:.1}) outside of a gesture",
                    sample.x, sample.y
                );
                return Err(CanvasError::NoActiveGesture);
            }
        };

        if !self.exceeds_tolerance(last, point) {
            return Ok(MoveOutcome::Dropped);
        }

        // Tracking always begins with a move-to, so the path has a current point.
        let Some(start) = self.path.current_point() else {
            debug_assert!(false, "tracking gesture without a current point");
            return Err(CanvasError::NoActiveGesture);
        };
        let segment = QuadSegment {
            start,
            control: last,
            end: last.midpoint(point),
        };
        stencil(&segment)?;

        self.path.quad_to(segment.control, segment.end);
        if let TrackerState::Tracking(gesture) = &mut self.state {
            gesture.last_committed = point;
        }

        Ok(MoveOutcome::Appended(segment))
    }

    /// Processes the final sample of a gesture.
    ///
    /// The live path is discarded without being stenciled, so the tail between
    /// the last committed point and the release position is never drawn.
    ///
    /// # Errors
    /// [`CanvasError::NoActiveGesture`] when no gesture was started.
    pub fn on_gesture_end(&mut self, sample: PointerSample) -> Result<(), CanvasError> {
        let TrackerState::Tracking(gesture) = &self.state else {
            warn!(
                "Rejecting gesture end at ({:.1}, {:.1}) without a gesture start",
                sample.x, sample.y
            );
            return Err(CanvasError::NoActiveGesture);
        };

        debug!(
            "Gesture ended after {} segments ({} -> {})",
            self.path.segment_count(),
            gesture.started_at,
            sample.timestamp
        );
        self.path.reset();
        self.state = TrackerState::Idle;
        Ok(())
    }
}
