//! Dual-buffer canvas: a persistent raster plus the host's visible surface.

use log::{debug, info};

use super::{CanvasError, CanvasSettings, DrawingSurface, RepaintSink};
use crate::draw::{PersistentRaster, QuadSegment, blit_surface, render_frame_rect};
use crate::input::{InputTracker, MoveOutcome, PointerPhase, PointerSample};
use crate::util::Rect;

/// What a pointer event did to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// A gesture began; nothing was drawn yet
    Started,
    /// A segment was baked into the raster
    Stenciled {
        segment: QuadSegment,
        /// Raster area touched by the segment, for hosts that repaint partially
        damage: Option<Rect>,
    },
    /// The move stayed within the touch tolerance
    Dropped,
    /// The gesture finished and its live path was discarded
    Ended,
}

/// Canvas owning the persistent raster, the frame overlay and the input tracker.
///
/// Strokes are stenciled into the raster as they are drawn; every render then
/// copies the raster to the host surface and strokes the frame on top. The
/// raster lives until the next resize (which replaces it with a blank one) or
/// until the canvas is released.
pub struct LayeredCanvas {
    settings: CanvasSettings,
    /// Off-screen buffer; `None` until the first resize
    raster: Option<PersistentRaster>,
    /// Viewport inset by `frame_inset`; `None` when the inset leaves no area
    frame: Option<Rect>,
    /// Gesture state machine and live path
    tracker: InputTracker,
    /// Where repaint hints are sent
    repaint: Box<dyn RepaintSink>,
}

impl LayeredCanvas {
    /// Creates an unsized canvas. The host must call
    /// [`resize`](DrawingSurface::resize) before rendering or drawing.
    pub fn new(settings: CanvasSettings, repaint: impl RepaintSink + 'static) -> Self {
        Self {
            tracker: InputTracker::new(settings.touch_tolerance),
            settings,
            raster: None,
            frame: None,
            repaint: Box::new(repaint),
        }
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Current frame rectangle, if the canvas is sized and large enough.
    pub fn frame_rect(&self) -> Option<Rect> {
        self.frame
    }

    /// Returns true once a raster has been allocated.
    pub fn is_sized(&self) -> bool {
        self.raster.is_some()
    }

    /// Dimensions of the current raster (equal to the viewport).
    pub fn viewport(&self) -> Option<(i32, i32)> {
        self.raster.as_ref().map(|r| (r.width(), r.height()))
    }

    pub fn raster(&self) -> Option<&PersistentRaster> {
        self.raster.as_ref()
    }

    /// Reads one raster pixel as `[r, g, b, a]`.
    pub fn raster_pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.raster.as_mut()?.pixel(x, y)
    }

    /// Releases the raster and frame. The canvas is unsized afterwards.
    pub fn release(&mut self) {
        self.raster = None;
        self.frame = None;
    }

    /// Bakes a segment into the raster with the canvas stroke style.
    ///
    /// This is the only operation that changes raster pixels after allocation.
    pub fn stencil(&mut self, segment: &QuadSegment) -> Result<(), CanvasError> {
        let raster = self.raster.as_mut().ok_or(CanvasError::NotSized)?;
        raster.stencil(segment, &self.settings.stroke)
    }

    /// Feeds one host pointer event through the tracker.
    ///
    /// # Behavior
    /// - Start: begins a gesture
    /// - Move: stencils any new segment and requests a repaint, also when the
    ///   sample was dropped unless `repaint_on_dropped_move` is off
    /// - End: discards the live path
    ///
    /// # Errors
    /// Gesture order violations from the tracker, and
    /// [`CanvasError::NotSized`] for a move before the first resize.
    pub fn pointer_event(
        &mut self,
        phase: PointerPhase,
        sample: PointerSample,
    ) -> Result<PointerOutcome, CanvasError> {
        match phase {
            PointerPhase::Start => {
                self.tracker.on_gesture_start(sample)?;
                Ok(PointerOutcome::Started)
            }
            PointerPhase::Move => {
                let raster = self.raster.as_mut().ok_or(CanvasError::NotSized)?;
                let stroke = &self.settings.stroke;
                let moved = self
                    .tracker
                    .on_gesture_move_with(sample, |segment| raster.stencil(segment, stroke))?;
                let bounds = Rect::new(0, 0, raster.width(), raster.height());

                let outcome = match moved {
                    MoveOutcome::Appended(segment) => {
                        let padding = self.settings.stroke.half_width() + 1.0;
                        let damage = bounds.and_then(|b| segment.bounding_box(padding, &b));
                        self.repaint.request_repaint();
                        PointerOutcome::Stenciled { segment, damage }
                    }
                    MoveOutcome::Dropped => {
                        debug!(
                            "Dropped move to ({:.1}, {:.1}) within tolerance {:.1}",
                            sample.x,
                            sample.y,
                            self.tracker.tolerance()
                        );
                        if self.settings.repaint_on_dropped_move {
                            self.repaint.request_repaint();
                        }
                        PointerOutcome::Dropped
                    }
                };
                Ok(outcome)
            }
            PointerPhase::End => {
                self.tracker.on_gesture_end(sample)?;
                Ok(PointerOutcome::Ended)
            }
        }
    }

    /// Renders the current content into a new surface of the viewport size.
    pub fn snapshot(&self) -> Result<cairo::ImageSurface, CanvasError> {
        let (width, height) = self.viewport().ok_or(CanvasError::NotSized)?;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            self.render(&ctx)?;
        }
        Ok(surface)
    }
}

impl DrawingSurface for LayeredCanvas {
    /// Replaces the raster with a blank one of the new size.
    ///
    /// The old raster is released first and its content is not carried over.
    fn resize(
        &mut self,
        width: i32,
        height: i32,
        old_width: i32,
        old_height: i32,
    ) -> Result<(), CanvasError> {
        self.release();

        let raster = PersistentRaster::allocate(width, height, self.settings.background)?;
        self.frame =
            Rect::new(0, 0, width, height).and_then(|r| r.inset(self.settings.frame_inset));
        self.raster = Some(raster);

        info!(
            "Canvas resized {}x{} -> {}x{} (frame: {:?})",
            old_width, old_height, width, height, self.frame
        );
        self.repaint.request_repaint();
        Ok(())
    }

    /// Copies the raster to `ctx` at the origin, then strokes the frame.
    fn render(&self, ctx: &cairo::Context) -> Result<(), CanvasError> {
        let raster = self.raster.as_ref().ok_or(CanvasError::NotSized)?;
        blit_surface(ctx, raster.surface())?;
        if let Some(frame) = &self.frame {
            render_frame_rect(ctx, frame, &self.settings.stroke)?;
        }
        Ok(())
    }
}

impl Drop for LayeredCanvas {
    fn drop(&mut self) {
        self.release();
    }
}
