//! Layered drawing canvas: persistent raster, frame overlay and gesture input.
//!
//! The host drives a canvas through two capabilities, captured by the
//! [`DrawingSurface`] trait: `resize` whenever the drawable area changes and
//! `render` whenever it decides to redraw. Pointer events are forwarded with
//! [`LayeredCanvas::pointer_event`]; repaint hints flow back through a
//! [`RepaintSink`].

mod error;
mod layered;
mod repaint;

pub use error::CanvasError;
pub use layered::{LayeredCanvas, PointerOutcome};
pub use repaint::{RepaintFlag, RepaintSink};

use crate::config::Config;
use crate::draw::{Color, StrokeStyle};

/// Host-facing lifecycle of a drawing surface.
pub trait DrawingSurface {
    /// Called whenever the drawable area changes, at least once before the
    /// first render.
    fn resize(
        &mut self,
        width: i32,
        height: i32,
        old_width: i32,
        old_height: i32,
    ) -> Result<(), CanvasError>;

    /// Draws the current content onto the host's target.
    fn render(&self, ctx: &cairo::Context) -> Result<(), CanvasError>;
}

/// Fixed parameters of a canvas, constant for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    /// Fill color of a freshly allocated raster
    pub background: Color,
    /// Paint for strokes and the frame overlay
    pub stroke: StrokeStyle,
    /// Distance of the frame from each viewport edge
    pub frame_inset: i32,
    /// Minimum per-axis movement that produces a new segment
    pub touch_tolerance: f64,
    /// Whether moves rejected by the tolerance gate still request a repaint
    pub repaint_on_dropped_move: bool,
}

impl CanvasSettings {
    /// Derives canvas settings from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            background: config.drawing.background.to_color(),
            stroke: StrokeStyle::new(
                config.drawing.color.to_color(),
                config.drawing.stroke_width,
                config.drawing.antialias,
            ),
            frame_inset: config.canvas.frame_inset,
            touch_tolerance: config.canvas.touch_tolerance(),
            repaint_on_dropped_move: config.canvas.repaint_on_dropped_move,
        }
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
