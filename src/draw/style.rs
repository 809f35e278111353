//! Stroke paint shared by stenciled segments and the frame overlay.

use super::color::Color;

/// Paint used for every stroke drawn on the canvas.
///
/// Strokes always use round caps and joins so that consecutive curve
/// segments stenciled one at a time blend into a continuous line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
    /// Whether edges are antialiased
    pub antialias: bool,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64, antialias: bool) -> Self {
        Self {
            color,
            width,
            antialias,
        }
    }

    /// Configures a Cairo context to stroke with this style.
    pub fn apply(&self, ctx: &cairo::Context) {
        self.color.apply_source(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
        ctx.set_antialias(if self.antialias {
            cairo::Antialias::Default
        } else {
            cairo::Antialias::None
        });
    }

    /// Half the line width; how far a stroke spills past its centerline.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}
