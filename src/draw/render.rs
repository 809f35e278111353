//! Cairo-based rendering functions for the canvas layers.

use super::color::Color;
use super::path::QuadSegment;
use super::style::StrokeStyle;
use crate::util::Rect;

/// Fills the entire target with a solid background color.
///
/// Uses the `Source` operator so that whatever was on the surface before is
/// replaced rather than blended.
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    color.apply_source(ctx);
    ctx.paint()?;
    ctx.restore()
}

/// Strokes one quadratic segment.
///
/// Cairo has no native quadratic curve, so the segment is drawn as the
/// equivalent cubic.
pub fn render_segment(
    ctx: &cairo::Context,
    segment: &QuadSegment,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    style.apply(ctx);

    let (c1, c2) = segment.cubic_controls();
    ctx.new_path();
    ctx.move_to(segment.start.x, segment.start.y);
    ctx.curve_to(c1.x, c1.y, c2.x, c2.y, segment.end.x, segment.end.y);
    ctx.stroke()?;

    ctx.restore()
}

/// Strokes a rectangle outline (the canvas frame).
pub fn render_frame_rect(
    ctx: &cairo::Context,
    rect: &Rect,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    style.apply(ctx);

    ctx.new_path();
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    ctx.stroke()?;

    ctx.restore()
}

/// Copies `source` onto the target at the origin, opaque and unscaled.
pub fn blit_surface(
    ctx: &cairo::Context,
    source: &cairo::ImageSurface,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(source, 0.0, 0.0)?;
    // Limit the copy to the source bounds; Source would clear the rest.
    ctx.rectangle(0.0, 0.0, source.width() as f64, source.height() as f64);
    ctx.fill()?;
    ctx.restore()
}
