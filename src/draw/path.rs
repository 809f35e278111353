//! Live stroke path built from move-to and quadratic curve commands.

use crate::util::{Point, Rect};

/// A single command in a [`LivePath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the given point
    MoveTo(Point),
    /// Quadratic bezier from the current point through `control` to `end`
    QuadTo { control: Point, end: Point },
}

/// A fully resolved quadratic bezier segment.
///
/// Unlike [`PathCommand::QuadTo`], the segment carries its own start point so
/// it can be stenciled into a raster without the rest of the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl QuadSegment {
    /// Returns the two cubic control points equivalent to this quadratic curve.
    ///
    /// Cairo only draws cubic beziers; a quadratic with control `q` maps onto a
    /// cubic with controls at two thirds of the way from each endpoint to `q`.
    pub fn cubic_controls(&self) -> (Point, Point) {
        let c1 = self.start.lerp(self.control, 2.0 / 3.0);
        let c2 = self.end.lerp(self.control, 2.0 / 3.0);
        (c1, c2)
    }

    /// Bounding box of the segment's control polygon, grown by `padding` pixels
    /// and clipped to `clip`.
    ///
    /// A quadratic bezier always lies inside the hull of its three points, so
    /// this box fully covers the stroked segment when `padding` is at least
    /// half the stroke width. Returns `None` when nothing of it lies in `clip`.
    pub fn bounding_box(&self, padding: f64, clip: &Rect) -> Option<Rect> {
        let xs = [self.start.x, self.control.x, self.end.x];
        let ys = [self.start.y, self.control.y, self.end.y];
        // Clip in f64 so far off-surface coordinates never reach the i32 casts.
        let min_x = (xs.iter().copied().fold(f64::INFINITY, f64::min) - padding)
            .max(clip.x as f64);
        let max_x = (xs.iter().copied().fold(f64::NEG_INFINITY, f64::max) + padding)
            .min(clip.right() as f64);
        let min_y = (ys.iter().copied().fold(f64::INFINITY, f64::min) - padding)
            .max(clip.y as f64);
        let max_y = (ys.iter().copied().fold(f64::NEG_INFINITY, f64::max) + padding)
            .min(clip.bottom() as f64);

        Rect::from_min_max(
            min_x.floor() as i32,
            min_y.floor() as i32,
            max_x.ceil() as i32,
            max_y.ceil() as i32,
        )
    }
}

/// The in-progress stroke of the current gesture.
#[derive(Debug, Clone, Default)]
pub struct LivePath {
    commands: Vec<PathCommand>,
    current: Option<Point>,
}

impl LivePath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every command and the current point.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.current = None;
    }

    /// Starts a new subpath at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
        self.current = Some(point);
    }

    /// Appends a quadratic curve from the current point.
    ///
    /// Returns the resolved segment, or `None` (appending nothing) when the
    /// path has no current point yet.
    pub fn quad_to(&mut self, control: Point, end: Point) -> Option<QuadSegment> {
        let start = self.current?;
        self.commands.push(PathCommand::QuadTo { control, end });
        self.current = Some(end);
        Some(QuadSegment {
            start,
            control,
            end,
        })
    }

    /// All commands in insertion order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The end point of the last command, if any.
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of curve segments (every command except move-tos).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Returns the most recently appended curve, if the path ends in one.
    pub fn last_segment(&self) -> Option<&PathCommand> {
        self.commands
            .last()
            .filter(|cmd| matches!(cmd, PathCommand::QuadTo { .. }))
    }
}
