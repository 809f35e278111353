//! Geometry helpers shared by the path, raster and tracker modules.
//!
//! This module provides:
//! - [`Point`]: floating-point pointer coordinates
//! - [`Rect`]: integer axis-aligned rectangles (frame overlay, segment damage)
//! - Color name lookup for the configuration system

use crate::draw::{Color, color::*};

// ============================================================================
// Points
// ============================================================================

/// A position on the drawing surface in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Per-axis absolute distance `(|dx|, |dy|)` to another point.
    pub fn axis_distance(self, other: Point) -> (f64, f64) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`, `t = 1` is `other`).
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle helper used for the frame overlay and segment bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Returns `None` for empty bounds and for spans wider than `i32::MAX`.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.checked_sub(min_x)?;
        let height = max_y.checked_sub(min_y)?;
        Self::new(min_x, min_y, width, height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Shrinks the rectangle by `margin` on all four sides.
    ///
    /// Returns `None` when the margin consumes the whole rectangle.
    pub fn inset(&self, margin: i32) -> Option<Self> {
        Self::from_min_max(
            self.x + margin,
            self.y + margin,
            self.right() - margin,
            self.bottom() - margin,
        )
    }
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "amber", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "amber" => Some(AMBER),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
