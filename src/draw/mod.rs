//! Rendering primitives for the drawing surface (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`LivePath`] and [`QuadSegment`]: the smoothed in-progress stroke
//! - [`StrokeStyle`]: the single paint used for strokes and the frame
//! - [`PersistentRaster`]: the off-screen buffer strokes are baked into
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod path;
pub mod raster;
pub mod render;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use path::{LivePath, PathCommand, QuadSegment};
pub use raster::{PersistentRaster, read_pixel};
pub use render::{blit_surface, render_background, render_frame_rect, render_segment};
pub use style::StrokeStyle;

pub use color::{AMBER, BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
