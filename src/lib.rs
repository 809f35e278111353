//! Freehand drawing surface with a persistent off-screen raster.
//!
//! Pointer samples are smoothed into quadratic curves by the
//! [`input::InputTracker`] and baked into the raster owned by
//! [`canvas::LayeredCanvas`], which the host composites (with a border frame)
//! onto its visible surface on every repaint.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod util;

pub use canvas::{CanvasError, CanvasSettings, DrawingSurface, LayeredCanvas};
pub use config::Config;
