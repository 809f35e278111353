//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke and background appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Pen color - either a named color (red, green, blue, yellow, amber, orange,
    /// pink, white, black) or an RGB array like `[255, 193, 7]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Canvas background color, same format as `color`
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Smooth stroke edges
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            background: default_background(),
            stroke_width: default_stroke_width(),
            antialias: default_antialias(),
        }
    }
}

/// Canvas geometry and input sampling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Distance of the frame from each viewport edge in pixels (valid range: 0 - 500)
    #[serde(default = "default_frame_inset")]
    pub frame_inset: i32,

    /// Touch slop in density-independent pixels (valid range: 0.0 - 64.0).
    /// Movement smaller than this on both axes does not add a curve segment.
    #[serde(default = "default_touch_slop")]
    pub touch_slop: f64,

    /// Display density multiplier applied to `touch_slop` (valid range: 0.25 - 8.0)
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,

    /// Request a repaint even for moves that fall within the touch slop
    #[serde(default = "default_repaint_on_dropped_move")]
    pub repaint_on_dropped_move: bool,
}

impl CanvasConfig {
    /// Touch tolerance in surface pixels.
    pub fn touch_tolerance(&self) -> f64 {
        self.touch_slop * self.display_scale
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            frame_inset: default_frame_inset(),
            touch_slop: default_touch_slop(),
            display_scale: default_display_scale(),
            repaint_on_dropped_move: default_repaint_on_dropped_move(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("amber".to_string())
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("yellow".to_string())
}

fn default_stroke_width() -> f64 {
    12.0
}

fn default_antialias() -> bool {
    true
}

fn default_frame_inset() -> i32 {
    40
}

fn default_touch_slop() -> f64 {
    8.0
}

fn default_display_scale() -> f64 {
    1.0
}

fn default_repaint_on_dropped_move() -> bool {
    true
}
