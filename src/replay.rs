//! Headless replay of recorded gesture scripts.
//!
//! A script is a JSON document holding an optional initial viewport and a list
//! of events:
//!
//! ```json
//! {
//!   "viewport": [400, 300],
//!   "events": [
//!     { "phase": "start", "x": 10, "y": 10 },
//!     { "phase": "move", "x": 10, "y": 19, "t": 16 },
//!     { "phase": "end", "x": 10, "y": 19 },
//!     { "phase": "resize", "width": 640, "height": 480 }
//!   ]
//! }
//! ```
//!
//! Events without a `t` field are stamped with their index in the list.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::canvas::{DrawingSurface, LayeredCanvas, PointerOutcome};
use crate::input::{PointerPhase, PointerSample};

/// Viewport used when neither the caller nor the script names one.
pub const DEFAULT_VIEWPORT: (i32, i32) = (1080, 720);

/// A recorded sequence of host events.
#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    /// Initial viewport `[width, height]`
    #[serde(default)]
    pub viewport: Option<[i32; 2]>,
    /// Events in delivery order
    pub events: Vec<ScriptEvent>,
}

/// One host event in a script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ScriptEvent {
    Start {
        x: f64,
        y: f64,
        #[serde(default)]
        t: Option<u64>,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        t: Option<u64>,
    },
    End {
        x: f64,
        y: f64,
        #[serde(default)]
        t: Option<u64>,
    },
    Resize {
        width: i32,
        height: i32,
    },
}

/// Counters collected while replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Gestures started
    pub gestures: usize,
    /// Segments stenciled into the raster
    pub segments: usize,
    /// Moves rejected by the touch tolerance
    pub dropped: usize,
    /// Resize events applied (the initial sizing is not counted)
    pub resizes: usize,
}

impl GestureScript {
    /// Parses a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid gesture script")
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read gesture script {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse gesture script {}", path.display()))
    }

    /// Viewport to size the canvas with before the first event.
    ///
    /// An explicit `override_size` wins over the script's own viewport.
    pub fn initial_viewport(&self, override_size: Option<(i32, i32)>) -> (i32, i32) {
        override_size
            .or(self.viewport.map(|[w, h]| (w, h)))
            .unwrap_or(DEFAULT_VIEWPORT)
    }
}

/// Sizes `canvas` and feeds every script event to it.
///
/// # Errors
/// Fails on the first event the canvas rejects, naming the event index.
pub fn replay(
    script: &GestureScript,
    canvas: &mut LayeredCanvas,
    viewport: (i32, i32),
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    let (mut width, mut height) = viewport;
    canvas
        .resize(width, height, 0, 0)
        .context("Failed to size canvas")?;

    for (index, event) in script.events.iter().enumerate() {
        let ordinal = index as u64;
        let (phase, sample) = match *event {
            ScriptEvent::Resize {
                width: new_width,
                height: new_height,
            } => {
                canvas
                    .resize(new_width, new_height, width, height)
                    .with_context(|| format!("Event {index}: resize failed"))?;
                width = new_width;
                height = new_height;
                stats.resizes += 1;
                continue;
            }
            ScriptEvent::Start { x, y, t } => {
                (PointerPhase::Start, PointerSample::new(x, y, t.unwrap_or(ordinal)))
            }
            ScriptEvent::Move { x, y, t } => {
                (PointerPhase::Move, PointerSample::new(x, y, t.unwrap_or(ordinal)))
            }
            ScriptEvent::End { x, y, t } => {
                (PointerPhase::End, PointerSample::new(x, y, t.unwrap_or(ordinal)))
            }
        };

        let outcome = canvas
            .pointer_event(phase, sample)
            .with_context(|| format!("Event {index}: {phase:?} at ({}, {})", sample.x, sample.y))?;
        debug!("Event {index}: {outcome:?}");

        match outcome {
            PointerOutcome::Started => stats.gestures += 1,
            PointerOutcome::Stenciled { .. } => stats.segments += 1,
            PointerOutcome::Dropped => stats.dropped += 1,
            PointerOutcome::Ended => {}
        }
    }

    info!(
        "Replayed {} events: {} gestures, {} segments, {} dropped moves",
        script.events.len(),
        stats.gestures,
        stats.segments,
        stats.dropped
    );
    Ok(stats)
}

/// Writes a surface to a PNG file.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    info!("Wrote {}x{} image to {}", surface.width(), surface.height(), path.display());
    Ok(())
}
