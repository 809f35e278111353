//! Off-screen raster that accumulates every committed stroke.

use log::{debug, info};

use super::color::Color;
use super::path::QuadSegment;
use super::render::{render_background, render_segment};
use super::style::StrokeStyle;
use crate::canvas::CanvasError;

/// Persistent ARGB32 pixel buffer backing the canvas.
///
/// Dimensions are fixed at allocation. Changing size means dropping this
/// raster and allocating a new one; stenciled content never carries over.
pub struct PersistentRaster {
    surface: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl PersistentRaster {
    /// Allocates a raster of exactly `width × height` filled with `background`.
    ///
    /// # Errors
    /// Returns [`CanvasError::InvalidDimensions`] for non-positive sizes and
    /// [`CanvasError::Cairo`] if the surface cannot be created.
    pub fn allocate(width: i32, height: i32, background: Color) -> Result<Self, CanvasError> {
        if width <= 0 || height <= 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            render_background(&ctx, background)?;
        }

        info!(
            "Allocated persistent raster ({}x{}, {} bytes)",
            width,
            height,
            surface.stride() * height
        );

        Ok(Self {
            surface,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Read-only access to the backing surface, used when compositing.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Bakes a segment into the pixel content.
    pub fn stencil(
        &mut self,
        segment: &QuadSegment,
        style: &StrokeStyle,
    ) -> Result<(), CanvasError> {
        let ctx = cairo::Context::new(&self.surface)?;
        render_segment(&ctx, segment, style)?;
        debug!(
            "Stenciled segment ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            segment.start.x, segment.start.y, segment.end.x, segment.end.y
        );
        Ok(())
    }

    /// Reads one pixel as `[r, g, b, a]`.
    ///
    /// Returns `None` outside the raster bounds.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        read_pixel(&mut self.surface, x, y)
    }
}

impl Drop for PersistentRaster {
    fn drop(&mut self) {
        debug!("Releasing persistent raster ({}x{})", self.width, self.height);
    }
}

/// Reads one pixel of an ARGB32 surface as `[r, g, b, a]`.
///
/// Values are premultiplied, which equals straight alpha for the opaque
/// pixels the canvas produces. Returns `None` when the coordinates fall
/// outside the surface or the surface is still referenced by a live context.
pub fn read_pixel(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> Option<[u8; 4]> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return None;
    }

    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().ok()?;
    let offset = y as usize * stride + x as usize * 4;
    let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
    let argb = u32::from_ne_bytes(bytes);

    Some([
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ])
}
