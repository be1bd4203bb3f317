//! Rescale a field into [0, 255] and map it through a gradient.

use crate::api::*;
use crate::field::{FieldStats, NoiseField};
use crate::gradient::Gradient;
use tracing::debug;

pub const BYTES_PER_PIXEL: usize = 4;

/// Packed RGBA8 pixels, row-major with stride `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer { size: FieldSize, data: Vec<u8> }

impl PixelBuffer {
    /// Zeroed buffer for `size`.
    pub fn new(size: FieldSize) -> Self { Self { size, data: vec![0; size.len() * BYTES_PER_PIXEL] } }

    pub fn size(&self) -> FieldSize { self.size }
    pub fn stride(&self) -> usize { self.size.width as usize * BYTES_PER_PIXEL }
    pub fn as_bytes(&self) -> &[u8] { &self.data }
    pub fn as_bytes_mut(&mut self) -> &mut [u8] { &mut self.data }
    pub fn into_vec(self) -> Vec<u8> { self.data }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height { return None; }
        let p = y as usize * self.stride() + x as usize * BYTES_PER_PIXEL;
        self.data.get(p..p + BYTES_PER_PIXEL).and_then(|s| s.try_into().ok())
    }

    /// Sets every alpha byte, e.g. to 255 before handing to an opaque surface.
    pub fn fill_alpha(&mut self, alpha: u8) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) { px[3] = alpha; }
    }
}

/// Gradient index for `value` given the precomputed `scale` and `offset`.
/// Truncates toward zero, then clamps; NaN lands on 0.
#[inline]
fn gradient_index(value: f32, scale: f32, offset: f32) -> u8 {
    ((value * scale - offset) as i32).clamp(0, 255) as u8
}

/// Writes RGB for every field value into `pixels`; alpha bytes are untouched.
///
/// `pixels` must hold exactly `field.len() * 4` bytes. A flat or non-finite
/// range paints every pixel with `gradient[0]`.
pub fn colorize_into(field: &NoiseField, gradient: &Gradient, pixels: &mut [u8]) -> Result<()> {
    colorize_with_bounds(field.values(), field.stats(), gradient, pixels)
}

/// [`colorize_into`] over raw row-major values rescaled by caller-supplied
/// bounds. Values outside `bounds` clamp to the gradient ends.
pub fn colorize_with_bounds(values: &[f32], bounds: FieldStats, gradient: &Gradient, pixels: &mut [u8]) -> Result<()> {
    let expected = values.len() * BYTES_PER_PIXEL;
    if pixels.len() != expected {
        return Err(FieldError::BufferSize { expected, actual: pixels.len() });
    }
    paint(values, bounds, gradient, pixels);
    Ok(())
}

/// Allocating form of [`colorize_into`]; alpha is left at 0.
pub fn colorize(field: &NoiseField, gradient: &Gradient) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(field.size());
    paint(field.values(), field.stats(), gradient, &mut buffer.data);
    buffer
}

fn paint(values: &[f32], bounds: FieldStats, gradient: &Gradient, pixels: &mut [u8]) {
    let FieldStats { min, max } = bounds;
    let scale = 255.0 / (max - min);
    let offset = min * scale;
    let flat = bounds.is_degenerate() || !scale.is_finite() || !offset.is_finite();
    if flat {
        debug!("Flat field (min {min}, max {max}), painting gradient start");
    }

    for (px, &value) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).zip(values) {
        let c = if flat { gradient.first() } else { gradient[gradient_index(value, scale, offset)] };
        px[0] = c.red;
        px[1] = c.green;
        px[2] = c.blue;
    }
}
