//! Per-pixel field synthesis with running statistics.

use crate::api::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bounds of a field. `min <= v <= max` for every value it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldStats { pub min: f32, pub max: f32 }

impl FieldStats {
    /// Folds the bounds of `values`, seeded from the first element.
    /// An empty slice yields the degenerate `(0, 0)`.
    pub fn from_values(values: &[f32]) -> Self {
        let Some((&first, rest)) = values.split_first() else { return Self::default() };
        rest.iter().fold(Self { min: first, max: first }, |s, &v| Self { min: s.min.min(v), max: s.max.max(v) })
    }

    /// True when the range cannot be rescaled (flat or non-finite field).
    pub fn is_degenerate(&self) -> bool { !(self.max > self.min) || !(self.max - self.min).is_finite() }
}

/// Row-major scalar field, `values[y * width + x]`.
///
/// Always holds exactly `size.len()` values, and `stats` always describes
/// them; both are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField { size: FieldSize, values: Vec<f32>, stats: FieldStats }

impl NoiseField {
    pub fn from_values(size: FieldSize, values: Vec<f32>) -> Result<Self> {
        if values.len() != size.len() {
            return Err(FieldError::FieldLength { expected: size.len(), actual: values.len() });
        }
        Ok(Self::new_unchecked(size, values))
    }

    /// Every pixel set to `value`.
    pub fn flat(size: FieldSize, value: f32) -> Self { Self::new_unchecked(size, vec![value; size.len()]) }

    fn new_unchecked(size: FieldSize, values: Vec<f32>) -> Self {
        let stats = FieldStats::from_values(&values);
        Self { size, values, stats }
    }

    pub fn size(&self) -> FieldSize { self.size }
    pub fn values(&self) -> &[f32] { &self.values }
    pub fn stats(&self) -> FieldStats { self.stats }
    pub fn into_values(self) -> Vec<f32> { self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn min(&self) -> f32 { self.stats.min }
    pub fn max(&self) -> f32 { self.stats.max }

    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.size.width || y >= self.size.height { return None; }
        self.values.get(y as usize * self.size.width as usize + x as usize).copied()
    }
}

/// Samples every pixel of `size` in row-major order.
pub fn synthesize<S: NoiseSource + ?Sized>(source: &S, size: FieldSize, params: &NoiseParams, variant: NoiseVariant) -> NoiseField {
    let mut values = Vec::with_capacity(size.len());
    for y in 0..size.height { for x in 0..size.width {
        values.push(variant.accumulate(source, x as f32, y as f32, params));
    }}
    let field = NoiseField::new_unchecked(size, values);
    debug!("Synthesized {}x{} {:?} field, min {} max {}", size.width, size.height, variant, field.min(), field.max());
    field
}

/// [`synthesize`] with rows spread across the rayon pool. Output is identical.
pub fn synthesize_par<S: NoiseSource + ?Sized>(source: &S, size: FieldSize, params: &NoiseParams, variant: NoiseVariant) -> NoiseField {
    let width = size.width as usize;
    let mut values = vec![0.0f32; size.len()];
    if width > 0 {
        values.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = variant.accumulate(source, x as f32, y as f32, params);
            }
        });
    }
    let field = NoiseField::new_unchecked(size, values);
    debug!("Synthesized {}x{} {:?} field in parallel, min {} max {}", size.width, size.height, variant, field.min(), field.max());
    field
}
