use crate::api::*;
use fastnoise_lite::{FastNoiseLite, NoiseType};
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

/// OpenSimplex2 noise in roughly [-1, 1].
///
/// The generator's own frequency is pinned to 1.0 and its fractal mode left
/// off; octave scaling happens in [`crate::fractal`].
pub struct SimplexSource { inner: FastNoiseLite }

impl SimplexSource {
    pub fn new(seed: i32) -> Self {
        let mut f = FastNoiseLite::with_seed(seed);
        f.set_noise_type(Some(NoiseType::OpenSimplex2));
        f.set_frequency(Some(1.0));
        Self { inner: f }
    }
}

impl NoiseSource for SimplexSource {
    fn sample(&self, x: f32, y: f32) -> f32 {
        if !(x.is_finite() && y.is_finite()) { return 0.0; }
        self.inner.get_noise_2d(x, y)
    }
}

/// Lattice period of the `noise` crate's 256-entry permutation table.
const PERLIN_PERIOD: f64 = 256.0;

/// Classic gradient noise backed by the `noise` crate.
///
/// Coordinates are wrapped into one lattice period before sampling: the
/// crate converts lattice corners to `isize` and panics once that overflows.
pub struct PerlinSource { inner: Perlin }

impl PerlinSource {
    pub fn new(seed: u32) -> Self { Self { inner: Perlin::new(seed) } }
}

impl NoiseSource for PerlinSource {
    fn sample(&self, x: f32, y: f32) -> f32 {
        if !(x.is_finite() && y.is_finite()) { return 0.0; }
        let wrap = |v: f32| (v as f64).rem_euclid(PERLIN_PERIOD);
        self.inner.get([wrap(x), wrap(y)]) as f32
    }
}

/// Same value everywhere. Useful for flat fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(pub f32);

impl NoiseSource for ConstantSource {
    fn sample(&self, _x: f32, _y: f32) -> f32 { self.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceKind { #[default] Simplex, Perlin }

impl SourceKind {
    pub fn build(self, seed: u32) -> Box<dyn NoiseSource> {
        match self {
            SourceKind::Simplex => Box::new(SimplexSource::new(seed as i32)),
            SourceKind::Perlin => Box::new(PerlinSource::new(seed)),
        }
    }
}
