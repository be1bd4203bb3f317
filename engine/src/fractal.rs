//! Octave summation over a [`NoiseSource`].

use crate::api::*;

/// Signed fractional Brownian motion. Zero octaves sum to 0.0.
#[inline]
pub fn fbm<S: NoiseSource + ?Sized>(source: &S, x: f32, y: f32, params: &NoiseParams) -> f32 {
    let mut sum = 0.0f32;
    let mut frequency = params.frequency;
    let mut amplitude = 1.0f32;
    for _ in 0..params.octaves {
        sum += source.sample(x * frequency, y * frequency) * amplitude;
        frequency *= params.lacunarity;
        amplitude *= params.gain;
    }
    sum
}

/// Like [`fbm`] but every octave contributes its magnitude, giving ridged,
/// non-negative fields.
///
/// The magnitude is taken of the weighted term, `|sample * amplitude|`. This
/// equals `|sample| * amplitude` for non-negative gain and keeps every term
/// non-negative when the gain is negative.
#[inline]
pub fn turbulence<S: NoiseSource + ?Sized>(source: &S, x: f32, y: f32, params: &NoiseParams) -> f32 {
    let mut sum = 0.0f32;
    let mut frequency = params.frequency;
    let mut amplitude = 1.0f32;
    for _ in 0..params.octaves {
        sum += (source.sample(x * frequency, y * frequency) * amplitude).abs();
        frequency *= params.lacunarity;
        amplitude *= params.gain;
    }
    sum
}

impl NoiseVariant {
    #[inline]
    pub fn accumulate<S: NoiseSource + ?Sized>(self, source: &S, x: f32, y: f32, params: &NoiseParams) -> f32 {
        match self {
            NoiseVariant::Fbm => fbm(source, x, y, params),
            NoiseVariant::Turbulence => turbulence(source, x, y, params),
        }
    }
}
