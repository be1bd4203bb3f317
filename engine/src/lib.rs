//! Fractal noise fields rendered into RGBA pixel buffers.
//!
//! A [`NoiseSource`] is summed over octaves ([`fractal`]), sampled for every
//! pixel ([`field`]), rescaled by the field's bounds and mapped through a
//! 256-entry [`Gradient`] ([`colorize`]). [`synthesize_and_colorize`] runs the
//! whole chain for one [`FrameRequest`].

pub mod api;
pub mod colorize;
pub mod config;
pub mod field;
pub mod fractal;
pub mod gradient;
pub mod pipeline;
pub mod sampling;
pub mod tuning;

pub use api::*;
pub use colorize::{colorize, colorize_into, colorize_with_bounds, PixelBuffer};
pub use config::FieldConfig;
pub use field::{synthesize, synthesize_par, FieldStats, NoiseField};
pub use fractal::{fbm, turbulence};
pub use gradient::{Gradient, Palette};
pub use pipeline::{synthesize_and_colorize, FrameRequest};
pub use sampling::{ConstantSource, PerlinSource, SimplexSource, SourceKind};
pub use tuning::{Direction, TuneKey, TuningSession};
