use serde::{Deserialize, Serialize}; use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")] BufferSize { expected: usize, actual: usize },
    #[error("Field holds {actual} values, expected {expected}")] FieldLength { expected: usize, actual: usize },
    #[error("Invalid field size {width}x{height}")] InvalidSize { width: u32, height: u32 },
    #[error("Invalid parameter {name}: {value}")] InvalidParameter { name: &'static str, value: f32 },
    #[error("Config I/O error: {0}")] Io(#[from] std::io::Error),
    #[error("RON config error: {0}")] Ron(#[from] ron::error::SpannedError),
    #[error("JSON config error: {0}")] Json(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")] Format(String),
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color { pub red: u8, pub green: u8, pub blue: u8 }

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
}

/// Width and height of a field in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize { pub width: u32, pub height: u32 }

impl FieldSize {
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }
    pub fn len(&self) -> usize { self.width as usize * self.height as usize }
    pub fn is_empty(&self) -> bool { self.len() == 0 }
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() { return Err(FieldError::InvalidSize { width: self.width, height: self.height }); }
        Ok(())
    }
}

impl Default for FieldSize { fn default() -> Self { Self::new(800, 600) } }

/// Fractal summation parameters. Callers build a fresh value per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams { pub frequency: f32, pub lacunarity: f32, pub gain: f32, pub octaves: u32 }

impl Default for NoiseParams {
    fn default() -> Self { Self { frequency: 0.01, lacunarity: 3.0, gain: 0.2, octaves: 3 } }
}

impl NoiseParams {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("frequency", self.frequency), ("lacunarity", self.lacunarity), ("gain", self.gain)] {
            if !value.is_finite() { return Err(FieldError::InvalidParameter { name, value }); }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoiseVariant { #[default] Fbm, Turbulence }

/// Deterministic, continuous 2-D noise. Sampling must not mutate state.
pub trait NoiseSource: Send + Sync { fn sample(&self, x: f32, y: f32) -> f32; }

impl<T: NoiseSource + ?Sized> NoiseSource for &T { fn sample(&self, x: f32, y: f32) -> f32 { (**self).sample(x, y) } }
impl<T: NoiseSource + ?Sized> NoiseSource for Box<T> { fn sample(&self, x: f32, y: f32) -> f32 { (**self).sample(x, y) } }
