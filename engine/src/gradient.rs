//! 256-entry color lookup tables.

use crate::api::Color;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub const GRADIENT_LEN: usize = 256;

/// Truncating per-channel interpolation.
#[inline]
pub fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + t * (b as f32 - a as f32)) as u8
}

#[inline]
pub fn color_lerp(from: Color, to: Color, t: f32) -> Color {
    Color::new(lerp(from.red, to.red, t), lerp(from.green, to.green, t), lerp(from.blue, to.blue, t))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient([Color; GRADIENT_LEN]);

impl Gradient {
    fn from_fn(mut f: impl FnMut(f32) -> Color) -> Self {
        let mut table = [Color::default(); GRADIENT_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = f(i as f32 / 255.0);
        }
        Self(table)
    }

    /// Straight blend from `from` (index 0) to `to` (index 255).
    pub fn linear(from: Color, to: Color) -> Self {
        Self::from_fn(|pct| color_lerp(from, to, pct))
    }

    /// Lower half blends `c1 -> c2`, upper half blends `c3 -> c4`.
    ///
    /// The upper half uses `t = pct * 1.5 - 0.5`, so it starts about a quarter
    /// of the way from `c3` and ends exactly on `c4`.
    pub fn dual(c1: Color, c2: Color, c3: Color, c4: Color) -> Self {
        Self::from_fn(|pct| {
            if pct < 0.5 { color_lerp(c1, c2, pct * 2.0) } else { color_lerp(c3, c4, pct * 1.5 - 0.5) }
        })
    }

    pub fn get(&self, index: u8) -> Color { self.0[index as usize] }
    pub fn first(&self) -> Color { self.0[0] }
    pub fn as_slice(&self) -> &[Color] { &self.0 }
    pub fn len(&self) -> usize { GRADIENT_LEN }
    pub fn is_empty(&self) -> bool { false }
}

impl Index<u8> for Gradient {
    type Output = Color;
    fn index(&self, index: u8) -> &Color { &self.0[index as usize] }
}

/// Anchor colors a gradient is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Single { from: Color, to: Color },
    Dual { c1: Color, c2: Color, c3: Color, c4: Color },
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Dual {
            c1: Color::new(98, 68, 72),
            c2: Color::new(98, 93, 68),
            c3: Color::new(68, 98, 93),
            c4: Color::new(68, 72, 98),
        }
    }
}

impl Palette {
    pub fn build(&self) -> Gradient {
        match *self {
            Palette::Single { from, to } => Gradient::linear(from, to),
            Palette::Dual { c1, c2, c3, c4 } => Gradient::dual(c1, c2, c3, c4),
        }
    }
}
