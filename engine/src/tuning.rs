//! Step rules for interactive parameter tuning.
//!
//! The input side (key polling, redraw) lives with the display collaborator;
//! it owns a [`TuningSession`] and asks it for the next [`NoiseParams`].

use crate::api::NoiseParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

pub const FREQUENCY_STEP: f32 = 0.001;
pub const GAIN_STEP: f32 = 0.01;
/// Relative lacunarity change per step.
pub const LACUNARITY_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuneKey { FlipDirection, Octaves, Frequency, Gain, Lacunarity }

impl TuneKey {
    /// Digit bindings `0`..`4`.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(TuneKey::FlipDirection),
            '1' => Some(TuneKey::Octaves),
            '2' => Some(TuneKey::Frequency),
            '3' => Some(TuneKey::Gain),
            '4' => Some(TuneKey::Lacunarity),
            _ => None,
        }
    }

    /// Parses a list like `"1,2,0,3"` (commas and whitespace ignored).
    pub fn parse_sequence(s: &str) -> Result<Vec<Self>, char> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Self::from_digit(c).ok_or(c))
            .collect()
    }
}

/// Direction multiplier, +1 or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction { Up, Down }

impl Direction {
    pub fn sign(self) -> i32 { match self { Direction::Up => 1, Direction::Down => -1 } }
    pub fn flipped(self) -> Self { match self { Direction::Up => Direction::Down, Direction::Down => Direction::Up } }
}

impl NoiseParams {
    /// Applies one step of `key` in `direction`. `FlipDirection` leaves the
    /// parameters as they are.
    pub fn tuned(&self, key: TuneKey, direction: Direction) -> NoiseParams {
        let d = direction.sign();
        let mut next = *self;
        match key {
            TuneKey::FlipDirection => {}
            TuneKey::Octaves => next.octaves = self.octaves.saturating_add_signed(d),
            TuneKey::Frequency => next.frequency += FREQUENCY_STEP * d as f32,
            TuneKey::Gain => next.gain += GAIN_STEP * d as f32,
            TuneKey::Lacunarity => next.lacunarity += LACUNARITY_STEP * self.lacunarity * d as f32,
        }
        next
    }
}

/// Current parameters plus the direction multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningSession { params: NoiseParams, direction: Direction }

impl TuningSession {
    pub fn new(params: NoiseParams) -> Self { Self { params, direction: Direction::Up } }
    pub fn params(&self) -> NoiseParams { self.params }
    pub fn direction(&self) -> Direction { self.direction }

    /// Applies `key` and returns true when the frame should be redrawn.
    pub fn apply(&mut self, key: TuneKey) -> bool {
        if key == TuneKey::FlipDirection { self.direction = self.direction.flipped(); }
        let next = self.params.tuned(key, self.direction);
        let changed = next != self.params;
        self.params = next;
        info!("{}", self);
        changed || key == TuneKey::FlipDirection
    }
}

impl fmt::Display for TuningSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        write!(f, "dir: {} frequency: {:.6} lacunarity: {:.6} gain: {:.6} octaves: {}",
            self.direction.sign(), p.frequency, p.lacunarity, p.gain, p.octaves)
    }
}
