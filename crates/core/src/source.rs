//! Value sources - where new tile values come from
//!
//! The engine only needs one operation from a source: produce the next value.
//! The distribution is up to the source. Provided implementations:
//!
//! - [`SimpleRng`]: a small deterministic LCG for seeded play and tests
//! - [`ColorSource`]: uniform random [`Color`]s drawn from a `SimpleRng`
//! - [`CyclingSource`]: a fixed list of values repeated in order
//!
//! Any `FnMut() -> T` closure is also a source.

use crate::error::EngineError;
use crate::types::Color;

/// A generator of fresh tile values
pub trait ValueSource<T> {
    /// Produce the next value. Called once per created or refilled cell.
    fn next_value(&mut self) -> T;
}

impl<T, F> ValueSource<T> for F
where
    F: FnMut() -> T,
{
    fn next_value(&mut self) -> T {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits: the low bits of a power-of-two LCG have a
    /// tiny period (the lowest two bits repeat every 4 draws).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state, usable as a seed to resume the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Random color generator
#[derive(Debug, Clone)]
pub struct ColorSource {
    rng: SimpleRng,
    palette: Vec<Color>,
}

impl ColorSource {
    /// Draw uniformly from all four colors
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            palette: Color::ALL.to_vec(),
        }
    }

    /// Draw uniformly from a custom palette.
    pub fn with_palette(seed: u32, palette: Vec<Color>) -> Result<Self, EngineError> {
        if palette.is_empty() {
            return Err(EngineError::EmptyValueSet);
        }
        Ok(Self {
            rng: SimpleRng::new(seed),
            palette,
        })
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ValueSource<Color> for ColorSource {
    fn next_value(&mut self) -> Color {
        let idx = self.rng.next_range(self.palette.len() as u32) as usize;
        self.palette[idx]
    }
}

/// Yields a fixed sequence of values, starting over after the last one
#[derive(Debug, Clone)]
pub struct CyclingSource<T> {
    values: Vec<T>,
    next: usize,
}

impl<T: Clone> CyclingSource<T> {
    pub fn new(values: Vec<T>) -> Result<Self, EngineError> {
        if values.is_empty() {
            return Err(EngineError::EmptyValueSet);
        }
        Ok(Self { values, next: 0 })
    }

    /// Number of values handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl<T: Clone> ValueSource<T> for CyclingSource<T> {
    fn next_value(&mut self) -> T {
        let value = self.values[self.next % self.values.len()].clone();
        self.next += 1;
        value
    }
}
