//! Randomness for jittered marks.
//!
//! The strip plot is the only recipe whose output is not a pure function of
//! its inputs. Its random horizontal offsets come from a [`JitterSource`]
//! so callers (and tests) can fix the sequence.

use crate::error::{Error, Result};

/// Seed used when a zero seed is supplied (xorshift has a zero fixed point).
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// A source of uniform values in `[0, 1)`.
pub trait JitterSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Deterministic PRNG (xorshift64).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift64 {
    state: u64,
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Xorshift64 {
    /// Create a generator from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: if seed == 0 { DEFAULT_SEED } else { seed } }
    }

    /// Create a generator seeded from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the OS source is unavailable.
    pub fn from_entropy() -> Result<Self> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(|e| Error::Entropy(e.to_string()))?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// Generate the next random u64.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl JitterSource for Xorshift64 {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fill an f32 mantissa exactly, so the result is < 1.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }
}
