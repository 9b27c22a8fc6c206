//! Die sources for deterministic roll generation.
//!
//! Every roll the engine makes (advantage, result, double-play contest, steal)
//! is drawn from a [`DiceSource`]. Seeded and scripted sources make games
//! reproducible: the same seed or script always yields the same game.

use std::collections::VecDeque;

/// Produces die rolls on demand.
pub trait DiceSource {
    /// Roll a die with `sides` faces (1-`sides` inclusive).
    fn roll(&mut self, sides: u32) -> u32;

    /// Roll a d20 (1-20 inclusive).
    fn roll_d20(&mut self) -> u32 {
        self.roll(20)
    }
}

/// Any `FnMut(sides) -> roll` can be injected as a die source.
///
/// Values are clamped into `[1, sides]`.
impl<F> DiceSource for F
where
    F: FnMut(u32) -> u32,
{
    fn roll(&mut self, sides: u32) -> u32 {
        self(sides).clamp(1, sides.max(1))
    }
}

/// Seeded PCG die stream (Permuted Congruential Generator, XSH-RR variant).
///
/// 64-bit LCG state with a 32-bit permuted output. Same seed, same rolls.
#[derive(Clone, Copy, Debug)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream from `seed`.
    ///
    /// The seed is avalanched first so that nearby seeds diverge immediately.
    pub fn new(seed: u64) -> Self {
        let mut hash = seed ^ 0x9e3779b97f4a7c15;
        hash ^= hash >> 33;
        hash = hash.wrapping_mul(0xff51afd7ed558ccd);
        hash ^= hash >> 33;
        Self { state: hash }
    }

    /// Advance the LCG state: `state' = state * multiplier + increment`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generate the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl DiceSource for PcgDice {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides <= 1 {
            return 1;
        }
        (self.next_u32() % sides) + 1
    }
}

/// Replays a fixed sequence of rolls.
///
/// Used by tests and replays. Once the script runs dry every further roll
/// returns `fallback` and a warning is traced.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedDice {
    pub const DEFAULT_FALLBACK: u32 = 1;

    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.rolls.is_empty()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let value = match self.rolls.pop_front() {
            Some(value) => value,
            None => {
                tracing::warn!(fallback = self.fallback, "scripted dice exhausted");
                self.fallback
            }
        };
        value.clamp(1, sides.max(1))
    }
}
