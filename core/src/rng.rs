//! Deterministic RNG for battle resolution
//!
//! Damage variance and opponent-policy choices draw from this trait rather
//! than an ambient random function, so the same seed always replays the
//! same battle.

use serde::{Deserialize, Serialize};

/// Trait for random number generation in battles
pub trait BattleRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a random number in range [0, max)
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Generate a uniform value in [0, 1)
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Generate a uniform value in [lo, hi)
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// Suitable for game logic where cryptographic security is not needed.
/// The same seed will always produce the same sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// The seed is combined into a u32, ensuring state is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    /// Create a new RNG from a u32 seed
    pub fn seed_from_u32(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
