//! Seeded pseudo-random stream for deck shuffling.
//!
//! Every client of a match must derive the identical card ordering from the
//! shared seed alone, so the generator is pinned to a fixed linear-congruential
//! recurrence rather than a library RNG. Any change to the constants, the
//! modulus, or the float mapping is a protocol-breaking change.

use chrono::Utc;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;

/// Deterministic linear-congruential generator:
/// `state' = (state * 1103515245 + 12345) mod 2^31`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the stream and returns the next value in `[0, 2^31)`.
    pub fn next_state(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            % LCG_MODULUS;
        self.state
    }

    /// Advances the stream and returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / LCG_MODULUS as f64
    }
}

/// Generates a fresh match seed.
///
/// The seed is a millisecond timestamp, chosen once by the match creator.
/// The contract only requires determinism per fixed seed, not collision
/// resistance across seeds.
pub fn new_seed() -> u64 {
    Utc::now().timestamp_millis() as u64
}
