//! Seeded pseudo-random number generation for fabricated telemetry.
//!
//! A linear congruential generator with a deliberately small modulus.
//! Every fabricated view in this crate is a pure function of (roster,
//! seed), so the only property that matters here is reproducibility:
//! two generators with the same seed and the same call sequence must
//! produce bit-identical streams. The period is short and the
//! distribution mediocre -- fine for illustrative telemetry, unusable
//! for anything statistical or security-related.

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// A reseedable LCG yielding `f64` values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Restart the stream from `seed`, discarding all prior state.
    ///
    /// Fabrication passes reseed once at entry so that interleaved
    /// passes never leak draws into each other.
    pub fn reseed(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Advance the generator and return a value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT))
            % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Advance the generator and return a value in `[min, max)`.
    pub fn between(&mut self, min: f64, max: f64) -> f64 {
        self.next() * (max - min) + min
    }
}
