//! Shared pseudo-random value source
//!
//! One generator is seeded once and shared by every handler, guarded by a
//! mutex that is held only for the duration of a single draw.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, OnceLock};

/// Thread-safe uniform integer generator
pub struct SharedRng {
    rng: Mutex<StdRng>,
}

impl SharedRng {
    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a generator with a fixed seed for reproducible sequences
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a generator from an optional seed (entropy when `None`)
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw a uniform integer from `[min, max)`
    ///
    /// Returns `None` when the interval is empty (`max <= min`).
    pub fn random_in(&self, min: i32, max: i32) -> Option<i32> {
        if max <= min {
            return None;
        }
        Some(self.rng.lock().random_range(min..max))
    }
}

static GLOBAL_RNG: OnceLock<Arc<SharedRng>> = OnceLock::new();

/// Get the process-wide generator, seeding it from entropy on first use
pub fn global_rng() -> Arc<SharedRng> {
    Arc::clone(GLOBAL_RNG.get_or_init(|| Arc::new(SharedRng::from_entropy())))
}
