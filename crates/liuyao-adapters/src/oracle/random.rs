//! Random coin oracle backed by a seedable RNG.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;

use liuyao_core::{
    application::ports::CoinOracle,
    domain::{CoinFace, CoinToss, MAX_CAST_NUMBER},
};

/// Fair three-coin oracle.
///
/// Each coin independently lands yin (weight 2) or yang (weight 3) with equal
/// probability.  Seeded construction exists so that a ceremony can be replayed
/// exactly, which the CLI exposes as `--seed`.
pub struct RandomOracle {
    rng: StdRng,
}

impl RandomOracle {
    /// Oracle seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Oracle with a fixed seed: the same seed always produces the same
    /// sequence of tosses.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one casting number in 100..=999, the range used when the querent
    /// has no numbers in mind.
    pub fn draw_number(&mut self) -> u32 {
        debug_assert!(MAX_CAST_NUMBER >= 999);
        self.rng.gen_range(100..=999)
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinOracle for RandomOracle {
    fn toss(&mut self) -> CoinToss {
        let faces = std::array::from_fn(|_| {
            if self.rng.gen_bool(0.5) {
                CoinFace::Yang
            } else {
                CoinFace::Yin
            }
        });
        let toss = CoinToss::new(faces);
        trace!(sum = toss.sum(), "coins tossed");
        toss
    }
}
