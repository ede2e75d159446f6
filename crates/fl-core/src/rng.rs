//! Deterministic random source handed to forces.
//!
//! The simulation itself is deterministic: node seeding uses fixed irrational
//! angles, not randomness.  Forces that need to break symmetry (two nodes at
//! the same spot, say) draw from a `SimRng` passed to them on bind, so a run
//! is reproducible from its seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Magnitude of the offset returned by [`SimRng::jiggle`].
const JIGGLE_SCALE: f64 = 1e-6;

/// Simulation-level RNG.
///
/// Used only from the single thread that owns the simulation.  Forces that
/// keep randomness across ticks should derive their own stream with
/// [`child`][Self::child] when they are bound.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.  Deterministic
    /// given this rng's state and `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// A tiny non-zero offset in `(-5e-7, 5e-7)` for separating coincident
    /// nodes.
    pub fn jiggle(&mut self) -> f64 {
        loop {
            let j = (self.random() - 0.5) * JIGGLE_SCALE;
            if j != 0.0 {
                return j;
            }
        }
    }
}
