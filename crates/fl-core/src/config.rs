//! Cooling schedule and damping configuration.
//!
//! # Cooling
//!
//! Each tick relaxes `alpha` toward `alpha_target`:
//!
//!   alpha += (alpha_target - alpha) * alpha_decay
//!
//! The default `alpha_decay = 1 - alpha_min^(1/300)` takes alpha from 1 to
//! `alpha_min` in 300 ticks when `alpha_target` is 0.
//!
//! # Damping convention
//!
//! `velocity_decay` here is the *retained* fraction of velocity per tick
//! (default 0.6).  The simulation's public accessor exposes its complement,
//! the damped fraction (default 0.4).

use crate::{CoreError, CoreResult, Dimensions};

/// Ticks the default decay takes to cool from 1 to `alpha_min`.
pub const DEFAULT_COOLING_TICKS: f64 = 300.0;

pub const DEFAULT_ALPHA_MIN: f64 = 0.001;

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON/TOML file by the
/// application crate (with the `serde` feature) and handed to the
/// simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Starting temperature.  Default: 1.
    pub alpha: f64,

    /// The drive loop stops once alpha falls below this.  Default: 0.001.
    pub alpha_min: f64,

    /// Fraction of the gap to `alpha_target` closed each tick.
    pub alpha_decay: f64,

    /// Resting temperature.  Default: 0.
    pub alpha_target: f64,

    /// Fraction of velocity *retained* per tick.  Default: 0.6.
    pub velocity_decay: f64,

    /// Active axis count.  Default: 2.
    pub dimensions: Dimensions,

    /// Seed for the random source handed to forces.  The same seed and
    /// input order always reproduce the same layout.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            alpha:          1.0,
            alpha_min:      DEFAULT_ALPHA_MIN,
            alpha_decay:    default_alpha_decay(DEFAULT_ALPHA_MIN),
            alpha_target:   0.0,
            velocity_decay: 0.6,
            dimensions:     Dimensions::default(),
            seed:           0,
        }
    }
}

/// `1 - alpha_min^(1/300)`.
#[inline]
pub fn default_alpha_decay(alpha_min: f64) -> f64 {
    1.0 - alpha_min.powf(1.0 / DEFAULT_COOLING_TICKS)
}

impl SimConfig {
    /// Reject values that can never produce a meaningful run.
    ///
    /// Every parameter must be finite, and both decay rates must lie in
    /// `[0, 1]`.
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("alpha", self.alpha),
            ("alpha_min", self.alpha_min),
            ("alpha_decay", self.alpha_decay),
            ("alpha_target", self.alpha_target),
            ("velocity_decay", self.velocity_decay),
        ] {
            if !value.is_finite() {
                return Err(CoreError::NotFinite { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.alpha_decay) {
            return Err(CoreError::Config(format!(
                "alpha_decay must be in [0, 1], got {}",
                self.alpha_decay
            )));
        }
        if !(0.0..=1.0).contains(&self.velocity_decay) {
            return Err(CoreError::Config(format!(
                "velocity_decay must be in [0, 1], got {}",
                self.velocity_decay
            )));
        }
        Ok(())
    }

    /// Damped fraction of velocity per tick (`1 - velocity_decay`).
    #[inline]
    pub fn damping(&self) -> f64 {
        1.0 - self.velocity_decay
    }
}
