//! The normal (Gaussian) distribution.
//!
//! [`NormalDistribution`] evaluates the density and the cumulative
//! distribution of a Gaussian with given mean and standard deviation.
//! The cumulative distribution goes through the [`erf`] approximation,
//! except in the far tails where it saturates to exactly 0 or 1.

mod erf;

use anyhow::{ensure, Result};
use once_cell::sync::Lazy;
use std::f64::consts::{PI, SQRT_2};
use std::fmt::Display;

pub use erf::erf;

/// Beyond this many standard deviations from the mean the CDF is
/// indistinguishable from 0 or 1 at double precision.
pub const MAX_STANDARD_DEVIATIONS: f64 = 8.0;

/// The standard normal distribution, with mean 0 and standard deviation 1.
pub static STANDARD_NORMAL: Lazy<NormalDistribution> =
    Lazy::new(|| NormalDistribution::new(0.0, 1.0));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDistribution {
    mean: f64,
    stddev: f64,
    /// `stddev * sqrt(2π)`, the denominator of the density
    normalization: f64,
    /// `2 * stddev²`, the denominator of the exponent of the density
    twice_variance: f64,
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl NormalDistribution {
    /// Builds the distribution without checking its parameters.
    ///
    /// A standard deviation that is zero, negative, or not finite gives
    /// an instance whose `pdf` and `cdf` return meaningless values
    /// (NaN, infinities, or negative densities). Use [`Self::try_new`]
    /// to reject such parameters.
    pub fn new(mean: f64, stddev: f64) -> Self {
        let normalization = stddev * (2.0 * PI).sqrt();
        let twice_variance = if stddev == 1.0 {
            2.0
        } else {
            2.0 * stddev * stddev
        };
        log::trace!("new normal distribution mean={} stddev={}", mean, stddev);
        Self {
            mean,
            stddev,
            normalization,
            twice_variance,
        }
    }

    /// Builds the distribution, failing if the mean is not finite or
    /// if the standard deviation is not a finite positive number.
    pub fn try_new(mean: f64, stddev: f64) -> Result<Self> {
        if let Err(e) = Self::check_parameters(mean, stddev) {
            log::debug!("rejected normal distribution parameters: {}", e);
            return Err(e);
        }
        Ok(Self::new(mean, stddev))
    }

    fn check_parameters(mean: f64, stddev: f64) -> Result<()> {
        ensure!(mean.is_finite(), "the mean must be finite, got {}", mean);
        ensure!(
            stddev.is_finite() && stddev > 0.0,
            "the standard deviation must be finite and positive, got {}",
            stddev
        );
        Ok(())
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stddev
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let exponent = if self.mean == 0.0 {
            -(x * x) / self.twice_variance
        } else {
            let d = x - self.mean;
            -(d * d) / self.twice_variance
        };
        exponent.exp() / self.normalization
    }

    /// Probability of drawing a value smaller than or equal to `x`.
    ///
    /// More than [`MAX_STANDARD_DEVIATIONS`] away from the mean this is
    /// exactly `0.0` (left tail) or exactly `1.0` (right tail). Elsewhere
    /// it inherits the error of [`erf`], and is not clamped.
    pub fn cdf(&self, x: f64) -> f64 {
        let distance = x - self.mean;
        if distance.abs() > MAX_STANDARD_DEVIATIONS * self.stddev {
            log::trace!("cdf({}) saturated, {} from the mean", x, distance);
            return if x < self.mean { 0.0 } else { 1.0 };
        }
        0.5 * (1.0 + erf(distance / (self.stddev * SQRT_2)))
    }
}

/// Formats as `normdist {mean: 0.000000, stddev: 1.000000}`. Infinite
/// parameters print as `inf` and `-inf`.
impl Display for NormalDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "normdist {{mean: {:.6}, stddev: {:.6}}}",
            self.mean, self.stddev
        )
    }
}
