//! Initial values for parameters.
//!
//! The functions only draw numbers; layers turn them into [`Parameter`]s
//! (see [`crate::nn::layers::Neuron::new`]).
//!
//! [`Parameter`]: crate::nn::Parameter

use crate::error::ScalarGradError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Draws `n` values uniformly from `[low, high)`.
///
/// # Errors
/// `ConfigurationError` if the bounds are not finite or `low >= high`.
pub fn uniform<R: Rng + ?Sized>(
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ScalarGradError> {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return Err(ScalarGradError::ConfigurationError(format!(
            "uniform init requires finite bounds with low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

/// Draws `n` values from `N(mean, std^2)`.
///
/// # Errors
/// `ConfigurationError` if `mean` is not finite or `std` is negative or not finite.
pub fn normal<R: Rng + ?Sized>(
    n: usize,
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ScalarGradError> {
    if !mean.is_finite() || !std.is_finite() || std < 0.0 {
        return Err(ScalarGradError::ConfigurationError(format!(
            "normal init requires finite mean and std >= 0, got mean {} and std {}",
            mean, std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        ScalarGradError::ConfigurationError(format!("normal init: {} (std {})", e, std))
    })?;
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
