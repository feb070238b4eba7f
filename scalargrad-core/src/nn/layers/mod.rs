// src/nn/layers/mod.rs
// Layers built from scalar neurons.

pub mod dense;
pub mod neuron;

pub use dense::Dense;
pub use neuron::Neuron;

use crate::scalar::Scalar;
use crate::error::ScalarGradError;

/// Non-linearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    /// No non-linearity, e.g. for a regression output.
    Identity,
}

impl Activation {
    pub fn apply<'t>(self, x: Scalar<'t>) -> Scalar<'t> {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Identity => x,
        }
    }

    /// Parses `"tanh"` or `"identity"` (also `"linear"`), case-insensitively.
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "identity" | "linear" => Ok(Activation::Identity),
            _ => Err(ScalarGradError::ConfigurationError(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
