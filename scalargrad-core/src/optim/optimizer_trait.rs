use crate::error::ScalarGradError;
use crate::tape::Tape;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers hold the [`NodeId`](crate::tape::NodeId)s of the parameters they
/// manage and update the corresponding nodes of a tape from their accumulated
/// gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Errors
    /// `NodeNotFound` if a managed parameter is no longer on `tape`; in that
    /// case no parameter is updated.
    fn step(&mut self, tape: &Tape) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Gradients accumulate, so this must run before every backward pass that
    /// reuses the parameters.
    fn zero_grad(&mut self, tape: &Tape) -> Result<(), ScalarGradError>;

    fn learning_rate(&self) -> f64;

    /// # Errors
    /// `ConfigurationError` if `lr` is not a positive finite number.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError>;
}

/// Fails with `ConfigurationError` unless `lr` is positive and finite.
pub(crate) fn validate_learning_rate(lr: f64) -> Result<(), ScalarGradError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(ScalarGradError::ConfigurationError(format!(
            "learning rate must be positive and finite, got {}",
            lr
        )))
    }
}
