use crate::error::ScalarGradError;
use crate::nn::Parameter;
use crate::scalar::Scalar;
use crate::tape::{NodeId, Tape};

/// The base trait for all neural network modules (neurons, layers, models).
///
/// A module owns [`Parameter`]s living on a tape and maps a slice of input
/// scalars to a vector of output scalars, recording the computation on the
/// same tape.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs` does not have the expected length, plus
    /// whatever the underlying operations return (e.g. `NodeNotFound` if the
    /// tape was rewound past the parameters).
    fn forward<'t>(
        &self,
        tape: &'t Tape,
        inputs: &[Scalar<'t>],
    ) -> Result<Vec<Scalar<'t>>, ScalarGradError>;

    /// All learnable parameters, including those of sub-modules, in a fixed order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Parameters with hierarchical names such as `"layer1.neuron0.w2"`.
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Node ids of [`Module::parameters`], e.g. to build an optimizer.
    fn parameter_ids(&self) -> Vec<NodeId> {
        self.parameters().iter().map(|p| p.id()).collect()
    }
}

/// Fails with `DimensionMismatch` unless `inputs` has exactly `expected` entries.
pub(crate) fn check_input_len(
    operation: &str,
    expected: usize,
    inputs: &[Scalar<'_>],
) -> Result<(), ScalarGradError> {
    if inputs.len() != expected {
        return Err(ScalarGradError::DimensionMismatch {
            expected,
            actual: inputs.len(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
