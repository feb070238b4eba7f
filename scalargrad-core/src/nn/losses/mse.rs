// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::ops::{add_op, mul_op, pow_op, sub_op};
use crate::scalar::Scalar;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarGradError::ConfigurationError(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between predictions and constant targets.
///
/// The result is a single node, so one backward pass from it reaches every
/// prediction and, through them, every parameter.
#[derive(Debug, Clone, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `sum((p - t)^2)`, divided by the number of pairs for [`Reduction::Mean`].
    ///
    /// # Errors
    /// * `DimensionMismatch` if the slices differ in length.
    /// * `EmptyInput` if there are no predictions.
    pub fn calculate<'t>(
        &self,
        predictions: &[Scalar<'t>],
        targets: &[f64],
    ) -> Result<Scalar<'t>, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }

        let mut terms = predictions
            .iter()
            .zip(targets)
            .map(|(&p, &t)| pow_op(sub_op(p, t)?, 2.0));
        let mut total = match terms.next() {
            Some(first) => first?,
            None => return Err(ScalarGradError::EmptyInput("MseLoss calculate".to_string())),
        };
        for term in terms {
            total = add_op(total, term?)?;
        }

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => mul_op(total, 1.0 / predictions.len() as f64),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
