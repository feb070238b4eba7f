use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::tape::Tape;
use approx::abs_diff_eq;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check parameters: {0}")]
    InvalidParameters(String),
}

// Map ScalarGradError to GradCheckError::ForwardPassError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Evaluates `func` on fresh leaves holding `inputs` and returns the root value.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: for<'t> Fn(&'t Tape, &[Scalar<'t>]) -> Result<Scalar<'t>, ScalarGradError>,
{
    let tape = Tape::new();
    let leaves: Vec<Scalar<'_>> = inputs.iter().map(|&x| tape.leaf(x)).collect();
    let output = func(&tape, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives a fresh tape and one leaf per entry of `inputs` and must
/// return the scalar to differentiate. For every input `x_i` the analytical
/// gradient from one backward pass is compared with
/// `(f(x_i + epsilon) - f(x_i - epsilon)) / (2 * epsilon)`; they must agree
/// within `tolerance`, either absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'t> Fn(&'t Tape, &[Scalar<'t>]) -> Result<Scalar<'t>, ScalarGradError>,
{
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidParameters(format!(
            "epsilon must be positive and finite, got {}",
            epsilon
        )));
    }
    if !(tolerance >= 0.0 && tolerance.is_finite()) {
        return Err(GradCheckError::InvalidParameters(format!(
            "tolerance must be non-negative and finite, got {}",
            tolerance
        )));
    }

    // --- 1. Analytical gradients from a single backward pass ---
    let analytical_grads: Vec<f64> = {
        let tape = Tape::new();
        let leaves: Vec<Scalar<'_>> = inputs.iter().map(|&x| tape.leaf(x)).collect();
        let output = func(&tape, &leaves).map_err(GradCheckError::ForwardPassError)?;
        output
            .backward()
            .map_err(GradCheckError::BackwardPassError)?;
        leaves.iter().map(|leaf| leaf.grad()).collect()
    };

    // --- 2. Numerical gradient per input ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut perturbed = inputs.to_vec();
        perturbed[i] = inputs[i] + epsilon;
        let loss_plus = evaluate(&func, &perturbed)?;
        perturbed[i] = inputs[i] - epsilon;
        let loss_minus = evaluate(&func, &perturbed)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        // --- 3. Compare ---
        let close = abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{add_op, mul_op, tanh_op};

    #[test]
    fn test_check_grad_composite_expression() {
        // f(a, b, c) = tanh(a * b + c)
        let result = check_grad(
            |_, x| Ok(tanh_op(add_op(mul_op(x[0], x[1])?, x[2])?)),
            &[0.4, -1.1, 0.3],
            1e-6,
            1e-6,
        );
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // f(x) = x + 3x, where the 3x term is read as a plain f64 and never
        // reaches the graph: analytical grad 1, numerical grad 4.
        let result = check_grad(
            |tape, x| {
                let hidden = tape.leaf(x[0].value() * 3.0);
                add_op(x[0], hidden)
            },
            &[1.0],
            1e-6,
            1e-6,
        );
        match result {
            Err(GradCheckError::GradientMismatch {
                analytical_grad,
                numerical_grad,
                ..
            }) => {
                approx::assert_relative_eq!(analytical_grad, 1.0);
                approx::assert_relative_eq!(numerical_grad, 4.0, epsilon = 1e-6);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_rejects_bad_epsilon() {
        let result = check_grad(|_, x| Ok(x[0]), &[1.0], 0.0, 1e-6);
        assert!(matches!(result, Err(GradCheckError::InvalidParameters(_))));
    }

    #[test]
    fn test_check_grad_propagates_forward_error() {
        let result = check_grad(
            |_, x| crate::ops::pow_op(x[0], x[0]),
            &[2.0],
            1e-6,
            1e-6,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(
                ScalarGradError::UnsupportedOperand { .. }
            ))
        ));
    }
}
