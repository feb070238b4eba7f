use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::Operand;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Raises `a` to a constant power.
///
/// # Errors
/// Returns `UnsupportedOperand` if the exponent is a node or is not finite.
pub fn pow_op<'t>(
    a: Scalar<'t>,
    exponent: impl Into<Operand<'t>>,
) -> Result<Scalar<'t>, ScalarGradError> {
    let p = match exponent.into() {
        Operand::Constant(p) => p,
        Operand::Node(_) => {
            return Err(ScalarGradError::unsupported(
                "pow",
                "only numeric constant exponents are supported, got a node",
            ))
        }
    };
    if !p.is_finite() {
        return Err(ScalarGradError::unsupported(
            "pow",
            format!("exponent must be a finite number, got {}", p),
        ));
    }
    Ok(a.tape.push(a.value().powf(p), Op::Pow(a.id, p)))
}

// --- Local Derivative ---

/// d(a^p)/da = p * a^(p-1).
pub(crate) fn pow_backward(a_value: f64, p: f64) -> f64 {
    p * a_value.powf(p - 1.0)
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
