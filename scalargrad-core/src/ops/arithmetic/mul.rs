use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::{check_same_tape, Operand};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Multiplies `a` by a node or a constant.
///
/// # Errors
/// Returns `UnsupportedOperand` if `b` is a node living on another tape.
pub fn mul_op<'t>(
    a: Scalar<'t>,
    b: impl Into<Operand<'t>>,
) -> Result<Scalar<'t>, ScalarGradError> {
    match b.into() {
        Operand::Node(b) => {
            check_same_tape("mul", &a, &b)?;
            Ok(a.tape.push(a.value() * b.value(), Op::Mul(a.id, b.id)))
        }
        Operand::Constant(k) => Ok(a.tape.push(a.value() * k, Op::MulScalar(a.id, k))),
    }
}

// --- Local Derivatives ---

/// d(a * b)/da = b and d(a * b)/db = a.
pub(crate) fn mul_backward(a_value: f64, b_value: f64) -> (f64, f64) {
    (b_value, a_value)
}

/// d(a * k)/da = k.
pub(crate) fn mul_scalar_backward(k: f64) -> f64 {
    k
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
