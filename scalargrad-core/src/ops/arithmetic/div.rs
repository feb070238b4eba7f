use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::{check_same_tape, Operand};
use crate::scalar::Scalar;

/// Division, defined as `a * b^-1`.
///
/// A constant divisor `k` is folded into `a * k^-1`. Division by zero follows
/// IEEE-754 and yields infinities or NaN rather than an error.
///
/// # Errors
/// Returns `UnsupportedOperand` if `b` is a node living on another tape. The
/// check happens before anything is pushed.
pub fn div_op<'t>(
    a: Scalar<'t>,
    b: impl Into<Operand<'t>>,
) -> Result<Scalar<'t>, ScalarGradError> {
    match b.into() {
        Operand::Node(b) => {
            check_same_tape("div", &a, &b)?;
            mul_op(a, pow_op(b, -1.0)?)
        }
        Operand::Constant(k) => mul_op(a, k.powf(-1.0)),
    }
}

/// Reflected division `k / a`, defined as `a^-1 * k`.
pub fn rdiv_op(k: f64, a: Scalar<'_>) -> Result<Scalar<'_>, ScalarGradError> {
    mul_op(pow_op(a, -1.0)?, k)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
