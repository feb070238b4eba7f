use crate::error::ScalarGradError;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::{check_same_tape, Operand};
use crate::scalar::Scalar;

/// Subtraction, defined as `a + (-b)`.
///
/// A node `b` is negated first (one extra node); a constant `k` is folded into
/// `a + (-k)`.
///
/// # Errors
/// Returns `UnsupportedOperand` if `b` is a node living on another tape. The
/// check happens before anything is pushed.
pub fn sub_op<'t>(
    a: Scalar<'t>,
    b: impl Into<Operand<'t>>,
) -> Result<Scalar<'t>, ScalarGradError> {
    match b.into() {
        Operand::Node(b) => {
            check_same_tape("sub", &a, &b)?;
            add_op(a, neg_op(b))
        }
        Operand::Constant(k) => add_op(a, -k),
    }
}

/// Reflected subtraction `k - a`, defined as `(-a) + k`.
pub fn rsub_op(k: f64, a: Scalar<'_>) -> Result<Scalar<'_>, ScalarGradError> {
    add_op(neg_op(a), k)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
