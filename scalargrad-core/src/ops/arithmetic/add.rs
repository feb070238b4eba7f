// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::{check_same_tape, Operand};
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Adds a node or a constant to `a`.
///
/// With a node operand both inputs receive the upstream gradient unchanged;
/// with a constant only `a` does.
///
/// # Errors
/// Returns `UnsupportedOperand` if `b` is a node living on another tape.
pub fn add_op<'t>(
    a: Scalar<'t>,
    b: impl Into<Operand<'t>>,
) -> Result<Scalar<'t>, ScalarGradError> {
    match b.into() {
        Operand::Node(b) => {
            check_same_tape("add", &a, &b)?;
            Ok(a.tape.push(a.value() + b.value(), Op::Add(a.id, b.id)))
        }
        Operand::Constant(k) => Ok(a.tape.push(a.value() + k, Op::AddScalar(a.id, k))),
    }
}

// --- Local Derivatives ---

/// d(a + b)/da and d(a + b)/db.
pub(crate) fn add_backward() -> (f64, f64) {
    (1.0, 1.0)
}

/// d(a + k)/da.
pub(crate) fn add_scalar_backward() -> f64 {
    1.0
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
