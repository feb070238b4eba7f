//! # Scalar Operations Module (`ops`)
//!
//! The fixed registry of differentiable operations. Each operation lives in its
//! own file and provides:
//!
//! - an `xxx_op` function that computes the forward value and pushes a new node
//!   onto the tape of its first operand, recording the producing [`Op`](crate::autograd::backward_op::Op);
//! - the local-derivative rule(s) (`xxx_backward`) that the backward pass
//!   dispatches to when it reaches a node produced by this operation.
//!
//! Composite operations (`neg`, `sub`, `div`) are defined in terms of the
//! primitive ones and have no rule of their own.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exponential.
//! - [`activation`]: hyperbolic tangent.

use crate::error::ScalarGradError;
use crate::scalar::Scalar;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, rdiv_op, rsub_op, sub_op};
pub use math_elem::exp_op;

/// Right-hand side of a binary operation: another node or a plain constant.
///
/// Constants never become graph nodes and therefore never receive a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'t> {
    Node(Scalar<'t>),
    Constant(f64),
}

impl<'t> From<Scalar<'t>> for Operand<'t> {
    fn from(scalar: Scalar<'t>) -> Self {
        Operand::Node(scalar)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand<'_> {
    fn from(value: f32) -> Self {
        Operand::Constant(value as f64)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Constant(value as f64)
    }
}

/// Fails with `UnsupportedOperand` unless both handles live on the same tape.
pub(crate) fn check_same_tape(
    operation: &str,
    a: &Scalar<'_>,
    b: &Scalar<'_>,
) -> Result<(), ScalarGradError> {
    if std::ptr::eq(a.tape, b.tape) {
        Ok(())
    } else {
        Err(ScalarGradError::unsupported(
            operation,
            format!(
                "operands belong to different tapes ({} and {})",
                a.tape.id(),
                b.tape.id()
            ),
        ))
    }
}
