use crate::autograd::backward_op::Op;
use crate::scalar::Scalar;

/// Negation, defined as `a * -1`.
///
/// The result is an ordinary constant multiplication node and inherits the
/// rule of [`mul_op`](crate::ops::arithmetic::mul::mul_op).
pub fn neg_op(a: Scalar<'_>) -> Scalar<'_> {
    a.tape.push(a.value() * -1.0, Op::MulScalar(a.id, -1.0))
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
