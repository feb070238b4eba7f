use crate::autograd::backward_op::Op;
use crate::scalar::Scalar;

/// Hyperbolic tangent.
///
/// Computed with [`f64::tanh`], which equals `(e^(2a) - 1) / (e^(2a) + 1)` but
/// does not overflow to NaN for large `|a|`.
pub fn tanh_op(a: Scalar<'_>) -> Scalar<'_> {
    a.tape.push(a.value().tanh(), Op::Tanh(a.id))
}

/// d(tanh a)/da = 1 - tanh(a)^2, expressed through the output value.
pub(crate) fn tanh_backward(out_value: f64) -> f64 {
    1.0 - out_value * out_value
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
