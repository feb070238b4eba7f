use crate::autograd::backward_op::Op;
use crate::scalar::Scalar;

/// Natural exponential `e^a`.
pub fn exp_op(a: Scalar<'_>) -> Scalar<'_> {
    a.tape.push(a.value().exp(), Op::Exp(a.id))
}

/// d(e^a)/da = e^a, i.e. the output value itself.
pub(crate) fn exp_backward(out_value: f64) -> f64 {
    out_value
}
