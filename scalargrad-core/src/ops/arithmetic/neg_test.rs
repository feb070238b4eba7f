use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::ScalarGradError;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_neg_forward_backward() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(2.5);
    let b = neg_op(a);
    assert_relative_eq!(b.value(), -2.5);
    assert_eq!(b.op_tag(), "*");

    b.backward()?;
    assert_relative_eq!(a.grad(), -1.0);
    Ok(())
}

#[test]
fn test_double_negation() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(-4.0);
    let b = neg_op(neg_op(a));
    assert_relative_eq!(b.value(), -4.0);
    b.backward()?;
    assert_relative_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_neg_grad_check() {
    let result = check_grad(|_, inputs| Ok(neg_op(inputs[0])), &[0.9], 1e-6, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
}
