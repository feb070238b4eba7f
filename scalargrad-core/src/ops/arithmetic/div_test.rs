use super::*;
use crate::autograd::grad_check::check_grad;
use crate::error::ScalarGradError;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_div_nodes() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(3.0);
    let b = tape.leaf(4.0);
    let c = div_op(a, b)?;
    assert_relative_eq!(c.value(), 0.75);

    c.backward()?;
    // dc/da = 1/b, dc/db = -a/b^2
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -3.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_constant() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(3.0);
    let c = div_op(a, 2.0)?;
    assert_relative_eq!(c.value(), 1.5);
    assert_eq!(tape.len(), 2);
    c.backward()?;
    assert_relative_eq!(a.grad(), 0.5);
    Ok(())
}

#[test]
fn test_rdiv_constant_over_node() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(2.0);
    let c = rdiv_op(6.0, a)?;
    assert_relative_eq!(c.value(), 3.0);
    c.backward()?;
    // d(6/a)/da = -6/a^2
    assert_relative_eq!(a.grad(), -1.5);
    Ok(())
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(
        |_, inputs| div_op(inputs[0], inputs[1]),
        &[1.7, -0.6],
        1e-6,
        1e-6,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_div_by_zero_is_infinite() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(1.0);
    let c = div_op(a, 0.0)?;
    assert!(c.value().is_infinite());
    Ok(())
}
