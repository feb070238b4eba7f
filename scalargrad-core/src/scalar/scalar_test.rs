use crate::error::ScalarGradError;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_operator_expression_matches_ops() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(-3.0);
    let c = tape.leaf(10.0);
    let e = a * b;
    let d = e + c;
    assert_relative_eq!(e.value(), -6.0);
    assert_relative_eq!(d.value(), 4.0);
    assert_eq!(d.operands(), vec![e, c]);

    d.backward()?;
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), 2.0);
    assert_relative_eq!(c.grad(), 1.0);
    Ok(())
}

#[test]
fn test_reflected_operators() {
    let tape = Tape::new();
    let a = tape.leaf(4.0);
    assert_relative_eq!((1.0 + a).value(), 5.0);
    assert_relative_eq!((3.0 * a).value(), 12.0);
    assert_relative_eq!((1.0 - a).value(), -3.0);
    assert_relative_eq!((2.0 / a).value(), 0.5);
    assert_relative_eq!((-a).value(), -4.0);
}

#[test]
fn test_reflected_sub_and_div_gradients() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(4.0);
    let y = (1.0 - a) + 2.0 / a;
    y.backward()?;
    // d/da (1 - a + 2/a) = -1 - 2/a^2
    assert_relative_eq!(a.grad(), -1.0 - 2.0 / 16.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_powi_exp_tanh_methods() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(3.0);
    assert_relative_eq!(a.pow(2.0)?.value(), 9.0);
    assert_relative_eq!(a.powi(-1).value(), 1.0 / 3.0);
    assert_relative_eq!(a.exp().value(), 3.0f64.exp());
    assert_relative_eq!(a.tanh().value(), 3.0f64.tanh());
    assert!(matches!(
        a.pow(a),
        Err(ScalarGradError::UnsupportedOperand { .. })
    ));
    Ok(())
}

#[test]
#[should_panic(expected = "Scalar addition failed")]
fn test_operator_panics_across_tapes() {
    let tape_a = Tape::new();
    let tape_b = Tape::new();
    let _ = tape_a.leaf(1.0) + tape_b.leaf(2.0);
}

#[test]
fn test_identity_is_not_value() {
    let tape = Tape::new();
    let a = tape.leaf(1.5);
    let b = tape.leaf(1.5);
    assert_ne!(a, b);
    assert_eq!(a, a);
    let copy = a;
    assert_eq!(copy, a);
}

#[test]
fn test_label_and_display() {
    let tape = Tape::new();
    let a = tape.named_leaf("x1", 2.0);
    let b = tape.leaf(1.0).with_label("w1");
    assert_eq!(a.label().as_deref(), Some("x1"));
    assert_eq!(b.label().as_deref(), Some("w1"));
    assert_eq!(format!("{}", a), "Scalar(value=2, grad=0)");
    let debug = format!("{:?}", a * b);
    assert!(debug.contains("op: \"*\""), "{}", debug);
}

#[test]
fn test_set_value_does_not_recompute_consumers() {
    let tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = a * 3.0;
    a.set_value(5.0);
    assert_relative_eq!(a.value(), 5.0);
    assert_relative_eq!(b.value(), 6.0);
    assert_relative_eq!((a * 3.0).value(), 15.0);
}

#[test]
fn test_zero_grad_methods() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(2.0);
    let b = tape.leaf(5.0);
    let y = a * b;
    y.backward()?;
    a.zero_grad();
    assert_relative_eq!(a.grad(), 0.0);
    assert_relative_eq!(b.grad(), 2.0);
    y.zero_grad_graph()?;
    assert_relative_eq!(b.grad(), 0.0);
    assert_relative_eq!(y.grad(), 0.0);
    Ok(())
}
