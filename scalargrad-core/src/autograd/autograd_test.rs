use super::*;
use crate::autograd::backward_op::Op;
use crate::tape::Tape;
use approx::assert_relative_eq;

#[test]
fn test_backward_single_neuron() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let x1 = tape.named_leaf("x1", 2.0);
    let x2 = tape.named_leaf("x2", 0.0);
    let w1 = tape.named_leaf("w1", -3.0);
    let w2 = tape.named_leaf("w2", 1.0);
    let b = tape.named_leaf("b", 6.8813735870195432);

    let n = x1 * w1 + x2 * w2 + b;
    let o = n.tanh();
    assert_relative_eq!(o.value(), 0.7071066904050358, epsilon = 1e-6);

    run_backward(&o)?;
    assert_relative_eq!(o.grad(), 1.0);
    assert_relative_eq!(x1.grad(), -1.5000003851533106, epsilon = 1e-6);
    assert_relative_eq!(w1.grad(), 1.0000002567688737, epsilon = 1e-6);
    assert_relative_eq!(x2.grad(), 0.5000001283844369, epsilon = 1e-6);
    assert_relative_eq!(w2.grad(), 0.0);
    assert_relative_eq!(b.grad(), n.grad());
    Ok(())
}

#[test]
fn test_backward_shared_operand_accumulates() -> Result<(), ScalarGradError> {
    // y = a*b + a  =>  dy/da = b + 1, dy/db = a
    let tape = Tape::new();
    let a = tape.leaf(-2.0);
    let b = tape.leaf(3.0);
    let y = a * b + a;
    y.backward()?;
    assert_relative_eq!(a.grad(), 4.0);
    assert_relative_eq!(b.grad(), -2.0);
    Ok(())
}

#[test]
fn test_backward_diamond_visits_each_node_once() -> Result<(), ScalarGradError> {
    // c = a * a is used twice; its gradient must be propagated to `a` once,
    // after both consumers contributed.
    let tape = Tape::new();
    let a = tape.leaf(3.0);
    let c = a * a;
    let y = c.tanh() + c * 2.0;
    y.backward()?;
    let dc = 1.0 - 9.0f64.tanh().powi(2) + 2.0;
    assert_relative_eq!(c.grad(), dc, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), dc * 6.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_chain_rule() -> Result<(), ScalarGradError> {
    // y = exp(tanh(x) * 2)
    let tape = Tape::new();
    let x = tape.leaf(0.3);
    let y = (x.tanh() * 2.0).exp();
    y.backward()?;
    let t = 0.3f64.tanh();
    let expected = (2.0 * t).exp() * 2.0 * (1.0 - t * t);
    assert_relative_eq!(x.grad(), expected, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_on_leaf_root() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(5.0);
    a.backward()?;
    assert_relative_eq!(a.grad(), 1.0);
    // The root seed is assigned, not added.
    a.backward()?;
    assert_relative_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_repeated_backward_without_reset_doubles() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let x = tape.leaf(3.0);
    let y = x * x;
    y.backward()?;
    assert_relative_eq!(x.grad(), 6.0);
    y.backward()?;
    assert_relative_eq!(x.grad(), 12.0);

    y.zero_grad_graph()?;
    y.backward()?;
    assert_relative_eq!(x.grad(), 6.0);
    Ok(())
}

#[test]
fn test_backward_leaves_unrelated_nodes_alone() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(1.0);
    let b = tape.leaf(2.0);
    let _unused = b * 4.0;
    let y = a * 3.0;
    y.backward()?;
    assert_relative_eq!(a.grad(), 3.0);
    assert_relative_eq!(b.grad(), 0.0);
    Ok(())
}

#[test]
fn test_backward_cycle_leaves_gradients_untouched() {
    let tape = Tape::new();
    let a = tape.leaf(1.0);
    let b = a * 2.0;
    // Rewire `a` to depend on `b`; only possible from inside the crate.
    tape.nodes_mut()[a.id().index()].op = Op::Tanh(b.id());
    b.set_grad(0.25);

    let result = b.backward();
    assert!(matches!(result, Err(ScalarGradError::CyclicGraph { .. })));
    assert_relative_eq!(b.grad(), 0.25);
    assert_relative_eq!(a.grad(), 0.0);
}

#[test]
fn test_constants_receive_no_node() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(2.0);
    let y = (a + 1.0) * 4.0 - 0.5;
    // a, a+1, (a+1)*4, -0.5 folded into an add-constant node.
    assert_eq!(tape.len(), 4);
    y.backward()?;
    assert_relative_eq!(a.grad(), 4.0);
    Ok(())
}
