use scalargrad_core::autograd::trace_graph;
use scalargrad_core::utils::testing::{check_grads_near, check_scalars_near};
use scalargrad_core::{run_backward, ScalarGradError, Tape};

mod common;

#[test]
fn test_single_neuron_values_and_gradients() -> Result<(), ScalarGradError> {
    common::init_logger();
    let tape = Tape::new();
    let x1 = tape.named_leaf("x1", 2.0);
    let x2 = tape.named_leaf("x2", 0.0);
    let w1 = tape.named_leaf("w1", -3.0);
    let w2 = tape.named_leaf("w2", 1.0);
    let b = tape.named_leaf("b", 6.8813735870195432);

    let x1w1 = (x1 * w1).with_label("x1*w1");
    let x2w2 = (x2 * w2).with_label("x2*w2");
    let n = (x1w1 + x2w2 + b).with_label("n");
    let o = n.tanh().with_label("o");
    check_scalars_near(&[n, o], &[0.8813735870195432, 0.7071066904050358], 1e-6);

    run_backward(&o)?;
    check_grads_near(
        &[x1, w1, x2, w2],
        &[
            -1.5000003851533106,
            1.0000002567688737,
            0.5000001283844369,
            0.0,
        ],
        1e-6,
    );
    check_grads_near(&[o, n, b, x1w1, x2w2], &[1.0, 0.5, 0.5, 0.5, 0.5], 1e-6);
    Ok(())
}

#[test]
fn test_single_neuron_with_exp_tanh_matches() -> Result<(), ScalarGradError> {
    // tanh written as (e^2n - 1) / (e^2n + 1) gives the same gradients.
    let tape = Tape::new();
    let x1 = tape.leaf(2.0);
    let x2 = tape.leaf(0.0);
    let w1 = tape.leaf(-3.0);
    let w2 = tape.leaf(1.0);
    let b = tape.leaf(6.8813735870195432);
    let n = x1 * w1 + x2 * w2 + b;
    let e = (n * 2.0).exp();
    let o = (e - 1.0) / (e + 1.0);
    check_scalars_near(&[o], &[0.7071066904050358], 1e-6);

    o.backward()?;
    check_grads_near(
        &[x1, w1, x2, w2],
        &[
            -1.5000003851533106,
            1.0000002567688737,
            0.5000001283844369,
            0.0,
        ],
        1e-6,
    );
    Ok(())
}

#[test]
fn test_single_neuron_graph_trace() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let x1 = tape.named_leaf("x1", 2.0);
    let x2 = tape.named_leaf("x2", 0.0);
    let w1 = tape.named_leaf("w1", -3.0);
    let w2 = tape.named_leaf("w2", 1.0);
    let b = tape.named_leaf("b", 6.8813735870195432);
    let o = (x1 * w1 + x2 * w2 + b).tanh();

    let trace = trace_graph(&o)?;
    // 5 leaves, 2 products, 2 sums, 1 tanh
    assert_eq!(trace.nodes.len(), 10);
    assert_eq!(trace.edges.len(), 9);
    let dot = trace.to_dot(&tape)?;
    assert!(dot.contains("tanh"));
    assert!(dot.contains("x1 | value 2.0000"));
    Ok(())
}
