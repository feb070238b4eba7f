use super::*;
use crate::autograd::backward_op::Op;

/// Hand-built arena: node `i` is produced by `ops[i]`.
fn arena(ops: &[Op]) -> Vec<ScalarData> {
    ops.iter().map(|op| ScalarData::new(0.0, *op, 0)).collect()
}

#[test]
fn test_topological_sort_operands_first() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(1.0);
    let b = tape.leaf(2.0);
    let c = a * b;
    let d = c.tanh();
    let e = d + c;

    let order = topological_sort(&tape.nodes(), e.id().index())?;
    assert_eq!(order.len(), 5);
    assert_eq!(order.last(), Some(&e.id().index()));
    let nodes = tape.nodes();
    for (pos, &index) in order.iter().enumerate() {
        for input in nodes[index].op.inputs() {
            let input_pos = order.iter().position(|&i| i == input.index());
            assert!(
                matches!(input_pos, Some(p) if p < pos),
                "operand n{} must precede n{}",
                input.index(),
                index
            );
        }
    }
    Ok(())
}

#[test]
fn test_topological_sort_visits_shared_node_once() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.leaf(1.0);
    let y = a * a + a;
    let order = topological_sort(&tape.nodes(), y.id().index())?;
    assert_eq!(order, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn test_topological_sort_detects_cycle() {
    // Borrow two ids for the operand references.
    let tape = Tape::new();
    let n0 = tape.leaf(0.0).id();
    let n1 = tape.leaf(0.0).id();
    // n0 = tanh(n1), n1 = n0 * 2: a two-node cycle.
    let nodes = arena(&[Op::Tanh(n1), Op::MulScalar(n0, 2.0)]);
    let result = topological_sort(&nodes, 1);
    assert!(matches!(result, Err(ScalarGradError::CyclicGraph { .. })));
}

#[test]
fn test_topological_sort_root_out_of_range() {
    let result = topological_sort(&[], 3);
    assert!(matches!(
        result,
        Err(ScalarGradError::NodeNotFound { index: 3, .. })
    ));
}

#[test]
fn test_trace_graph_dedups_edges() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.named_leaf("a", 3.0);
    let b = a + a;
    let trace = trace_graph(&b)?;
    assert_eq!(trace.nodes, vec![a.id(), b.id()]);
    assert_eq!(trace.edges, vec![(a.id(), b.id())]);
    Ok(())
}

#[test]
fn test_trace_graph_keeps_edges_to_distinct_consumers() -> Result<(), ScalarGradError> {
    // a feeds both c and d; each consumer gets its own edge.
    let tape = Tape::new();
    let a = tape.leaf(1.5);
    let c = a * a;
    let d = a + c;
    let trace = trace_graph(&d)?;
    assert_eq!(
        trace.edges,
        vec![(a.id(), c.id()), (a.id(), d.id()), (c.id(), d.id())]
    );
    Ok(())
}

#[test]
fn test_trace_graph_neuron() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let x = tape.named_leaf("x", 2.0);
    let w = tape.named_leaf("w", -3.0);
    let b = tape.named_leaf("b", 1.0);
    let o = (x * w + b).tanh();
    let trace = trace_graph(&o)?;
    assert_eq!(trace.nodes.len(), 6);
    assert_eq!(trace.edges.len(), 5);
    assert_eq!(trace.nodes.last(), Some(&o.id()));
    Ok(())
}

#[test]
fn test_to_dot_renders_records_and_ops() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.named_leaf("a", 2.0);
    let y = (a * 3.0).with_label("y");
    let trace = trace_graph(&y)?;
    let dot = trace.to_dot(&tape)?;
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("n0 [label=\"{ a | value 2.0000 | grad 0.0000 }\", shape=record];"));
    assert!(dot.contains("n1_op [label=\"*\"];"));
    assert!(dot.contains("n1_op -> n1;"));
    assert!(dot.contains("n0 -> n1_op;"));
    assert!(dot.trim_end().ends_with('}'));

    let mut buffer = Vec::new();
    trace
        .write_dot(&tape, &mut buffer)
        .map_err(|e| ScalarGradError::ConfigurationError(e.to_string()))?;
    assert_eq!(String::from_utf8_lossy(&buffer), dot);
    Ok(())
}

#[test]
fn test_to_dot_escapes_record_labels() -> Result<(), ScalarGradError> {
    let tape = Tape::new();
    let a = tape.named_leaf("w{0}|\"x\"<1>", 1.0);
    let dot = trace_graph(&a)?.to_dot(&tape)?;
    assert!(dot.contains(
        "n0 [label=\"{ w\\{0\\}\\|\\\"x\\\"\\<1\\> | value 1.0000 | grad 0.0000 }\", shape=record];"
    ));
    Ok(())
}

#[test]
fn test_to_dot_rejects_stale_trace() -> Result<(), ScalarGradError> {
    let mut tape = Tape::new();
    let cp = tape.checkpoint();
    let trace = {
        let a = tape.leaf(1.0);
        trace_graph(&a.exp())?
    };
    tape.rewind(cp)?;
    assert!(matches!(
        trace.to_dot(&tape),
        Err(ScalarGradError::NodeNotFound { .. })
    ));
    assert!(trace.write_dot(&tape, &mut Vec::new()).is_err());
    Ok(())
}
