//! Reverse-mode gradient engine.
//!
//! The graph is recorded implicitly by the operations in [`crate::ops`]; this
//! module orders it ([`graph::topological_sort`]) and walks it backwards,
//! dispatching on each node's [`Op`](backward_op::Op) to accumulate gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use graph::topological_sort;
use log::{debug, trace};

pub use backward_op::Op;
pub use graph::{trace_graph, GraphTrace};

/// Propagates gradients from `root` to every node it depends on.
///
/// 1. Orders the nodes reachable from `root` so that operands precede consumers.
/// 2. Sets `root.grad = 1.0`.
/// 3. Visits the order in reverse, adding `local_derivative * node.grad` into
///    each operand's gradient.
///
/// Gradients are accumulated, never overwritten (except the root seed). The
/// caller is responsible for zeroing them between independent passes that share
/// nodes, see [`crate::tape::Tape::zero_grad_graph`].
///
/// # Errors
/// Returns [`ScalarGradError::CyclicGraph`] if a cycle is detected; no gradient
/// is modified in that case.
pub fn run_backward(root: &Scalar<'_>) -> Result<(), ScalarGradError> {
    backward_from(&mut root.tape.nodes_mut(), root.id.index())
}

/// Backward pass over the raw arena, `root` being an index into `nodes`.
pub(crate) fn backward_from(nodes: &mut [ScalarData], root: usize) -> Result<(), ScalarGradError> {
    let order = topological_sort(nodes, root)?;
    debug!(
        "backward: {} reachable nodes from root n{}",
        order.len(),
        root
    );

    nodes[root].grad = 1.0;
    for &index in order.iter().rev() {
        let ScalarData {
            value, grad, op, ..
        } = nodes[index];
        if op.is_leaf() {
            continue;
        }
        // Collect first: the rule reads operand values while we write operand grads.
        let contributions: Vec<_> = op.local_gradients(nodes, value).collect();
        for (input, local) in contributions {
            trace!("backward: n{} -> {} += {} * {}", index, input, local, grad);
            nodes[input.index()].grad += local * grad;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "autograd_test.rs"]
mod tests;
