use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::{add_backward, add_scalar_backward};
use crate::ops::arithmetic::mul::{mul_backward, mul_scalar_backward};
use crate::ops::arithmetic::pow::pow_backward;
use crate::ops::math_elem::exp::exp_backward;
use crate::scalar_data::ScalarData;
use crate::tape::NodeId;

/// The producing operation of a node, with fixed-arity operand references.
///
/// This is the scalar counterpart of a `grad_fn`: instead of storing a closure
/// per node, the backward pass dispatches on the variant and asks the matching
/// operation module for its local derivative(s). Constant operands are stored
/// inline so they can never receive a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input or parameter, no operands.
    Leaf,
    Add(NodeId, NodeId),
    AddScalar(NodeId, f64),
    Mul(NodeId, NodeId),
    MulScalar(NodeId, f64),
    /// Power by a constant exponent.
    Pow(NodeId, f64),
    Exp(NodeId),
    Tanh(NodeId),
}

impl Op {
    /// Operands in the order they were given to the forward operation.
    pub fn inputs(&self) -> impl Iterator<Item = NodeId> {
        let (first, second) = match *self {
            Op::Leaf => (None, None),
            Op::Add(a, b) | Op::Mul(a, b) => (Some(a), Some(b)),
            Op::AddScalar(a, _)
            | Op::MulScalar(a, _)
            | Op::Pow(a, _)
            | Op::Exp(a)
            | Op::Tanh(a) => (Some(a), None),
        };
        first.into_iter().chain(second)
    }

    /// Returns `true` for nodes that were not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Human-readable tag of the operation (`"+"`, `"*"`, `"**2"`, ...).
    /// Leaves have an empty tag.
    pub fn tag(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add(..) | Op::AddScalar(..) => "+".to_string(),
            Op::Mul(..) | Op::MulScalar(..) => "*".to_string(),
            Op::Pow(_, p) => format!("**{}", p),
            Op::Exp(_) => "exp".to_string(),
            Op::Tanh(_) => "tanh".to_string(),
        }
    }

    /// Local derivative of the output with respect to each operand, paired with
    /// the operand id. The caller multiplies by the upstream gradient.
    ///
    /// `nodes` is the arena the operands index into and `out_value` is the
    /// forward value of the node carrying this operation.
    pub(crate) fn local_gradients(
        &self,
        nodes: &[ScalarData],
        out_value: f64,
    ) -> impl Iterator<Item = (NodeId, f64)> {
        let value = |id: NodeId| nodes[id.index()].value;
        let (first, second) = match *self {
            Op::Leaf => (None, None),
            Op::Add(a, b) => {
                let (da, db) = add_backward();
                (Some((a, da)), Some((b, db)))
            }
            Op::AddScalar(a, _) => (Some((a, add_scalar_backward())), None),
            Op::Mul(a, b) => {
                let (da, db) = mul_backward(value(a), value(b));
                (Some((a, da)), Some((b, db)))
            }
            Op::MulScalar(a, k) => (Some((a, mul_scalar_backward(k))), None),
            Op::Pow(a, p) => (Some((a, pow_backward(value(a), p))), None),
            Op::Exp(a) => (Some((a, exp_backward(out_value))), None),
            Op::Tanh(a) => (Some((a, tanh_backward(out_value))), None),
        };
        first.into_iter().chain(second)
    }
}
