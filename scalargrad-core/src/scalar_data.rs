use crate::autograd::backward_op::Op;

/// Storage of a single node of the computation graph.
///
/// `ScalarData` lives inside the [`Tape`](crate::tape::Tape) arena and is only
/// reachable through a [`Scalar`](crate::scalar::Scalar) handle or a
/// [`NodeId`](crate::tape::NodeId). Apart from `grad`, the diagnostic `label` and
/// explicit `value` writes used for parameter updates, a node never changes once
/// it has been pushed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScalarData {
    /// Result of the forward computation.
    pub value: f64,
    /// Accumulated d(root)/d(self). Zero until a backward pass reaches this node.
    pub grad: f64,
    /// Producing operation together with its operands.
    pub op: Op,
    /// Optional user-assigned name, diagnostics only.
    pub label: Option<String>,
    /// Tape epoch at creation time, used to reject ids that outlived a rewind.
    pub epoch: u32,
}

impl ScalarData {
    pub(crate) fn new(value: f64, op: Op, epoch: u32) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            op,
            label: None,
            epoch,
        }
    }
}
