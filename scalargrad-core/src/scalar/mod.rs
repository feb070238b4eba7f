//! The [`Scalar`] handle: a differentiable value living on a [`Tape`].

use crate::tape::{NodeId, Tape};
use std::fmt;

pub mod accessors;
pub mod autograd_methods;
pub mod operators;

/// Handle to a node of the computation graph.
///
/// A `Scalar` is a cheap `Copy` pair of a tape reference and a [`NodeId`]; it
/// does not own the node. Arithmetic on handles (`a * b + c`, `a.tanh()`, ...)
/// appends new nodes to the shared tape and records how to differentiate them.
/// Identity is the node id, never the value: two handles compare equal only if
/// they designate the same node.
#[derive(Clone, Copy)]
pub struct Scalar<'t> {
    pub(crate) tape: &'t Tape,
    pub(crate) id: NodeId,
}

impl<'t> Scalar<'t> {
    pub(crate) fn from_parts(tape: &'t Tape, id: NodeId) -> Self {
        Scalar { tape, id }
    }
}

impl PartialEq for Scalar<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Scalar<'_> {}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Scalar");
        s.field("id", &self.id.index());
        if let Some(label) = self.label() {
            s.field("label", &label);
        }
        s.field("value", &self.value())
            .field("grad", &self.grad())
            .field("op", &self.op_tag())
            .finish()
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(value={}, grad={})", self.value(), self.grad())
    }
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
