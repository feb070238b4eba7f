//! Shared memory arena for the nodes of a computation graph, aka a tape.
//!
//! Every [`Scalar`] handle borrows the tape it lives on, and every operation
//! pushes exactly one new node at the end of the arena. Because operands are
//! always created before their consumers, an operand index is always smaller
//! than the index of the node that uses it.
//!
//! A training loop typically creates its parameters first, takes a
//! [`Checkpoint`], and [`rewind`](Tape::rewind)s to it after each step so that
//! the forward-pass nodes of that step are discarded.

use crate::autograd::backward_op::Op;
use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_TAPE_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a node: the tape it lives on, its arena index and the tape epoch
/// it was created in. Two nodes with equal values are still distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tape: u32,
    index: usize,
    epoch: u32,
}

impl NodeId {
    /// Position of the node in its tape.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Epoch of the tape when the node was created.
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Id of the tape owning the node.
    pub fn tape_id(&self) -> u32 {
        self.tape
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index)
    }
}

/// Recorded tape length, see [`Tape::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Checkpoint {
    len: usize,
}

impl Checkpoint {
    /// Number of nodes that survive a rewind to this checkpoint.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Arena owning every node of one or more computation graphs.
#[derive(Debug)]
pub struct Tape {
    id: u32,
    epoch: u32,
    nodes: RefCell<Vec<ScalarData>>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Tape {
            id: NEXT_TAPE_ID.fetch_add(1, Ordering::Relaxed),
            epoch: 0,
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Process-unique id of this tape.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Creates a leaf node (input or parameter).
    pub fn leaf(&self, value: f64) -> Scalar<'_> {
        self.push(value, Op::Leaf)
    }

    /// Creates a labelled leaf node.
    pub fn named_leaf(&self, label: impl Into<String>, value: f64) -> Scalar<'_> {
        let scalar = self.push(value, Op::Leaf);
        self.nodes_mut()[scalar.id().index()].label = Some(label.into());
        scalar
    }

    /// Appends a node. Callers must have validated the operands of `op`.
    pub(crate) fn push(&self, value: f64, op: Op) -> Scalar<'_> {
        let mut nodes = self.nodes_mut();
        let index = nodes.len();
        nodes.push(ScalarData::new(value, op, self.epoch));
        Scalar::from_parts(
            self,
            NodeId {
                tape: self.id,
                index,
                epoch: self.epoch,
            },
        )
    }

    /// Rebuilds the id of the node stored at `index`.
    pub(crate) fn id_at(&self, nodes: &[ScalarData], index: usize) -> NodeId {
        NodeId {
            tape: self.id,
            index,
            epoch: nodes[index].epoch,
        }
    }

    /// Checks that `id` designates a live node of this tape and returns its index.
    pub(crate) fn resolve(&self, id: NodeId) -> Result<usize, ScalarGradError> {
        let nodes = self.nodes();
        let live = id.tape == self.id
            && nodes
                .get(id.index)
                .map_or(false, |node| node.epoch == id.epoch);
        if live {
            Ok(id.index)
        } else {
            Err(ScalarGradError::NodeNotFound {
                index: id.index,
                epoch: id.epoch,
            })
        }
    }

    /// Returns `true` if `id` designates a live node of this tape.
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_ok()
    }

    /// Binds a stored id to a handle on this tape.
    pub fn scalar(&self, id: NodeId) -> Result<Scalar<'_>, ScalarGradError> {
        self.resolve(id)?;
        Ok(Scalar::from_parts(self, id))
    }

    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        let index = self.resolve(id)?;
        Ok(self.nodes()[index].value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        let index = self.resolve(id)?;
        Ok(self.nodes()[index].grad)
    }

    /// Overwrites the value of a node, e.g. for a parameter update.
    ///
    /// Values of nodes computed from this one are *not* recomputed; run a new
    /// forward pass to observe the change downstream.
    pub fn set_value(&self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        let index = self.resolve(id)?;
        self.nodes_mut()[index].value = value;
        Ok(())
    }

    pub fn set_grad(&self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        let index = self.resolve(id)?;
        self.nodes_mut()[index].grad = grad;
        Ok(())
    }

    /// Resets the gradient of every given node to zero.
    ///
    /// Gradients accumulate across backward passes, so this (or one of the other
    /// `zero_grad*` helpers) must run before every backward pass that reuses
    /// nodes from a previous one. No gradient is touched if any id is invalid.
    pub fn zero_gradients(&self, ids: &[NodeId]) -> Result<(), ScalarGradError> {
        let indices = ids
            .iter()
            .map(|id| self.resolve(*id))
            .collect::<Result<Vec<_>, _>>()?;
        let mut nodes = self.nodes_mut();
        for index in indices {
            nodes[index].grad = 0.0;
        }
        Ok(())
    }

    /// Resets the gradient of every node reachable from `root` (root included).
    pub fn zero_grad_graph(&self, root: NodeId) -> Result<(), ScalarGradError> {
        let root = self.resolve(root)?;
        let mut nodes = self.nodes_mut();
        let order = topological_sort(&nodes, root)?;
        for index in order {
            nodes[index].grad = 0.0;
        }
        Ok(())
    }

    /// Resets the gradient of every node on the tape.
    pub fn zero_grad_all(&self) {
        for node in self.nodes_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Runs the backward pass from `root`, see [`crate::autograd::run_backward`].
    pub fn backward(&self, root: NodeId) -> Result<(), ScalarGradError> {
        let root = self.resolve(root)?;
        crate::autograd::backward_from(&mut self.nodes_mut(), root)
    }

    /// All nodes reachable from `root`, operands before consumers.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        let root = self.resolve(root)?;
        let nodes = self.nodes();
        let order = topological_sort(&nodes, root)?;
        Ok(order
            .into_iter()
            .map(|index| self.id_at(&nodes, index))
            .collect())
    }

    /// Records the current length of the tape.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Ids of discarded nodes are rejected afterwards with
    /// [`ScalarGradError::NodeNotFound`], even once new nodes reuse their slots.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ScalarGradError> {
        let nodes = self.nodes.get_mut();
        if checkpoint.len > nodes.len() {
            return Err(ScalarGradError::InvalidCheckpoint {
                checkpoint_len: checkpoint.len,
                tape_len: nodes.len(),
            });
        }
        if checkpoint.len < nodes.len() {
            debug!(
                "Tape {}: rewinding from {} to {} nodes",
                self.id,
                nodes.len(),
                checkpoint.len
            );
            nodes.truncate(checkpoint.len);
            self.epoch = self.epoch.wrapping_add(1);
        }
        Ok(())
    }

    /// Discards every node.
    pub fn clear(&mut self) {
        // A checkpoint of length zero is always valid.
        let _ = self.rewind(Checkpoint::default());
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<ScalarData>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<ScalarData>> {
        self.nodes.borrow_mut()
    }
}

#[cfg(test)]
#[path = "tape_test.rs"]
mod tests;
