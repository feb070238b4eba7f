use crate::autograd::backward_op::Op;
use crate::scalar::Scalar;
use crate::tape::{NodeId, Tape};

// A handle is only obtainable while its tape is shared-borrowed, and rewinding
// needs `&mut Tape`, so the node behind a live handle always exists.
impl<'t> Scalar<'t> {
    /// Identity of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tape owning the node.
    pub fn tape(&self) -> &'t Tape {
        self.tape
    }

    /// Forward value.
    pub fn value(&self) -> f64 {
        self.tape.nodes()[self.id.index()].value
    }

    /// Accumulated gradient, 0.0 until a backward pass reaches this node.
    pub fn grad(&self) -> f64 {
        self.tape.nodes()[self.id.index()].grad
    }

    /// Overwrites the forward value (parameter update).
    pub fn set_value(&self, value: f64) {
        self.tape.nodes_mut()[self.id.index()].value = value;
    }

    /// Overwrites the gradient, e.g. to reset it or to seed a custom backward pass.
    pub fn set_grad(&self, grad: f64) {
        self.tape.nodes_mut()[self.id.index()].grad = grad;
    }

    pub fn label(&self) -> Option<String> {
        self.tape.nodes()[self.id.index()].label.clone()
    }

    /// Sets the diagnostic label. Has no effect on computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.tape.nodes_mut()[self.id.index()].label = Some(label.into());
    }

    /// Builder-style variant of [`Scalar::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// The producing operation.
    pub fn op(&self) -> Op {
        self.tape.nodes()[self.id.index()].op
    }

    /// Tag of the producing operation, empty for leaves.
    pub fn op_tag(&self) -> String {
        self.op().tag()
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    /// Direct inputs of the node, in operation order. Empty for leaves.
    pub fn operands(&self) -> Vec<Scalar<'t>> {
        self.op()
            .inputs()
            .map(|id| Scalar::from_parts(self.tape, id))
            .collect()
    }
}
