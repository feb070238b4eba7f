use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use crate::tape::{NodeId, Tape};
use std::fmt;

/// A learnable leaf of a [`Module`](crate::nn::Module).
///
/// A `Parameter` does not hold the value itself: it is a named [`NodeId`] on a
/// tape. It stays valid across training steps as long as the tape is only ever
/// rewound to a checkpoint taken after the parameter was created.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    id: NodeId,
}

impl Parameter {
    /// Creates a new leaf holding `value` on `tape`. The name doubles as the
    /// node label.
    pub fn new(tape: &Tape, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        let id = tape.named_leaf(name.clone(), value).id();
        Parameter { name, id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Handle to the parameter node, for use in a forward pass.
    pub fn bind<'t>(&self, tape: &'t Tape) -> Result<Scalar<'t>, ScalarGradError> {
        tape.scalar(self.id)
    }

    pub fn value(&self, tape: &Tape) -> Result<f64, ScalarGradError> {
        tape.value(self.id)
    }

    pub fn grad(&self, tape: &Tape) -> Result<f64, ScalarGradError> {
        tape.grad(self.id)
    }

    pub fn set_value(&self, tape: &Tape, value: f64) -> Result<(), ScalarGradError> {
        tape.set_value(self.id, value)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({}, {})", self.name, self.id)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
