use crate::autograd::run_backward;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;

impl<'t> Scalar<'t> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0` and accumulates into every node it
    /// transitively depends on. Gradients are *added*, so call
    /// [`Scalar::zero_grad_graph`] (or an optimizer's `zero_grad`) before a
    /// backward pass that reuses nodes from a previous one.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::CyclicGraph`] if the graph is not acyclic.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        run_backward(self)
    }

    /// Resets the gradient of this node only.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Resets the gradient of every node reachable from this one, itself included.
    pub fn zero_grad_graph(&self) -> Result<(), ScalarGradError> {
        self.tape.zero_grad_graph(self.id)
    }
}
