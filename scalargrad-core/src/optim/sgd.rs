use crate::error::ScalarGradError;
use crate::optim::optimizer_trait::{validate_learning_rate, Optimizer};
use crate::tape::{NodeId, Tape};
use log::debug;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Plain gradient descent: `value -= lr * grad` for every managed parameter.
/// Stochasticity comes from the caller feeding mini-batches, see the
/// `scalargrad-data` crate.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    lr: f64,
    steps: usize,
}

impl Sgd {
    /// Creates a new `Sgd` over the given parameter ids.
    ///
    /// # Errors
    /// `ConfigurationError` if `lr` is not a positive finite number.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64) -> Result<Self, ScalarGradError> {
        validate_learning_rate(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
            steps: 0,
        })
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }

    /// Number of steps performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, tape: &Tape) -> Result<(), ScalarGradError> {
        // Read everything first so a stale id leaves all parameters untouched.
        let current = self
            .params
            .iter()
            .map(|&id| -> Result<(f64, f64), ScalarGradError> {
                Ok((tape.value(id)?, tape.grad(id)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut update_norm = 0.0_f64;
        for (&id, (value, grad)) in self.params.iter().zip(current) {
            let delta = self.lr * grad;
            update_norm += delta * delta;
            tape.set_value(id, value - delta)?;
        }
        self.steps += 1;
        debug!(
            "Sgd step {}: {} parameters, lr {}, update norm {:.6}",
            self.steps,
            self.params.len(),
            self.lr,
            update_norm.sqrt()
        );
        Ok(())
    }

    fn zero_grad(&mut self, tape: &Tape) -> Result<(), ScalarGradError> {
        tape.zero_gradients(&self.params)
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        validate_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
