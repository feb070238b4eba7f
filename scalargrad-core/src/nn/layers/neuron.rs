use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::layers::Activation;
use crate::nn::module::{check_input_len, Module};
use crate::nn::Parameter;
use crate::ops::{add_op, mul_op};
use crate::scalar::Scalar;
use crate::tape::Tape;
use rand::Rng;

/// A single unit: `activation(b + w0*x0 + w1*x1 + ...)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias drawn uniformly from `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(
        tape: &Tape,
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let values = init::uniform(nin + 1, -1.0, 1.0, rng)?;
        Ok(Self::from_values(tape, &values[..nin], values[nin], activation))
    }

    /// Creates a neuron with explicit weights and bias.
    pub fn from_values(tape: &Tape, weights: &[f64], bias: f64, activation: Activation) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Parameter::new(tape, format!("w{}", i), w))
            .collect();
        Neuron {
            weights,
            bias: Parameter::new(tape, "b", bias),
            activation,
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// The single output of the neuron.
    pub fn call<'t>(
        &self,
        tape: &'t Tape,
        inputs: &[Scalar<'t>],
    ) -> Result<Scalar<'t>, ScalarGradError> {
        check_input_len("Neuron forward", self.nin(), inputs)?;
        let mut act = self.bias.bind(tape)?;
        for (w, &x) in self.weights.iter().zip(inputs) {
            act = add_op(act, mul_op(w.bind(tape)?, x)?)?;
        }
        Ok(self.activation.apply(act))
    }
}

impl Module for Neuron {
    fn forward<'t>(
        &self,
        tape: &'t Tape,
        inputs: &[Scalar<'t>],
    ) -> Result<Vec<Scalar<'t>>, ScalarGradError> {
        Ok(vec![self.call(tape, inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
