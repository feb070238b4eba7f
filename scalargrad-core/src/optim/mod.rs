// scalargrad-core/src/optim/mod.rs

//! Optimizers updating parameter nodes from their gradients.
//!
//! This module provides the `Optimizer` trait and plain gradient descent
//! ([`Sgd`]).

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
