//! Scalar reverse-mode automatic differentiation.
//!
//! Values are recorded as nodes on a [`Tape`]; arithmetic on [`Scalar`]
//! handles builds the computation graph and [`Scalar::backward`] propagates
//! gradients from any node to everything it depends on. The [`nn`], [`model`],
//! [`optim`] and [`train`] modules build small neural networks on top of that.
//!
//! ```
//! use scalargrad_core::Tape;
//!
//! let tape = Tape::new();
//! let x = tape.leaf(2.0);
//! let w = tape.leaf(-3.0);
//! let y = (x * w + 1.0).tanh();
//! y.backward().unwrap();
//! assert!(x.grad() < 0.0);
//! ```

// Declare the main modules of the crate
pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;
mod scalar_data;
pub mod tape;

// Neural-network layer
pub mod model;
pub mod nn;
pub mod optim;
pub mod train;
pub mod utils;

// Re-export the core types so they are reachable as `scalargrad_core::Scalar`, ...
pub use autograd::run_backward;
pub use error::ScalarGradError;
pub use ops::Operand;
pub use scalar::Scalar;
pub use tape::{Checkpoint, NodeId, Tape};
