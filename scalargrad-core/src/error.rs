use thiserror::Error;

/// Custom error type for the scalargrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operand of an unsupported kind was passed to an operation, e.g. a node
    /// used as the exponent of `pow`, or two handles living on different tapes.
    #[error("Unsupported operand for operation {operation}: {reason}")]
    UnsupportedOperand { operation: String, reason: String },

    #[error("Cycle detected in the computation graph at node {node} during topological sort.")]
    CyclicGraph { node: usize },

    /// The id refers to a node that was discarded by a rewind, or to another tape.
    #[error("Node {index} (epoch {epoch}) is not present on this tape")]
    NodeNotFound { index: usize, epoch: u32 },

    #[error("Invalid checkpoint: checkpoint length {checkpoint_len} exceeds tape length {tape_len}")]
    InvalidCheckpoint {
        checkpoint_len: usize,
        tape_len: usize,
    },

    #[error("Dimension mismatch during {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {0} requires at least one element")]
    EmptyInput(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ScalarGradError {
    /// Shorthand for [`ScalarGradError::UnsupportedOperand`].
    pub(crate) fn unsupported(operation: &str, reason: impl Into<String>) -> Self {
        ScalarGradError::UnsupportedOperand {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
