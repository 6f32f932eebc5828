//! Error types for the generator library

use thiserror::Error;

/// Error type for generator requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The requested index is negative
    #[error("Invalid argument: index {index} is negative")]
    InvalidArgument { index: i64 },
    /// The value at the requested index does not fit in the value type
    #[error("Index {index} is out of range (maximum is {max})")]
    OutOfRange { index: i64, max: usize },
}
