//! The generator capability and its stateless implementation.

use std::ops::Range;

use tracing::trace;

use crate::error::GeneratorError;
use crate::recurrence::{self, Term, Value};

/// Produces the sequence value at a given index.
///
/// Every implementation must return the same value for a given index no
/// matter which indices were requested before.
pub trait Generator {
    /// Returns V(`index`).
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidArgument`] if `index` is negative
    /// - [`GeneratorError::OutOfRange`] if the value does not fit in [`Value`]
    fn generate(&self, index: i64) -> Result<Value, GeneratorError>;

    /// Generates every value in `indices`, stopping at the first error.
    fn sequence(&self, indices: Range<i64>) -> Result<Vec<Value>, GeneratorError> {
        indices.map(|index| self.generate(index)).collect()
    }
}

/// Generator that recomputes each value from the recurrence on every call.
///
/// Holds no state, so separate call sites never interfere with each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonCachingGenerator;

impl NonCachingGenerator {
    /// Creates a new non-caching generator.
    pub fn new() -> Self {
        Self
    }
}

impl Generator for NonCachingGenerator {
    fn generate(&self, index: i64) -> Result<Value, GeneratorError> {
        let n = recurrence::validate(index)?;
        if let Term::Base(value) = recurrence::term(n) {
            return Ok(value);
        }

        let (mut prev_prev, mut prev): (Value, Value) = (0, 1);
        for _ in 2..=n {
            let next = recurrence::step(prev, prev_prev);
            prev_prev = prev;
            prev = next;
        }
        trace!(index = n, value = %prev, "computed without cache");
        Ok(prev)
    }
}
