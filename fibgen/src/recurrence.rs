//! The two-term additive recurrence shared by every generator.
//!
//! V(0) = 0, V(1) = 1, V(n) = V(n - 1) + V(n - 2).

use crate::error::GeneratorError;

/// Value type produced by the generators.
pub type Value = u128;

/// Largest index whose value fits in [`Value`].
pub const MAX_INDEX: usize = 186;

/// Converts a caller-supplied index into an internal one.
///
/// Negative indices are rejected with [`GeneratorError::InvalidArgument`],
/// indices past [`MAX_INDEX`] with [`GeneratorError::OutOfRange`].
pub fn validate(index: i64) -> Result<usize, GeneratorError> {
    let n = usize::try_from(index).map_err(|_| GeneratorError::InvalidArgument { index })?;
    if n > MAX_INDEX {
        return Err(GeneratorError::OutOfRange {
            index,
            max: MAX_INDEX,
        });
    }
    Ok(n)
}

/// How the value at one index is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Base case, known without any lookup
    Base(Value),
    /// Sum of the values at these two indices, in the order `step` expects
    Sum(usize, usize),
}

/// Returns the term for index `n`.
pub fn term(n: usize) -> Term {
    match n {
        0 => Term::Base(0),
        1 => Term::Base(1),
        _ => Term::Sum(n - 1, n - 2),
    }
}

/// Combines the two preceding values into the next one.
pub fn step(prev: Value, prev_prev: Value) -> Value {
    prev + prev_prev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_negative() {
        assert_eq!(
            validate(-1),
            Err(GeneratorError::InvalidArgument { index: -1 })
        );
        assert_eq!(
            validate(i64::MIN),
            Err(GeneratorError::InvalidArgument { index: i64::MIN })
        );
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(validate(0), Ok(0));
        assert_eq!(validate(186), Ok(MAX_INDEX));
        assert_eq!(
            validate(187),
            Err(GeneratorError::OutOfRange {
                index: 187,
                max: MAX_INDEX
            })
        );
    }

    #[test]
    fn test_term_shape() {
        assert_eq!(term(0), Term::Base(0));
        assert_eq!(term(1), Term::Base(1));
        assert_eq!(term(2), Term::Sum(1, 0));
        assert_eq!(term(10), Term::Sum(9, 8));
        assert_eq!(term(MAX_INDEX), Term::Sum(MAX_INDEX - 1, MAX_INDEX - 2));
    }

    #[test]
    fn test_step_adds() {
        assert_eq!(step(0, 0), 0);
        assert_eq!(step(13, 8), 21);
    }
}
