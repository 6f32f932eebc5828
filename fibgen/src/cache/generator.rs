//! Memoizing generator implementation.

use std::cell::RefCell;

use tracing::{debug, trace};

use super::backend::{Backend, HashMapBackend};
use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::recurrence::{self, Term, Value};

/// A generator that remembers every value it computes.
///
/// Values are looked up in the backend before being computed. A miss resolves
/// both preceding indices through the same cache, so one call can populate
/// every index below the requested one. Entries are never evicted.
///
/// The backend sits in a `RefCell`, so the generator works through `&self`
/// but must stay on one thread.
///
/// # Example
///
/// ```rust
/// use fibgen::{CachingGenerator, Generator};
///
/// let generator = CachingGenerator::new();
/// assert!(!generator.is_cached(7));
/// assert_eq!(generator.generate(7).unwrap(), 13);
/// assert!(generator.is_cached(7));
/// assert!(!generator.is_cached(14));
/// ```
#[derive(Debug, Default)]
pub struct CachingGenerator<B = HashMapBackend>
where
    B: Backend,
{
    backend: RefCell<B>,
}

impl CachingGenerator<HashMapBackend> {
    /// Creates a caching generator with an empty HashMap backend.
    pub fn new() -> Self {
        Self::with_backend(HashMapBackend::new())
    }
}

impl<B> CachingGenerator<B>
where
    B: Backend,
{
    /// Creates a caching generator on top of the given backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: RefCell::new(backend),
        }
    }

    /// Returns `true` if the value at `index` has been computed and stored.
    ///
    /// Never computes or stores anything. Negative indices are never cached,
    /// so they report `false`.
    pub fn is_cached(&self, index: i64) -> bool {
        usize::try_from(index).is_ok_and(|n| self.backend.borrow().get(n).is_some())
    }

    /// Number of indices currently cached.
    pub fn cached_len(&self) -> usize {
        self.backend.borrow().len()
    }

    /// Cached indices in ascending order.
    pub fn cached_indices(&self) -> Vec<usize> {
        self.backend.borrow().indices()
    }

    fn get(&self, n: usize) -> Value {
        // Fast path: check if already computed
        if let Some(value) = self.backend.borrow().get(n) {
            trace!(index = n, "cache hit");
            return *value;
        }

        // Resolve dependencies first, no borrow held across the recursion
        let computed = match recurrence::term(n) {
            Term::Base(value) => value,
            Term::Sum(prev, prev_prev) => recurrence::step(self.get(prev), self.get(prev_prev)),
        };

        let value = *self.backend.borrow_mut().get_or_insert(n, || computed);
        debug!(index = n, value = %value, "cache miss, stored");
        value
    }
}

impl<B> Generator for CachingGenerator<B>
where
    B: Backend,
{
    fn generate(&self, index: i64) -> Result<Value, GeneratorError> {
        // Validation happens before any lookup, so failures never touch the cache
        let n = recurrence::validate(index)?;
        Ok(self.get(n))
    }
}
