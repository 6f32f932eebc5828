//! Storage backends for the caching generator.

use std::cell::OnceCell;
use std::collections::HashMap;

use crate::recurrence::Value;

/// A storage backend for computed sequence values.
///
/// # Contract
///
/// - an index, once stored, is never removed
/// - `get_or_insert` on a stored index returns the stored value and does not
///   call `compute`
pub trait Backend {
    /// Returns the stored value for `index`, if any.
    fn get(&self, index: usize) -> Option<&Value>;

    /// Returns the stored value for `index`, storing `compute()` first if absent.
    fn get_or_insert<F>(&mut self, index: usize, compute: F) -> &Value
    where
        F: FnOnce() -> Value;

    /// Number of stored indices.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored indices in ascending order.
    fn indices(&self) -> Vec<usize>;
}

/// A Vec-based backend for dense indices.
///
/// Slots are allocated up to the highest requested index and filled at most
/// once. An allocated but empty slot does not count as stored.
#[derive(Debug, Default)]
pub struct VecBackend {
    data: Vec<OnceCell<Value>>,
}

impl VecBackend {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new VecBackend with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl Backend for VecBackend {
    fn get(&self, index: usize) -> Option<&Value> {
        self.data.get(index).and_then(OnceCell::get)
    }

    fn get_or_insert<F>(&mut self, index: usize, compute: F) -> &Value
    where
        F: FnOnce() -> Value,
    {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, OnceCell::new);
        }
        self.data[index].get_or_init(compute)
    }

    fn len(&self) -> usize {
        self.data.iter().filter(|slot| slot.get().is_some()).count()
    }

    fn indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(index, _)| index)
            .collect()
    }
}

/// A HashMap-based backend.
///
/// Only requested indices occupy memory, which suits sparse access.
#[derive(Debug, Default)]
pub struct HashMapBackend {
    data: HashMap<usize, Value>,
}

impl HashMapBackend {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl Backend for HashMapBackend {
    fn get(&self, index: usize) -> Option<&Value> {
        self.data.get(&index)
    }

    fn get_or_insert<F>(&mut self, index: usize, compute: F) -> &Value
    where
        F: FnOnce() -> Value,
    {
        self.data.entry(index).or_insert_with(compute)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.data.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}
