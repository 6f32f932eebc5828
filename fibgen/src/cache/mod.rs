//! Memoizing generator with pluggable storage
//!
//! # Backend Types
//!
//! - [`HashMapBackend`]: default, only stores requested indices
//! - [`VecBackend`]: dense `OnceCell` slots, efficient when indices are requested in order
//!
//! Both backends only grow. A stored index is never removed or overwritten,
//! and [`CachingGenerator::is_cached`] reflects exactly what has been stored.
//!
//! # Example
//!
//! ```rust
//! use fibgen::{CachingGenerator, Generator, VecBackend};
//!
//! let generator = CachingGenerator::with_backend(VecBackend::new());
//! assert_eq!(generator.generate(10).unwrap(), 55);
//! assert_eq!(generator.cached_indices(), (0..=10).collect::<Vec<_>>());
//! ```

mod backend;
mod generator;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use generator::CachingGenerator;
