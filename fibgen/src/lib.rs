//! Fibonacci value generators
//!
//! Two interchangeable implementations of the [`Generator`] capability:
//!
//! - [`NonCachingGenerator`]: recomputes every value from the recurrence
//! - [`CachingGenerator`]: memoizes computed values and can report what it holds
//!
//! Both follow V(0) = 0, V(1) = 1, V(n) = V(n - 1) + V(n - 2) and reject
//! negative indices with [`GeneratorError::InvalidArgument`].
//!
//! # Quick Example
//!
//! ```
//! use fibgen::{CachingGenerator, Generator, NonCachingGenerator};
//!
//! let generators: [Box<dyn Generator>; 2] = [
//!     Box::new(CachingGenerator::new()),
//!     Box::new(NonCachingGenerator::new()),
//! ];
//!
//! for generator in &generators {
//!     assert_eq!(generator.sequence(0..10).unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//!     assert!(generator.generate(-1).is_err());
//! }
//! ```

pub mod cache;
mod error;
mod generator;
mod recurrence;

pub use cache::{Backend, CachingGenerator, HashMapBackend, VecBackend};
pub use error::GeneratorError;
pub use generator::{Generator, NonCachingGenerator};
pub use recurrence::{MAX_INDEX, Value};
