//! # Quantum Core
//!
//! Deterministic, seed-dependent "entangled" randomness.
//!
//! A generator owns a collection of sampling tables built once from a seed:
//! 11 universes, each holding 101 dimensions of 1001 standard-normal draws
//! sorted ascending. Every call to
//! [`EntangledStreamGenerator::next`](generator::EntangledStreamGenerator::next)
//! rotates through the universes, stride-samples a fixed set of dimensions
//! and folds the sums through `sin²` into a value in `[0, 1)`.
//!
//! ## Usage Example
//!
//! ```rust
//! use quantum_core::EntangledStreamGenerator;
//!
//! let mut a = EntangledStreamGenerator::new(Some(42));
//! let mut b = EntangledStreamGenerator::new(Some(42));
//!
//! let x = a.next();
//! assert!((0.0..1.0).contains(&x));
//! assert_eq!(x, b.next());
//! ```
//!
//! ## Module Structure
//!
//! - [`generator`]: the stream generator and its reduction
//! - [`tables`]: flat table collection and stride index generation
//! - [`params`]: table shape and reduction constants
//! - [`rng`]: seeded PRNG wrapper and entropy providers
//! - [`error`]: configuration errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generator;
pub mod params;
pub mod rng;
pub mod tables;

pub use error::ConfigError;
pub use generator::EntangledStreamGenerator;
pub use params::{StreamParams, StreamParamsBuilder, TableShape};
pub use rng::{EntropyProvider, FixedEntropy, StreamRng, SystemClockEntropy};
pub use tables::{stride_indices, TableCollection};
