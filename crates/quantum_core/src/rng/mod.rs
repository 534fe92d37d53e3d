//! # Random Number Generation Infrastructure
//!
//! Seeded randomness used while building sampling tables, plus the entropy
//! providers that resolve a seed when the caller does not supply one.
//!
//! ## Module Structure
//!
//! - [`prng`]: seeded PRNG wrapper with uniform, normal and integer draws
//! - [`entropy`]: seed resolution (system clock, fixed value)
//!
//! ## Usage Example
//!
//! ```rust
//! use quantum_core::rng::{EntropyProvider, FixedEntropy, StreamRng};
//!
//! let seed = FixedEntropy::new(7).seed();
//! let mut rng = StreamRng::from_seed(seed);
//!
//! let mut dimension = vec![0.0; 1001];
//! rng.fill_normal(&mut dimension);
//! ```

mod entropy;
mod prng;

pub use entropy::{EntropyProvider, FixedEntropy, SystemClockEntropy};
pub use prng::StreamRng;
