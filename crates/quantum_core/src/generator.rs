//! Entangled stream generator.
//!
//! Each output folds `iterations` draws. Draw `i` advances the cursor to
//! the next universe, reads dimension `(i * dimension_stride) % dimensions`,
//! sums that dimension at the sample stride into a quantum state `q`, and
//! adds `sin(q * π)²` to a running total. The fractional part of the total
//! is returned.

use std::f64::consts::PI;

use crate::params::StreamParams;
use crate::rng::{EntropyProvider, StreamRng, SystemClockEntropy};
use crate::tables::TableCollection;

/// Seed-reproducible stream of values in `[0, 1)`.
///
/// Two generators built from the same seed and parameters produce
/// identical sequences. `next` takes `&mut self`; a generator shared
/// between threads must be wrapped in a lock by the caller.
///
/// # Examples
///
/// ```rust
/// use quantum_core::EntangledStreamGenerator;
///
/// let mut generator = EntangledStreamGenerator::new(Some(7));
/// let first_three: Vec<f64> = generator.by_ref().take(3).collect();
/// assert!(first_three.iter().all(|v| (0.0..1.0).contains(v)));
/// ```
#[derive(Clone, Debug)]
pub struct EntangledStreamGenerator {
    params: StreamParams,
    tables: TableCollection,
    cursor: usize,
    seed: u64,
}

impl EntangledStreamGenerator {
    /// Creates a generator with default parameters.
    ///
    /// With `None` the seed is the microsecond component of the current
    /// wall-clock time.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_params(seed, StreamParams::default()),
            None => Self::from_entropy(&SystemClockEntropy),
        }
    }

    /// Creates a generator with default parameters, seeded by `entropy`.
    pub fn from_entropy<E: EntropyProvider>(entropy: &E) -> Self {
        Self::with_params(entropy.seed(), StreamParams::default())
    }

    /// Creates a generator with explicit parameters.
    ///
    /// ```rust
    /// use quantum_core::{EntangledStreamGenerator, StreamParams};
    ///
    /// let params = StreamParams::builder()
    ///     .universes(3)
    ///     .dimensions(5)
    ///     .samples(50)
    ///     .build()
    ///     .unwrap();
    /// let mut generator = EntangledStreamGenerator::with_params(1, params);
    /// assert_eq!(generator.tables().len(), 3 * 5 * 50);
    /// assert!(generator.next() < 1.0);
    /// ```
    pub fn with_params(seed: u64, params: StreamParams) -> Self {
        let mut rng = StreamRng::from_seed(seed);
        let tables = TableCollection::generate(params.shape(), &mut rng);
        Self {
            params,
            tables,
            cursor: 0,
            seed,
        }
    }

    /// Returns the effective seed the tables were built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the universe index that the most recent draw read from.
    ///
    /// A fresh generator reports 0.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the generator parameters.
    #[inline]
    pub fn params(&self) -> &StreamParams {
        &self.params
    }

    /// Borrows the immutable table collection.
    #[inline]
    pub fn tables(&self) -> &TableCollection {
        &self.tables
    }

    /// Produces the next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let shape = self.params.shape();
        let mut result = 0.0;

        for i in 0..self.params.iterations() {
            self.cursor = (self.cursor + 1) % shape.universes;
            let dimension = (i * self.params.dimension_stride()) % shape.dimensions;
            let quantum_state =
                self.tables
                    .strided_sum(self.cursor, dimension, self.params.sample_stride());
            result += (quantum_state * PI).sin().powi(2);
        }

        result % 1.0
    }
}

impl Iterator for EntangledStreamGenerator {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(EntangledStreamGenerator::next(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedEntropy;

    fn small_params() -> StreamParams {
        StreamParams::builder()
            .universes(11)
            .dimensions(101)
            .samples(61)
            .build()
            .unwrap()
    }

    #[test]
    fn test_fresh_cursor_is_zero() {
        let generator = EntangledStreamGenerator::with_params(1, small_params());
        assert_eq!(generator.cursor(), 0);
    }

    #[test]
    fn test_cursor_advances_by_iterations() {
        let mut generator = EntangledStreamGenerator::with_params(1, small_params());
        generator.next();
        assert_eq!(generator.cursor(), 7);
        generator.next();
        assert_eq!(generator.cursor(), 14 % 11);
    }

    #[test]
    fn test_cursor_full_cycle_is_eleven_calls() {
        let mut generator = EntangledStreamGenerator::with_params(3, small_params());
        let mut seen = Vec::new();
        for call in 1..=11 {
            generator.next();
            seen.push(generator.cursor());
            if call < 11 {
                assert_ne!(generator.cursor(), 0, "cursor returned early at call {}", call);
            }
        }
        assert_eq!(generator.cursor(), 0);
        seen.sort_unstable();
        assert_eq!(seen, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_entropy_uses_provider_seed() {
        let generator = EntangledStreamGenerator::from_entropy(&FixedEntropy::new(77));
        assert_eq!(generator.seed(), 77);
    }

    #[test]
    fn test_unseeded_seed_is_sub_second_micros() {
        let generator = EntangledStreamGenerator::new(None);
        assert!(generator.seed() < 1_000_000);
    }

    #[test]
    fn test_matches_hand_reduction() {
        let mut generator = EntangledStreamGenerator::with_params(21, small_params());
        let tables = generator.tables().clone();

        let mut cursor = 0;
        let mut expected = 0.0;
        for i in 0..7 {
            cursor = (cursor + 1) % 11;
            let dim = tables.dimension(cursor, (i * 13) % 101);
            let mut q = 0.0;
            let mut idx = 0;
            while idx < dim.len() {
                q += dim[idx];
                idx += 29;
            }
            expected += (q * PI).sin().powi(2);
        }
        expected %= 1.0;

        assert_eq!(generator.next(), expected);
    }

    #[test]
    fn test_iterator_matches_inherent_next() {
        let mut a = EntangledStreamGenerator::with_params(8, small_params());
        let mut b = EntangledStreamGenerator::with_params(8, small_params());
        let via_iter: Vec<f64> = a.by_ref().take(5).collect();
        let via_next: Vec<f64> = (0..5).map(|_| b.next()).collect();
        assert_eq!(via_iter, via_next);
        assert_eq!(a.cursor(), b.cursor());
    }

    #[test]
    fn test_tables_untouched_by_sampling() {
        let mut generator = EntangledStreamGenerator::with_params(4, small_params());
        let before = generator.tables().clone();
        for _ in 0..50 {
            generator.next();
        }
        assert_eq!(generator.tables(), &before);
    }
}
