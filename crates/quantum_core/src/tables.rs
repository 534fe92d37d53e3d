//! Sampling table collection.
//!
//! All universes, dimensions and samples live in one flat buffer addressed
//! by `universe * dimensions * samples + dimension * samples + sample`.
//! Each dimension is a run of standard-normal draws sorted ascending, so
//! fixed-stride slices of it are strongly rank-correlated.

use crate::params::TableShape;
use crate::rng::StreamRng;

/// Immutable collection of sorted sampling tables.
///
/// # Examples
///
/// ```rust
/// use quantum_core::{StreamRng, TableCollection, TableShape};
///
/// let shape = TableShape { universes: 2, dimensions: 3, samples: 5 };
/// let mut rng = StreamRng::from_seed(1);
/// let tables = TableCollection::generate(shape, &mut rng);
///
/// let dim = tables.dimension(1, 2);
/// assert_eq!(dim.len(), 5);
/// assert!(dim.windows(2).all(|w| w[0] <= w[1]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TableCollection {
    shape: TableShape,
    values: Vec<f64>,
}

impl TableCollection {
    /// Builds a collection by drawing every value from `rng`.
    ///
    /// Draws happen universe-major, dimension-next, sample-minor, and each
    /// dimension is sorted as soon as it is filled. Exactly
    /// `shape.len()` normal draws are consumed.
    pub fn generate(shape: TableShape, rng: &mut StreamRng) -> Self {
        let mut values = vec![0.0; shape.len()];
        // chunks_exact_mut panics on a zero chunk size.
        if shape.samples > 0 {
            for dimension in values.chunks_exact_mut(shape.samples) {
                rng.fill_normal(dimension);
                dimension.sort_unstable_by(f64::total_cmp);
            }
        }
        Self { shape, values }
    }

    /// Returns the collection shape.
    #[inline]
    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// Returns the total number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the collection holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat offset of the first sample of `(universe, dimension)`.
    #[inline]
    pub fn offset(&self, universe: usize, dimension: usize) -> usize {
        (universe * self.shape.dimensions + dimension) * self.shape.samples
    }

    /// Borrows one sorted dimension.
    ///
    /// # Panics
    ///
    /// Panics if `universe` or `dimension` is out of range.
    #[inline]
    pub fn dimension(&self, universe: usize, dimension: usize) -> &[f64] {
        assert!(
            universe < self.shape.universes && dimension < self.shape.dimensions,
            "table index ({}, {}) out of range for shape {:?}",
            universe,
            dimension,
            self.shape
        );
        let start = self.offset(universe, dimension);
        &self.values[start..start + self.shape.samples]
    }

    /// Iterates over every dimension in storage order.
    pub fn dimensions(&self) -> impl Iterator<Item = &[f64]> {
        // A zero sample count leaves `values` empty, so the fallback
        // chunk size is never observed.
        self.values.chunks_exact(self.shape.samples.max(1))
    }

    /// Borrows the flat value buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Sums the values of one dimension at the stride positions.
    pub fn strided_sum(&self, universe: usize, dimension: usize, stride: usize) -> f64 {
        let values = self.dimension(universe, dimension);
        stride_indices(values.len(), stride)
            .map(|i| values[i])
            .sum()
    }
}

/// Yields `0, stride, 2 * stride, …` while strictly below `len`.
///
/// Index 0 is always included for a non-empty range. A zero stride yields
/// only index 0.
///
/// ```rust
/// use quantum_core::stride_indices;
///
/// let indices: Vec<usize> = stride_indices(1001, 29).collect();
/// assert_eq!(indices.len(), 35);
/// assert_eq!(indices[0], 0);
/// assert_eq!(*indices.last().unwrap(), 986);
/// ```
pub fn stride_indices(len: usize, stride: usize) -> impl Iterator<Item = usize> {
    let count = match (len, stride) {
        (0, _) => 0,
        (_, 0) => 1,
        _ => (len - 1) / stride + 1,
    };
    (0..count).map(move |k| k * stride)
}
