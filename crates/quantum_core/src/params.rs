//! Table shape and reduction constants.
//!
//! The defaults are deliberately non-round (11 universes, 101 dimensions,
//! 1001 samples, strides 13 and 29) so the rotation stride, the
//! dimension-selection stride and the slicing stride never align
//! periodically.

use super::error::ConfigError;

/// Default number of universes.
pub const DEFAULT_UNIVERSES: usize = 11;

/// Default number of dimensions per universe.
pub const DEFAULT_DIMENSIONS: usize = 101;

/// Default number of samples per dimension.
pub const DEFAULT_SAMPLES: usize = 1001;

/// Default number of draws folded into one output value.
pub const DEFAULT_ITERATIONS: usize = 7;

/// Default multiplier selecting the dimension for each iteration.
pub const DEFAULT_DIMENSION_STRIDE: usize = 13;

/// Default stride used when slicing a dimension.
pub const DEFAULT_SAMPLE_STRIDE: usize = 29;

/// Size of a table collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableShape {
    /// Number of universes (top-level tables).
    pub universes: usize,
    /// Number of dimensions per universe.
    pub dimensions: usize,
    /// Number of sorted samples per dimension.
    pub samples: usize,
}

impl Default for TableShape {
    fn default() -> Self {
        Self {
            universes: DEFAULT_UNIVERSES,
            dimensions: DEFAULT_DIMENSIONS,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl TableShape {
    /// Total number of values held by a collection of this shape.
    ///
    /// ```rust
    /// use quantum_core::TableShape;
    ///
    /// assert_eq!(TableShape::default().len(), 11 * 101 * 1001);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.universes * self.dimensions * self.samples
    }

    /// Returns `true` when any size is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that all three sizes are positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] naming the first zero size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.universes == 0 {
            return Err(ConfigError::ZeroSize { name: "universes" });
        }
        if self.dimensions == 0 {
            return Err(ConfigError::ZeroSize { name: "dimensions" });
        }
        if self.samples == 0 {
            return Err(ConfigError::ZeroSize { name: "samples" });
        }
        Ok(())
    }
}

/// Validated parameters for an [`EntangledStreamGenerator`].
///
/// Instances only exist in a valid state: either the [`Default`] values or
/// the output of [`StreamParamsBuilder::build`].
///
/// [`EntangledStreamGenerator`]: crate::EntangledStreamGenerator
///
/// # Examples
///
/// ```rust
/// use quantum_core::StreamParams;
///
/// let params = StreamParams::builder()
///     .universes(5)
///     .dimensions(7)
///     .samples(31)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.shape().len(), 5 * 7 * 31);
/// assert_eq!(params.iterations(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamParams {
    shape: TableShape,
    iterations: usize,
    dimension_stride: usize,
    sample_stride: usize,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            shape: TableShape::default(),
            iterations: DEFAULT_ITERATIONS,
            dimension_stride: DEFAULT_DIMENSION_STRIDE,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
        }
    }
}

impl StreamParams {
    /// Creates a new parameter builder seeded with the defaults.
    #[inline]
    pub fn builder() -> StreamParamsBuilder {
        StreamParamsBuilder::default()
    }

    /// Returns the table shape.
    #[inline]
    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// Returns the number of draws folded into each output.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the dimension-selection multiplier.
    #[inline]
    pub fn dimension_stride(&self) -> usize {
        self.dimension_stride
    }

    /// Returns the sample slicing stride.
    #[inline]
    pub fn sample_stride(&self) -> usize {
        self.sample_stride
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any size is zero, `iterations` is zero or
    /// `sample_stride` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape.validate()?;
        if self.iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "iterations",
                value: "must be positive".to_string(),
            });
        }
        if self.sample_stride == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "sample_stride",
                value: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`StreamParams`].
///
/// Unset fields keep their default values; validation happens in
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct StreamParamsBuilder {
    params: StreamParams,
}

impl StreamParamsBuilder {
    /// Sets the number of universes.
    #[inline]
    pub fn universes(mut self, universes: usize) -> Self {
        self.params.shape.universes = universes;
        self
    }

    /// Sets the number of dimensions per universe.
    #[inline]
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.params.shape.dimensions = dimensions;
        self
    }

    /// Sets the number of samples per dimension.
    #[inline]
    pub fn samples(mut self, samples: usize) -> Self {
        self.params.shape.samples = samples;
        self
    }

    /// Sets the number of draws folded into each output.
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.params.iterations = iterations;
        self
    }

    /// Sets the dimension-selection multiplier.
    #[inline]
    pub fn dimension_stride(mut self, stride: usize) -> Self {
        self.params.dimension_stride = stride;
        self
    }

    /// Sets the sample slicing stride.
    #[inline]
    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.params.sample_stride = stride;
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any constant is zero (see
    /// [`StreamParams::validate`]).
    pub fn build(self) -> Result<StreamParams, ConfigError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
