//! Render and analysis settings.
//!
//! Use [`RenderConfig::builder`] to construct a validated render setting;
//! [`AnalysisConfig`] is small enough to build directly.

use std::time::Duration;

use quantum_core::StreamParams;

use crate::error::ArtError;

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 80;

/// Default grid height in rows.
pub const DEFAULT_HEIGHT: usize = 40;

/// Default number of animation frames.
pub const DEFAULT_FRAMES: usize = 3;

/// Default pause after each written row.
pub const DEFAULT_ROW_DELAY: Duration = Duration::from_millis(50);

/// Default pause after each frame.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);

/// Default density setting.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Default number of correlation samples.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Fractal render settings.
///
/// # Examples
///
/// ```rust
/// use quantum_art::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .width(120)
///     .height(30)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.width(), 120);
/// assert_eq!(config.frames(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    width: usize,
    height: usize,
    frames: usize,
    row_delay: Duration,
    frame_delay: Duration,
    density: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frames: DEFAULT_FRAMES,
            row_delay: DEFAULT_ROW_DELAY,
            frame_delay: DEFAULT_FRAME_DELAY,
            density: DEFAULT_DENSITY,
        }
    }
}

impl RenderConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Returns the grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of frames.
    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns the pause after each row.
    #[inline]
    pub fn row_delay(&self) -> Duration {
        self.row_delay
    }

    /// Returns the pause after each frame.
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Returns the density setting.
    ///
    /// Grid generation does not read this value.
    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArtError::InvalidParameter` if width, height or frames is
    /// zero, or density is outside [0, 1].
    pub fn validate(&self) -> Result<(), ArtError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("frames", self.frames),
        ] {
            if value == 0 {
                return Err(ArtError::InvalidParameter {
                    name,
                    value: "must be positive".to_string(),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ArtError::InvalidParameter {
                name: "density",
                value: format!("{} is outside [0, 1]", self.density),
            });
        }
        Ok(())
    }
}

/// Builder for [`RenderConfig`].
#[derive(Clone, Debug, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    /// Sets the grid width.
    #[inline]
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Sets the grid height.
    #[inline]
    pub fn height(mut self, height: usize) -> Self {
        self.config.height = height;
        self
    }

    /// Sets the number of frames.
    #[inline]
    pub fn frames(mut self, frames: usize) -> Self {
        self.config.frames = frames;
        self
    }

    /// Sets the pause after each row.
    #[inline]
    pub fn row_delay(mut self, delay: Duration) -> Self {
        self.config.row_delay = delay;
        self
    }

    /// Sets the pause after each frame.
    #[inline]
    pub fn frame_delay(mut self, delay: Duration) -> Self {
        self.config.frame_delay = delay;
        self
    }

    /// Sets the density.
    #[inline]
    pub fn density(mut self, density: f64) -> Self {
        self.config.density = density;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// See [`RenderConfig::validate`].
    pub fn build(self) -> Result<RenderConfig, ArtError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Correlation analysis settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalysisConfig {
    /// Number of fresh generators (one value each).
    pub samples: usize,
    /// Seed for the classical normal sampler; `None` reads the clock.
    pub classical_seed: Option<u64>,
    /// Parameters for every fresh generator.
    pub params: StreamParams,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            classical_seed: None,
            params: StreamParams::default(),
        }
    }
}

impl AnalysisConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ArtError::InvalidParameter` if `samples` is zero.
    pub fn validate(&self) -> Result<(), ArtError> {
        if self.samples == 0 {
            return Err(ArtError::InvalidParameter {
                name: "samples",
                value: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.width(), 80);
        assert_eq!(config.height(), 40);
        assert_eq!(config.frames(), 3);
        assert_eq!(config.row_delay(), Duration::from_millis(50));
        assert_eq!(config.frame_delay(), Duration::from_millis(200));
        assert_eq!(config.density(), 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_render_zero_sizes_rejected() {
        for builder in [
            RenderConfig::builder().width(0),
            RenderConfig::builder().height(0),
            RenderConfig::builder().frames(0),
        ] {
            assert!(matches!(
                builder.build(),
                Err(ArtError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_render_density_bounds() {
        assert!(RenderConfig::builder().density(0.0).build().is_ok());
        assert!(RenderConfig::builder().density(1.0).build().is_ok());
        assert!(matches!(
            RenderConfig::builder().density(1.5).build(),
            Err(ArtError::InvalidParameter { name: "density", .. })
        ));
        assert!(RenderConfig::builder().density(f64::NAN).build().is_err());
    }

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.samples, 1000);
        assert_eq!(config.classical_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_analysis_zero_samples_rejected() {
        let config = AnalysisConfig {
            samples: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
