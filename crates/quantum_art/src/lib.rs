//! # Quantum Art
//!
//! Consumers of the entangled stream:
//!
//! - [`fractal`]: character-grid generation and gravitational lensing
//! - [`animation`]: ANSI-coloured, paced terminal animation of frames
//! - [`analysis`]: quantum-classical correlation tally and report
//!
//! Consumers only see the stream through [`StreamSource`]; they never
//! touch the generator's tables.
//!
//! ## Usage Example
//!
//! ```rust
//! use quantum_art::animation::{FractalAnimator, NoPause};
//! use quantum_art::RenderConfig;
//! use quantum_core::EntangledStreamGenerator;
//!
//! let config = RenderConfig::builder().width(8).height(4).frames(1).build().unwrap();
//! let mut stream = EntangledStreamGenerator::new(Some(42));
//!
//! let mut out = Vec::new();
//! let frames = FractalAnimator::new(&mut out, NoPause, config)
//!     .run(&mut stream)
//!     .unwrap();
//! assert_eq!(frames.len(), 1);
//! ```

#![deny(missing_docs)]

pub mod analysis;
pub mod animation;
pub mod config;
pub mod error;
pub mod fractal;

pub use config::{AnalysisConfig, RenderConfig, RenderConfigBuilder};
pub use error::ArtError;

use quantum_core::EntangledStreamGenerator;

/// A stream of values in `[0, 1)` consumed by the renderers.
pub trait StreamSource {
    /// Draws the next value.
    fn draw(&mut self) -> f64;

    /// Seed that reproduces this stream, when one exists.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl StreamSource for EntangledStreamGenerator {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.next()
    }

    #[inline]
    fn seed(&self) -> Option<u64> {
        Some(EntangledStreamGenerator::seed(self))
    }
}

impl<S: StreamSource + ?Sized> StreamSource for &mut S {
    #[inline]
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }

    #[inline]
    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}
