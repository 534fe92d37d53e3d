//! Render command implementation
//!
//! Animates the fractal to the terminal using the configured render settings.

use std::io::Write;

use quantum_art::animation::{FractalAnimator, Pacer, ThreadPacer};
use quantum_core::EntangledStreamGenerator;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Per-invocation overrides from the command line
#[derive(Debug, Clone, Default)]
pub struct RenderOverrides {
    pub seed: Option<u64>,
    pub density: Option<f64>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub frames: Option<usize>,
}

/// Run the render command
pub fn run(config: &AppConfig, overrides: &RenderOverrides) -> Result<()> {
    let stdout = std::io::stdout();
    run_with(config, overrides, stdout.lock(), ThreadPacer)
}

/// Render to any output with any pacer
pub fn run_with<W: Write, P: Pacer>(
    config: &AppConfig,
    overrides: &RenderOverrides,
    out: W,
    pacer: P,
) -> Result<()> {
    let mut settings = config.render.clone();
    if let Some(seed) = overrides.seed {
        settings.seed = Some(seed);
    }
    if let Some(density) = overrides.density {
        settings.density = density;
    }
    if let Some(width) = overrides.width {
        settings.width = width;
    }
    if let Some(height) = overrides.height {
        settings.height = height;
    }
    if let Some(frames) = overrides.frames {
        settings.frames = frames;
    }
    let render = settings.to_render_config()?;

    let stream = EntangledStreamGenerator::new(settings.seed);
    info!("Stream seed: {}", stream.seed());

    let frames = FractalAnimator::new(out, pacer, render).run(stream)?;
    info!("Rendered {} frames", frames.len());
    Ok(())
}
