//! Show command implementation
//!
//! The full display: banner, seeded fractal animation, correlation report,
//! closing line.

use std::io::Write;

use quantum_art::analysis::quantum_analysis;
use quantum_art::animation::{FractalAnimator, Pacer, ThreadPacer};
use quantum_core::rng::{EntropyProvider, SystemClockEntropy};
use quantum_core::EntangledStreamGenerator;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Opening banner
pub const BANNER: &str = "Initiating Quantum Fractal Display...";

/// Closing line
pub const FAREWELL: &str = "Reality Simulation Complete.";

/// Run the show command
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    run_with(config, &SystemClockEntropy, &mut stdout.lock(), ThreadPacer)
}

/// Run the show against an explicit entropy source, output and pacer
pub fn run_with<E: EntropyProvider, W: Write, P: Pacer>(
    config: &AppConfig,
    entropy: &E,
    out: &mut W,
    mut pacer: P,
) -> Result<()> {
    let render = config.render.to_render_config()?;
    let analysis = config.analysis.to_analysis_config()?;

    writeln!(out, "{}\n", BANNER)?;
    out.flush()?;
    pacer.pause(config.intro_delay());

    let seed = config.show_seed();
    info!("Rendering with seed {}", seed);
    FractalAnimator::new(&mut *out, &mut pacer, render)
        .run(EntangledStreamGenerator::new(Some(seed)))?;

    let matrix = quantum_analysis(&analysis, entropy)?;
    matrix.write_report(out)?;

    writeln!(out, "\n{}", FAREWELL)?;
    out.flush()?;
    Ok(())
}
