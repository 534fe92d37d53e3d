//! Analyze command implementation
//!
//! Builds one fresh, clock-seeded generator per sample and prints the
//! quantum-classical correlation report.

use std::io::Write;

use quantum_art::analysis::quantum_analysis;
use quantum_core::rng::{EntropyProvider, SystemClockEntropy};
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Run the analyze command
pub fn run(config: &AppConfig, samples: Option<usize>, classical_seed: Option<u64>) -> Result<()> {
    let stdout = std::io::stdout();
    run_with(
        config,
        samples,
        classical_seed,
        &SystemClockEntropy,
        &mut stdout.lock(),
    )
}

/// Run the analysis with an explicit entropy source and output
pub fn run_with<E: EntropyProvider, W: Write>(
    config: &AppConfig,
    samples: Option<usize>,
    classical_seed: Option<u64>,
    entropy: &E,
    out: &mut W,
) -> Result<()> {
    let mut settings = config.analysis.clone();
    if let Some(samples) = samples {
        settings.samples = samples;
    }
    if classical_seed.is_some() {
        settings.classical_seed = classical_seed;
    }
    let analysis = settings.to_analysis_config()?;

    info!("Sampling {} fresh generators", analysis.samples);
    let matrix = quantum_analysis(&analysis, entropy)?;
    matrix.write_report(out)?;
    out.flush()?;
    Ok(())
}
