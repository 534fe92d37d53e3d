//! Sample command implementation
//!
//! Prints the first values of a generator's stream, one per line.

use std::io::Write;

use quantum_core::EntangledStreamGenerator;
use tracing::info;

use crate::{CliError, Result};

/// Run the sample command
pub fn run(seed: Option<u64>, count: usize) -> Result<()> {
    let stdout = std::io::stdout();
    run_with(seed, count, &mut stdout.lock())
}

/// Write `count` stream values to `out`
pub fn run_with<W: Write>(seed: Option<u64>, count: usize, out: &mut W) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be positive".to_string(),
        ));
    }

    let mut generator = EntangledStreamGenerator::new(seed);
    info!("Sampling {} values with seed {}", count, generator.seed());

    writeln!(out, "# seed {}", generator.seed())?;
    for _ in 0..count {
        writeln!(out, "{:.17}", generator.next())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_output() {
        let mut out = Vec::new();
        run_with(Some(42), 4, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("# seed 42"));
        let values: Vec<f64> = lines.map(|l| l.parse().unwrap()).collect();
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_sample_zero_count() {
        let result = run_with(Some(1), 0, &mut Vec::<u8>::new());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
