//! Quantum-classical correlation analysis.
//!
//! Each sample pairs one classical standard-normal draw with the first
//! output of a freshly constructed, unseeded generator. Both values are
//! rounded to one decimal and tallied in a two-level ordered table.
//! Using a fresh generator per sample (rather than advancing one shared
//! generator) is what gives the report its shape.

use std::collections::BTreeMap;
use std::io::Write;

use quantum_core::rng::{EntropyProvider, StreamRng, SystemClockEntropy};
use quantum_core::EntangledStreamGenerator;
use tracing::{info, trace};

use crate::config::AnalysisConfig;
use crate::error::ArtError;

/// Glyph repeated in the tally bars.
pub const BAR: char = '▮';

/// Counts represented by one bar glyph.
pub const COUNTS_PER_BAR: u32 = 5;

/// Rounds a value to one decimal place, expressed in tenths.
///
/// ```rust
/// use quantum_art::analysis::bucket;
///
/// assert_eq!(bucket(0.34), 3);
/// assert_eq!(bucket(-1.26), -13);
/// assert_eq!(bucket(0.96), 10);
/// ```
#[inline]
pub fn bucket(value: f64) -> i64 {
    (value * 10.0).round() as i64
}

/// Formats a bucket as a one-decimal number.
#[inline]
pub fn format_bucket(tenths: i64) -> String {
    format!("{:.1}", tenths as f64 / 10.0)
}

/// Co-occurrence counts keyed by (classical bucket, quantum bucket).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorrelationMatrix {
    counts: BTreeMap<i64, BTreeMap<i64, u32>>,
    total: u32,
}

impl CorrelationMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies one (classical, quantum) pair.
    pub fn record(&mut self, classical: f64, quantum: f64) {
        *self
            .counts
            .entry(bucket(classical))
            .or_default()
            .entry(bucket(quantum))
            .or_default() += 1;
        self.total += 1;
    }

    /// Count for the pair of buckets the two values round into.
    pub fn count(&self, classical: f64, quantum: f64) -> u32 {
        self.counts
            .get(&bucket(classical))
            .and_then(|row| row.get(&bucket(quantum)))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of recorded pairs.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Iterates classical buckets in ascending order with their rows.
    pub fn rows(&self) -> impl Iterator<Item = (i64, &BTreeMap<i64, u32>)> {
        self.counts.iter().map(|(&k, row)| (k, row))
    }

    /// Writes the textual report.
    ///
    /// ```rust
    /// use quantum_art::analysis::CorrelationMatrix;
    ///
    /// let mut matrix = CorrelationMatrix::new();
    /// for _ in 0..6 {
    ///     matrix.record(0.04, 0.31);
    /// }
    ///
    /// let mut out = Vec::new();
    /// matrix.write_report(&mut out).unwrap();
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("Classical value 0.0:"));
    /// assert!(text.contains("  Quantum 0.3: 006  ▮"));
    /// ```
    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "\nQuantum-Classical Correlation Matrix:")?;
        for (classical, row) in self.rows() {
            writeln!(out, "\nClassical value {}:", format_bucket(classical))?;
            for (&quantum, &count) in row {
                let bars: String = std::iter::repeat(BAR)
                    .take((count / COUNTS_PER_BAR) as usize)
                    .collect();
                writeln!(
                    out,
                    "  Quantum {}: {:03}  {}",
                    format_bucket(quantum),
                    count,
                    bars
                )?;
            }
        }
        Ok(())
    }
}

/// Runs the analysis, seeding every fresh generator from `entropy`.
///
/// Per sample, the classical value is drawn before the generator is built.
///
/// # Errors
///
/// Returns `ArtError::InvalidParameter` if the configuration is invalid.
pub fn quantum_analysis<E: EntropyProvider>(
    config: &AnalysisConfig,
    entropy: &E,
) -> Result<CorrelationMatrix, ArtError> {
    config.validate()?;

    let classical_seed = config
        .classical_seed
        .unwrap_or_else(|| SystemClockEntropy.seed());
    let mut classical = StreamRng::from_seed(classical_seed);

    info!(
        samples = config.samples,
        classical_seed, "Running quantum-classical correlation analysis"
    );

    let mut matrix = CorrelationMatrix::new();
    for index in 0..config.samples {
        let value = classical.gen_normal();
        let mut generator = EntangledStreamGenerator::with_params(entropy.seed(), config.params);
        let quantum = generator.next();
        trace!(index, seed = generator.seed(), value, quantum, "Sample drawn");
        matrix.record(value, quantum);
    }

    info!(cells = matrix.rows().map(|(_, r)| r.len()).sum::<usize>(), "Analysis complete");
    Ok(matrix)
}
