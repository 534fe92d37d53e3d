//! Quantum CLI - Entangled Randomness Fractal Display
//!
//! Operational entry point for the entangled stream generator.
//!
//! # Commands
//!
//! - `quantum show` - Banner, seeded fractal animation, correlation report
//! - `quantum render` - Fractal animation only
//! - `quantum analyze` - Quantum-classical correlation report only
//! - `quantum sample` - Print raw stream values
//!
//! Running `quantum` with no subcommand is the same as `quantum show`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Entangled randomness fractal display
#[derive(Parser)]
#[command(name = "quantum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full display: banner, fractal, correlation report
    Show,

    /// Render the animated fractal
    Render {
        /// Stream seed (defaults to wall-clock entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Density in [0, 1] (accepted, not applied to the grid)
        #[arg(short, long)]
        density: Option<f64>,

        /// Grid width in cells
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in rows
        #[arg(long)]
        height: Option<usize>,

        /// Number of animation frames
        #[arg(short, long)]
        frames: Option<usize>,
    },

    /// Tally fresh-generator outputs against classical normal draws
    Analyze {
        /// Number of samples (one fresh generator each)
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Seed for the classical normal sampler
        #[arg(long)]
        classical_seed: Option<u64>,
    },

    /// Print raw values from a generator
    Sample {
        /// Stream seed (defaults to wall-clock entropy)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level.as_filter_str());
    info!("Quantum CLI v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::show::run(&config),
        Commands::Render {
            seed,
            density,
            width,
            height,
            frames,
        } => {
            let overrides = commands::render::RenderOverrides {
                seed,
                density,
                width,
                height,
                frames,
            };
            commands::render::run(&config, &overrides)
        }
        Commands::Analyze {
            samples,
            classical_seed,
        } => commands::analyze::run(&config, samples, classical_seed),
        Commands::Sample { seed, count } => commands::sample::run(seed, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_show() {
        let cli = Cli::try_parse_from(["quantum"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_render_arguments() {
        let cli = Cli::try_parse_from([
            "quantum", "render", "--seed", "42", "--density", "0.5", "--width", "20", "-f", "1",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Render {
                seed,
                density,
                width,
                height,
                frames,
            }) => {
                assert_eq!(seed, Some(42));
                assert_eq!(density, Some(0.5));
                assert_eq!(width, Some(20));
                assert_eq!(height, None);
                assert_eq!(frames, Some(1));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["quantum", "sample", "-n", "3", "--verbose", "--log-level", "info"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level.as_deref(), Some("info"));
        assert!(matches!(
            cli.command,
            Some(Commands::Sample {
                seed: None,
                count: 3
            })
        ));
    }
}
