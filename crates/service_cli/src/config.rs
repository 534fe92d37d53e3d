//! Application configuration management
//!
//! Loads settings from defaults, a TOML file, environment variables and CLI
//! arguments, in increasing order of precedence.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use quantum_art::{AnalysisConfig, RenderConfig};
use serde::Deserialize;
use thiserror::Error;

/// Seed used by the full show when no render seed is configured.
pub const SHOW_SEED: u64 = 42;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Render(#[from] quantum_art::ArtError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Fractal render settings as written in the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Stream seed; absent means wall-clock entropy
    pub seed: Option<u64>,
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    pub row_delay_ms: u64,
    pub frame_delay_ms: u64,
    /// Accepted and validated, not applied to the grid
    pub density: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let render = RenderConfig::default();
        Self {
            seed: None,
            width: render.width(),
            height: render.height(),
            frames: render.frames(),
            row_delay_ms: render.row_delay().as_millis() as u64,
            frame_delay_ms: render.frame_delay().as_millis() as u64,
            density: render.density(),
        }
    }
}

impl RenderSettings {
    /// Build the validated renderer configuration
    pub fn to_render_config(&self) -> Result<RenderConfig, ConfigError> {
        Ok(RenderConfig::builder()
            .width(self.width)
            .height(self.height)
            .frames(self.frames)
            .row_delay(Duration::from_millis(self.row_delay_ms))
            .frame_delay(Duration::from_millis(self.frame_delay_ms))
            .density(self.density)
            .build()?)
    }
}

/// Correlation analysis settings as written in the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub samples: usize,
    /// Seed for the classical normal sampler; absent means wall-clock entropy
    pub classical_seed: Option<u64>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        let analysis = AnalysisConfig::default();
        Self {
            samples: analysis.samples,
            classical_seed: analysis.classical_seed,
        }
    }
}

impl AnalysisSettings {
    /// Build the validated analysis configuration
    pub fn to_analysis_config(&self) -> Result<AnalysisConfig, ConfigError> {
        let config = AnalysisConfig {
            samples: self.samples,
            classical_seed: self.classical_seed,
            ..AnalysisConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Pause after the show banner
    pub intro_delay_ms: u64,
    pub render: RenderSettings,
    pub analysis: AnalysisSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            intro_delay_ms: 1000,
            render: RenderSettings::default(),
            analysis: AnalysisSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from process environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields from an environment lookup
    ///
    /// Recognised keys: `QUANTUM_LOG_LEVEL`, `QUANTUM_SEED`, `QUANTUM_WIDTH`,
    /// `QUANTUM_HEIGHT`, `QUANTUM_SAMPLES`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("QUANTUM_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup("QUANTUM_SEED") {
            self.render.seed = Some(parse_env("QUANTUM_SEED", &seed)?);
        }
        if let Some(width) = lookup("QUANTUM_WIDTH") {
            self.render.width = parse_env("QUANTUM_WIDTH", &width)?;
        }
        if let Some(height) = lookup("QUANTUM_HEIGHT") {
            self.render.height = parse_env("QUANTUM_HEIGHT", &height)?;
        }
        if let Some(samples) = lookup("QUANTUM_SAMPLES") {
            self.analysis.samples = parse_env("QUANTUM_SAMPLES", &samples)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.to_render_config()?;
        self.analysis.to_analysis_config()?;
        Ok(())
    }

    /// Seed used by the full show
    pub fn show_seed(&self) -> u64 {
        self.render.seed.unwrap_or(SHOW_SEED)
    }

    /// Pause after the show banner
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: raw.to_string(),
    })
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag (forces debug logging)
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
