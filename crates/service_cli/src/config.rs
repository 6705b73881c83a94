//! Run configuration management
//!
//! Handles loading configuration from TOML files, `EUROPT_*` environment
//! variables, and CLI arguments.

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::{OptionMarketParameters, ParameterError};
use pricer_pricing::mc::{EngineError, MonteCarloConfig, NormalSampler, SeedPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid sampler: {0}. Must be one of: inverse-cdf, ziggurat")]
    InvalidSampler(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid market parameters: {0}")]
    InvalidMarket(#[from] ParameterError),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
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

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Parse a sampler name; accepts `inverse-cdf`, `inverse_cdf` and `ziggurat`.
pub fn parse_sampler(s: &str) -> Result<NormalSampler, ConfigError> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "inverse-cdf" | "icdf" => Ok(NormalSampler::InverseCdf),
        "ziggurat" => Ok(NormalSampler::Ziggurat),
        _ => Err(ConfigError::InvalidSampler(s.to_string())),
    }
}

/// `[market]` section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketSection {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub volatility: f64,
    pub maturity: f64,
}

impl Default for MarketSection {
    fn default() -> Self {
        let p = OptionMarketParameters::default();
        Self {
            spot: p.spot,
            strike: p.strike,
            rate: p.rate,
            volatility: p.volatility,
            maturity: p.maturity,
        }
    }
}

impl MarketSection {
    /// Market parameters for the pricers
    pub fn params(&self) -> OptionMarketParameters {
        OptionMarketParameters::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
        )
    }
}

/// `[monte_carlo]` section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MonteCarloSection {
    pub sample_count: u64,
    pub parallel: bool,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
    pub sampler: NormalSampler,
}

impl Default for MonteCarloSection {
    fn default() -> Self {
        Self {
            sample_count: 10_000_000,
            parallel: true,
            workers: None,
            seed: None,
            sampler: NormalSampler::InverseCdf,
        }
    }
}

/// `[pde]` section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PdeSection {
    pub time_steps: usize,
    /// Spatial intervals; derived from the stability bound when absent
    pub space_steps: Option<usize>,
}

impl Default for PdeSection {
    fn default() -> Self {
        Self {
            time_steps: 10_000,
            space_steps: None,
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingRunConfig {
    pub log_level: LogLevel,
    pub output: OutputFormat,
    pub market: MarketSection,
    pub monte_carlo: MonteCarloSection,
    pub pde: PdeSection,
}

impl PricingRunConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `EUROPT_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields from a variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).map(|v| (name, v));

        if let Some((_, v)) = var("EUROPT_LOG_LEVEL") {
            self.log_level = v.parse()?;
        }
        if let Some((_, v)) = var("EUROPT_OUTPUT") {
            self.output = v.parse()?;
        }

        if let Some((n, v)) = var("EUROPT_SPOT") {
            self.market.spot = parse_value(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_STRIKE") {
            self.market.strike = parse_value(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_RATE") {
            self.market.rate = parse_value(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_VOLATILITY") {
            self.market.volatility = parse_value(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_MATURITY") {
            self.market.maturity = parse_value(n, &v)?;
        }

        if let Some((n, v)) = var("EUROPT_SAMPLES") {
            self.monte_carlo.sample_count = parse_value(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_PARALLEL") {
            self.monte_carlo.parallel = parse_bool(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_WORKERS") {
            self.monte_carlo.workers = Some(parse_value(n, &v)?);
        }
        if let Some((n, v)) = var("EUROPT_SEED") {
            self.monte_carlo.seed = Some(parse_value(n, &v)?);
        }
        if let Some((_, v)) = var("EUROPT_SAMPLER") {
            self.monte_carlo.sampler = parse_sampler(&v)?;
        }

        if let Some((n, v)) = var("EUROPT_PDE_TIME_STEPS") {
            self.pde.time_steps = parse_value(n, &v)?;
        }
        if let Some((n, v)) = var("EUROPT_PDE_SPACE_STEPS") {
            self.pde.space_steps = Some(parse_value(n, &v)?);
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        }
        if let Some(output) = &cli.output {
            self.output = output.parse()?;
        }

        let m = &mut self.market;
        m.spot = cli.spot.unwrap_or(m.spot);
        m.strike = cli.strike.unwrap_or(m.strike);
        m.rate = cli.rate.unwrap_or(m.rate);
        m.volatility = cli.volatility.unwrap_or(m.volatility);
        m.maturity = cli.maturity.unwrap_or(m.maturity);

        let mc = &mut self.monte_carlo;
        mc.sample_count = cli.sample_count.unwrap_or(mc.sample_count);
        mc.parallel = cli.parallel.unwrap_or(mc.parallel);
        mc.workers = cli.workers.or(mc.workers);
        mc.seed = cli.seed.or(mc.seed);
        if let Some(sampler) = &cli.sampler {
            mc.sampler = parse_sampler(sampler)?;
        }

        self.pde.time_steps = cli.time_steps.unwrap_or(self.pde.time_steps);
        self.pde.space_steps = cli.space_steps.or(self.pde.space_steps);

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.market.params().validate()?;

        if self.monte_carlo.sample_count == 0 {
            return Err(ConfigError::InvalidValue {
                name: "sample_count",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        if self.monte_carlo.workers == Some(0) {
            return Err(ConfigError::InvalidValue {
                name: "workers",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        if self.pde.time_steps == 0 {
            return Err(ConfigError::InvalidValue {
                name: "time_steps",
                value: "0 (must be at least 1)".to_string(),
            });
        }

        Ok(())
    }

    /// Engine configuration for the Monte Carlo section
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, EngineError> {
        let mc = &self.monte_carlo;
        let mut builder = MonteCarloConfig::builder()
            .sample_count(mc.sample_count)
            .parallel(mc.parallel)
            .sampler(mc.sampler)
            .seed(mc.seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed));
        if let Some(workers) = mc.workers {
            builder = builder.workers(workers);
        }
        builder.build()
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}

/// Command-line overrides, all optional
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub output: Option<String>,
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub sample_count: Option<u64>,
    pub parallel: Option<bool>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
    pub sampler: Option<String>,
    pub time_steps: Option<usize>,
    pub space_steps: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<PricingRunConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => PricingRunConfig::from_file(path)?,
        None => PricingRunConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
