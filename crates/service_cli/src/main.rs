//! europt - European option pricing from the command line
//!
//! # Commands
//!
//! - `europt price` - Monte Carlo prices (sequential or parallel) vs Black-Scholes
//! - `europt analytic` - Closed-form Black-Scholes prices
//! - `europt pde` - Explicit finite-difference solution of the Black-Scholes PDE
//! - `europt check` - Resolved configuration and thread pool size
//!
//! # Configuration
//!
//! Settings are read from an optional TOML file, then `EUROPT_*` environment
//! variables, then command-line flags, each overriding the previous.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides};

/// European option pricer
#[derive(Parser)]
#[command(name = "europt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "EUROPT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Market parameter overrides shared by the pricing commands
#[derive(Args, Debug, Default)]
struct MarketArgs {
    /// Spot price S
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price K
    #[arg(long)]
    strike: Option<f64>,

    /// Continuously compounded risk-free rate r
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility σ (annualised)
    #[arg(long)]
    volatility: Option<f64>,

    /// Time to maturity T in years
    #[arg(long)]
    maturity: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put by Monte Carlo and compare with Black-Scholes
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of Monte Carlo samples
        #[arg(short = 'n', long)]
        samples: Option<u64>,

        /// Accumulate on a single thread
        #[arg(long, conflicts_with = "parallel")]
        sequential: bool,

        /// Accumulate on the rayon pool
        #[arg(long)]
        parallel: bool,

        /// Worker count for parallel runs (dedicated pool)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Fixed base seed; OS entropy when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Normal sampler (inverse-cdf, ziggurat)
        #[arg(long)]
        sampler: Option<String>,
    },

    /// Closed-form Black-Scholes prices
    Analytic {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Solve the Black-Scholes PDE with an explicit finite-difference scheme
    Pde {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of time steps M
        #[arg(short = 'm', long)]
        time_steps: Option<usize>,

        /// Number of spatial intervals N; largest stable value when omitted
        #[arg(short = 'N', long)]
        space_steps: Option<usize>,

        /// Write the full price grid to this file
        #[arg(long)]
        grid_output: Option<PathBuf>,
    },

    /// Check configuration and parallel resources
    Check,
}

impl MarketArgs {
    fn apply(&self, overrides: &mut CliOverrides) {
        overrides.spot = self.spot;
        overrides.strike = self.strike;
        overrides.rate = self.rate;
        overrides.volatility = self.volatility;
        overrides.maturity = self.maturity;
    }
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

fn overrides(cli: &Cli) -> CliOverrides {
    let mut overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        output: cli.format.clone(),
        ..Default::default()
    };

    match &cli.command {
        Commands::Price {
            market,
            samples,
            sequential,
            parallel,
            workers,
            seed,
            sampler,
        } => {
            market.apply(&mut overrides);
            overrides.sample_count = *samples;
            overrides.parallel = match (sequential, parallel) {
                (true, _) => Some(false),
                (_, true) => Some(true),
                _ => None,
            };
            overrides.workers = *workers;
            overrides.seed = *seed;
            overrides.sampler = sampler.clone();
        }
        Commands::Analytic { market } => market.apply(&mut overrides),
        Commands::Pde {
            market,
            time_steps,
            space_steps,
            ..
        } => {
            market.apply(&mut overrides);
            overrides.time_steps = *time_steps;
            overrides.space_steps = *space_steps;
        }
        Commands::Check => {}
    }

    overrides
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref(), &overrides(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Price { .. } => commands::price::run(&config),
        Commands::Analytic { .. } => commands::analytic::run(&config),
        Commands::Pde { grid_output, .. } => commands::pde::run(&config, grid_output.as_deref()),
        Commands::Check => commands::check::run(&config),
    }
}
