//! Check command implementation
//!
//! Prints the resolved configuration and the parallel execution resources.

use serde::Serialize;
use tracing::info;

use crate::config::{OutputFormat, PricingRunConfig};
use crate::Result;

/// Environment and configuration summary
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub version: &'static str,
    /// Threads in the global rayon pool
    pub rayon_threads: usize,
    /// Hardware parallelism reported by the OS
    pub available_parallelism: Option<usize>,
    pub config: PricingRunConfig,
}

/// Collect the check report
pub fn collect(config: &PricingRunConfig) -> CheckReport {
    CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        rayon_threads: rayon::current_num_threads(),
        available_parallelism: std::thread::available_parallelism().ok().map(|n| n.get()),
        config: config.clone(),
    }
}

/// Render a report in the requested format
pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let config = toml::to_string_pretty(&report.config)
                .unwrap_or_else(|e| format!("# unable to render configuration: {}", e));
            Ok(format!(
                "\neuropt {}\n\
                 Rayon worker threads: {}\n\
                 Available parallelism: {}\n\
                 \n# Resolved configuration\n{}",
                report.version,
                report.rayon_threads,
                report
                    .available_parallelism
                    .map_or_else(|| "unknown".to_string(), |n| n.to_string()),
                config
            ))
        }
    }
}

/// Run the check command
pub fn run(config: &PricingRunConfig) -> Result<()> {
    let report = collect(config);
    info!(rayon_threads = report.rayon_threads, "Configuration valid");
    println!("{}", render(&report, config.output)?);
    Ok(())
}
