//! Analytic command implementation
//!
//! Evaluates the closed-form Black-Scholes prices.

use pricer_models::analytical::BlackScholes;
use serde::Serialize;

use crate::config::{MarketSection, OutputFormat, PricingRunConfig};
use crate::Result;

/// Closed-form prices with their intermediate terms
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticReport {
    pub market: MarketSection,
    pub d1: f64,
    pub d2: f64,
    pub call: f64,
    pub put: f64,
    /// `call − put − (S − K·e^(−rT))`
    pub parity_error: f64,
}

/// Evaluate Black-Scholes for the configured market
pub fn evaluate(config: &PricingRunConfig) -> AnalyticReport {
    let params = config.market.params();
    let bs = BlackScholes::new(params);
    let result = bs.price();

    AnalyticReport {
        market: config.market,
        d1: bs.d1(),
        d2: bs.d2(),
        call: result.call,
        put: result.put,
        parity_error: result.parity_error(&params),
    }
}

/// Render a report in the requested format
pub fn render(report: &AnalyticReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let m = &report.market;
            Ok(format!(
                "\nBlack-Scholes (S={}, K={}, r={}, σ={}, T={})\n\
                 d1 = {:.6}, d2 = {:.6}\n\
                 Call price: {:.6}\n\
                 Put price:  {:.6}\n\
                 Parity error: {:.3e}\n",
                m.spot,
                m.strike,
                m.rate,
                m.volatility,
                m.maturity,
                report.d1,
                report.d2,
                report.call,
                report.put,
                report.parity_error
            ))
        }
    }
}

/// Run the analytic command
pub fn run(config: &PricingRunConfig) -> Result<()> {
    let report = evaluate(config);
    println!("{}", render(&report, config.output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_market_prices() {
        let report = evaluate(&PricingRunConfig::default());
        assert_abs_diff_eq!(report.call, 7.001702131168187, epsilon = 1e-9);
        assert_abs_diff_eq!(report.put, 7.368497458736016, epsilon = 1e-9);
        assert!(report.parity_error.abs() < 1e-9);
        assert_abs_diff_eq!(report.d1 - report.d2, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_render_formats() {
        let report = evaluate(&PricingRunConfig::default());

        let table = render(&report, OutputFormat::Table).unwrap();
        assert!(table.contains("Call price: 7.001702"));

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["market"]["spot"], 90.0);
    }
}
