//! Derived reporting quantities and the printable investment summary
//!
//! Everything here is presentation: computed from a plan and its projection
//! result, never by the calculator itself.

use serde::Serialize;
use std::fmt;

use crate::growth::{GrowthResult, MILLIONS};
use crate::plan::InvestmentPlan;

/// Total amount contributed over the horizon
pub fn total_principal(plan: &InvestmentPlan) -> f64 {
    plan.contribution * plan.frequency as f64 * plan.years as f64
}

/// Earnings on top of the contributed principal
pub fn total_earnings(plan: &InvestmentPlan, result: &GrowthResult) -> f64 {
    result.final_value - total_principal(plan)
}

/// Printable summary of a projected plan
///
/// Monetary totals are kept in raw currency units; `Display` renders the
/// principal, earnings, and combined total in millions.
#[derive(Debug, Clone, Serialize)]
pub struct InvestmentSummary {
    /// Investment horizon in years
    pub years: u32,
    /// Annual rate as a decimal fraction
    pub annual_rate: f64,
    /// Contributions per year
    pub frequency: u32,
    /// Amount of each contribution
    pub contribution: f64,
    /// Total contributed principal
    pub total_principal: f64,
    /// Earnings above principal
    pub total_earnings: f64,
    /// Principal + earnings at the end of the horizon
    pub total_value: f64,
}

impl InvestmentSummary {
    pub fn new(plan: &InvestmentPlan, result: &GrowthResult) -> Self {
        let principal = total_principal(plan);
        Self {
            years: plan.years,
            annual_rate: plan.annual_rate,
            frequency: plan.frequency,
            contribution: plan.contribution,
            total_principal: principal,
            total_earnings: result.final_value - principal,
            total_value: result.final_value,
        }
    }
}

impl fmt::Display for InvestmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Investment Duration: {} years", self.years)?;
        writeln!(f, "Interest Rate: {:.2}% annually", self.annual_rate * 100.0)?;
        writeln!(f, "Investment Frequency: {} times per year", self.frequency)?;
        writeln!(f, "Each Investment: ${:.0}", self.contribution)?;
        writeln!(
            f,
            "Total Principal: ${:.3} million",
            self.total_principal / MILLIONS
        )?;
        writeln!(
            f,
            "Total Earnings: ${:.2} million",
            self.total_earnings / MILLIONS
        )?;
        write!(
            f,
            "Total Investment (Principal + Earnings): ${:.2} million",
            self.total_value / MILLIONS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn golden_pair() -> (InvestmentPlan, GrowthResult) {
        let plan = InvestmentPlan {
            contribution: 4000.0,
            years: 35,
            frequency: 12,
            annual_rate: 0.12,
        };
        let result = crate::growth::compute(&plan).expect("plan is valid");
        (plan, result)
    }

    #[test]
    fn test_derived_totals() {
        let (plan, result) = golden_pair();
        assert_eq!(total_principal(&plan), 1_680_000.0);
        assert_relative_eq!(
            total_earnings(&plan, &result),
            result.final_value - 1_680_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_summary_fields() {
        let (plan, result) = golden_pair();
        let summary = InvestmentSummary::new(&plan, &result);
        assert_eq!(summary.years, 35);
        assert_eq!(summary.total_principal, 1_680_000.0);
        assert_eq!(summary.total_value, result.final_value);
        assert_eq!(
            summary.total_earnings,
            summary.total_value - summary.total_principal
        );
    }

    #[test]
    fn test_summary_display_lines() {
        let (plan, result) = golden_pair();
        let text = InvestmentSummary::new(&plan, &result).to_string();
        assert!(text.contains("Investment Duration: 35 years"));
        assert!(text.contains("Interest Rate: 12.00% annually"));
        assert!(text.contains("Investment Frequency: 12 times per year"));
        assert!(text.contains("Each Investment: $4000"));
        assert!(text.contains("Total Principal: $1.680 million"));
        assert!(text.contains("Total Investment (Principal + Earnings): $22.12 million"));
    }

    #[test]
    fn test_zero_rate_summary_has_no_earnings() {
        let plan = InvestmentPlan {
            contribution: 100.0,
            years: 5,
            frequency: 1,
            annual_rate: 0.0,
        };
        let result = crate::growth::compute(&plan).expect("plan is valid");
        let summary = InvestmentSummary::new(&plan, &result);
        assert_eq!(summary.total_principal, 500.0);
        assert_eq!(summary.total_earnings, 0.0);
    }
}
