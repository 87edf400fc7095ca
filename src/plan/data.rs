//! Plan value object, serde-facing parameters, and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a plan violates the horizon or frequency invariant
///
/// This is the only locally detectable failure: every other parameter
/// combination (zero contribution, zero or negative rate) is accepted and
/// produces a numeric result, however degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPlanError {
    /// Investment horizon shorter than one year
    #[error("investment horizon must be at least 1 year (got {0})")]
    HorizonTooShort(u32),

    /// Fewer than one contribution per year
    #[error("contribution frequency must be at least 1 per year (got {0})")]
    FrequencyTooLow(u32),
}

/// A periodic (automatic) investment plan
///
/// Four scalars fully describe the plan; there is no identity beyond the
/// values. `years` and `frequency` must both be at least 1; the validating
/// constructor enforces that, and the calculator re-checks it on every
/// projection so literal-constructed plans cannot slip through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Amount invested at each interval
    pub contribution: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Number of contributions per year (1 = annual, 12 = monthly)
    pub frequency: u32,

    /// Nominal annual interest rate as a decimal fraction (0.12 = 12%)
    pub annual_rate: f64,
}

impl InvestmentPlan {
    /// Validating constructor
    pub fn new(
        contribution: f64,
        years: u32,
        frequency: u32,
        annual_rate: f64,
    ) -> Result<Self, InvalidPlanError> {
        let plan = Self {
            contribution,
            years,
            frequency,
            annual_rate,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Check the horizon and frequency invariants
    pub fn validate(&self) -> Result<(), InvalidPlanError> {
        if self.years < 1 {
            return Err(InvalidPlanError::HorizonTooShort(self.years));
        }
        if self.frequency < 1 {
            return Err(InvalidPlanError::FrequencyTooLow(self.frequency));
        }
        Ok(())
    }

    /// Annual rate divided by frequency, applied per sub-year period
    pub fn period_rate(&self) -> f64 {
        self.annual_rate / self.frequency as f64
    }
}

/// Parameters for building a plan from a form or request body
///
/// Every field is optional on the wire; defaults mirror the calculator
/// form: $4,000 contributed monthly at a 12% annual rate over 35 years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanParams {
    /// Amount invested at each interval
    #[serde(default = "default_contribution")]
    pub contribution: f64,

    /// Investment horizon in whole years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Contributions per year
    #[serde(default = "default_frequency")]
    pub frequency: u32,

    /// Annual rate as a decimal fraction
    #[serde(default = "default_annual_rate", alias = "rate")]
    pub annual_rate: f64,
}

fn default_contribution() -> f64 {
    4000.0
}
fn default_years() -> u32 {
    35
}
fn default_frequency() -> u32 {
    12
}
fn default_annual_rate() -> f64 {
    0.12
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            contribution: 4000.0,
            years: 35,
            frequency: 12,
            annual_rate: 0.12,
        }
    }
}

impl PlanParams {
    /// Validate and convert into an `InvestmentPlan`
    pub fn build(&self) -> Result<InvestmentPlan, InvalidPlanError> {
        InvestmentPlan::new(self.contribution, self.years, self.frequency, self.annual_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plan() {
        let plan = InvestmentPlan::new(4000.0, 35, 12, 0.12).expect("plan should be valid");
        assert_eq!(plan.years, 35);
        assert_eq!(plan.frequency, 12);
        assert!((plan.period_rate() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_zero_years_rejected() {
        let err = InvestmentPlan::new(4000.0, 0, 12, 0.12).unwrap_err();
        assert_eq!(err, InvalidPlanError::HorizonTooShort(0));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let err = InvestmentPlan::new(4000.0, 35, 0, 0.12).unwrap_err();
        assert_eq!(err, InvalidPlanError::FrequencyTooLow(0));
    }

    #[test]
    fn test_horizon_checked_before_frequency() {
        let err = InvestmentPlan::new(4000.0, 0, 0, 0.12).unwrap_err();
        assert_eq!(err, InvalidPlanError::HorizonTooShort(0));
    }

    #[test]
    fn test_degenerate_rates_and_contributions_accepted() {
        // Zero or negative rates and a zero contribution are all legal
        assert!(InvestmentPlan::new(0.0, 1, 1, 0.0).is_ok());
        assert!(InvestmentPlan::new(100.0, 10, 4, -0.25).is_ok());
        assert!(InvestmentPlan::new(100.0, 10, 4, 5.0).is_ok());
    }

    #[test]
    fn test_params_defaults() {
        let plan = PlanParams::default().build().expect("defaults are valid");
        assert_eq!(plan.contribution, 4000.0);
        assert_eq!(plan.years, 35);
        assert_eq!(plan.frequency, 12);
        assert_eq!(plan.annual_rate, 0.12);
    }

    #[test]
    fn test_params_fill_missing_fields() {
        let params: PlanParams = serde_json::from_str(r#"{"years": 10}"#).unwrap();
        assert_eq!(params.years, 10);
        assert_eq!(params.contribution, 4000.0);
        assert_eq!(params.frequency, 12);
    }

    #[test]
    fn test_params_rate_alias() {
        let params: PlanParams = serde_json::from_str(r#"{"rate": 0.07}"#).unwrap();
        assert_eq!(params.annual_rate, 0.07);
    }

    #[test]
    fn test_params_build_rejects_bad_horizon() {
        let params: PlanParams = serde_json::from_str(r#"{"years": 0}"#).unwrap();
        assert_eq!(params.build().unwrap_err(), InvalidPlanError::HorizonTooShort(0));
    }
}
