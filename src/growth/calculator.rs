//! Accumulated-value calculation under compound interest
//!
//! The projection walks the horizon one year at a time. Plans with a single
//! contribution per year compound deposit and balance together; plans with
//! several contributions per year first value this year's deposits at the
//! per-period rate, then grow the carried balance at the full annual rate.

use super::{GrowthResult, MILLIONS};
use crate::plan::{InvalidPlanError, InvestmentPlan};

/// Knobs controlling trajectory recording
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthConfig {
    /// Record year-end trajectory entries for annual (`frequency == 1`) plans
    ///
    /// Off by default: annual plans historically report only the final
    /// value and leave the trajectory empty. Multi-period plans always
    /// record one entry per year regardless of this flag.
    pub record_annual_trajectory: bool,
}

/// Computes accumulated principal + earnings for an investment plan
///
/// The calculator is pure: no I/O, no printing, no plotting. Presentation
/// concerns live in the `report` and `chart` modules.
#[derive(Debug, Clone, Default)]
pub struct GrowthCalculator {
    config: GrowthConfig,
}

impl GrowthCalculator {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Project the plan over its horizon
    ///
    /// Returns the final accumulated value and the year-end trajectory in
    /// millions. Fails with `InvalidPlanError` when the plan's horizon or
    /// frequency is below one.
    pub fn compute(&self, plan: &InvestmentPlan) -> Result<GrowthResult, InvalidPlanError> {
        plan.validate()?;

        let period_rate = plan.period_rate();
        let annual_growth = 1.0 + plan.annual_rate;
        let record_annual = self.config.record_annual_trajectory;

        let mut trajectory = if plan.frequency > 1 || record_annual {
            Vec::with_capacity(plan.years as usize)
        } else {
            Vec::new()
        };

        let mut total = 0.0_f64;
        for _ in 0..plan.years {
            if plan.frequency == 1 {
                // The single deposit and the carried balance compound
                // together for the full year.
                total = (total + plan.contribution) * annual_growth;
                if record_annual {
                    trajectory.push(total / MILLIONS);
                }
            } else {
                // Year-end value of this year's deposits: the j-th of the
                // year's `frequency` contributions compounds at the period
                // rate for j whole periods, so their combined value is
                // sum of contribution * (1 + period_rate)^j for j = 1..=frequency.
                let mut periodic = 0.0_f64;
                let mut factor = 1.0_f64;
                for _ in 0..plan.frequency {
                    factor *= 1.0 + period_rate;
                    periodic += plan.contribution * factor;
                }

                // The carried balance grows at the full annual rate; this
                // year's deposits land on top.
                total = total * annual_growth + periodic;
                trajectory.push(total / MILLIONS);
            }
        }

        Ok(GrowthResult {
            final_value: total,
            trajectory,
        })
    }
}

/// Project a plan with the default configuration
pub fn compute(plan: &InvestmentPlan) -> Result<GrowthResult, InvalidPlanError> {
    GrowthCalculator::default().compute(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plan(contribution: f64, years: u32, frequency: u32, annual_rate: f64) -> InvestmentPlan {
        InvestmentPlan {
            contribution,
            years,
            frequency,
            annual_rate,
        }
    }

    #[test]
    fn test_rejects_zero_years() {
        let err = compute(&plan(100.0, 0, 12, 0.05)).unwrap_err();
        assert_eq!(err, InvalidPlanError::HorizonTooShort(0));
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let err = compute(&plan(100.0, 10, 0, 0.05)).unwrap_err();
        assert_eq!(err, InvalidPlanError::FrequencyTooLow(0));
    }

    #[test]
    fn test_single_year_zero_rate_boundary() {
        // One $100 deposit, one year, 0%: nothing compounds
        let result = compute(&plan(100.0, 1, 1, 0.0)).unwrap();
        assert_eq!(result.final_value, 100.0);
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn test_zero_rate_annual_plan_accumulates_principal_exactly() {
        // With a growth factor of 1 the total is exactly contribution * years
        let result = compute(&plan(250.5, 4, 1, 0.0)).unwrap();
        assert_eq!(result.final_value, 1002.0);
    }

    #[test]
    fn test_annual_plan_matches_direct_simulation() {
        // frequency == 1 reduces to repeating (total + c) * (1 + r)
        let years = 17;
        let c = 1250.0;
        let r = 0.045;
        let mut expected = 0.0_f64;
        for _ in 0..years {
            expected = (expected + c) * (1.0 + r);
        }

        let result = compute(&plan(c, years, 1, r)).unwrap();
        assert_eq!(result.final_value, expected);
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn test_record_annual_trajectory_flag() {
        let baseline = compute(&plan(1000.0, 3, 1, 0.05)).unwrap();
        assert_relative_eq!(baseline.final_value, 3310.125, max_relative = 1e-12);
        assert!(baseline.trajectory.is_empty());

        let calculator = GrowthCalculator::new(GrowthConfig {
            record_annual_trajectory: true,
        });
        let traced = calculator.compute(&plan(1000.0, 3, 1, 0.05)).unwrap();
        assert_eq!(traced.final_value, baseline.final_value);
        assert_eq!(traced.trajectory.len(), 3);
        assert_eq!(*traced.trajectory.last().unwrap(), traced.final_value / MILLIONS);
    }

    #[test]
    fn test_trajectory_has_one_entry_per_year() {
        let result = compute(&plan(4000.0, 35, 12, 0.12)).unwrap();
        assert_eq!(result.trajectory.len(), 35);
        assert_eq!(*result.trajectory.last().unwrap(), result.final_value / MILLIONS);
    }

    #[test]
    fn test_final_value_grows_with_contribution() {
        let mut last = 0.0;
        for c in [100.0, 500.0, 1000.0, 2500.0, 10_000.0] {
            let fv = compute(&plan(c, 20, 12, 0.07)).unwrap().final_value;
            assert!(fv > last, "final value should grow with the contribution");
            last = fv;
        }
    }

    #[test]
    fn test_final_value_grows_with_rate() {
        for frequency in [1, 12] {
            let mut last = f64::NEG_INFINITY;
            for r in [-0.5, -0.1, 0.0, 0.03, 0.12, 0.30] {
                let fv = compute(&plan(2000.0, 15, frequency, r)).unwrap().final_value;
                assert!(
                    fv > last,
                    "final value should grow with the rate (frequency {}, rate {})",
                    frequency,
                    r
                );
                last = fv;
            }
        }
    }

    #[test]
    fn test_matches_line_by_line_simulation() {
        // Deliberately naive rendition of the recurrence, powers computed
        // term by term, kept independent of the calculator's loop shape
        let p = plan(4000.0, 35, 12, 0.12);
        let period_rate = p.annual_rate / p.frequency as f64;
        let mut total = 0.0_f64;
        let mut expected_trajectory = Vec::new();
        for _ in 0..p.years {
            let mut yearly = 0.0_f64;
            for j in 1..=p.frequency {
                yearly += p.contribution * (1.0 + period_rate).powi(j as i32);
            }
            total = total * (1.0 + p.annual_rate);
            total += yearly;
            expected_trajectory.push(total / MILLIONS);
        }

        let result = compute(&p).unwrap();
        assert_relative_eq!(result.final_value, total, max_relative = 1e-12);
        assert_eq!(result.trajectory.len(), expected_trajectory.len());
        for (got, want) in result.trajectory.iter().zip(&expected_trajectory) {
            assert_relative_eq!(*got, *want, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_golden_monthly_plan() {
        // $4,000 monthly for 35 years at 12% accumulates to about $22.12M
        let result = compute(&plan(4000.0, 35, 12, 0.12)).unwrap();
        assert_relative_eq!(result.final_value, 22_117_277.323614404, max_relative = 1e-9);
        assert_relative_eq!(result.trajectory[0], 0.05123731217331576, max_relative = 1e-9);
        assert_relative_eq!(result.trajectory[9], 0.8991500170045833, max_relative = 1e-9);
        assert_relative_eq!(result.trajectory[34], 22.117277323614402, max_relative = 1e-9);
    }

    #[test]
    fn test_negative_rate_stays_below_principal() {
        let result = compute(&plan(500.0, 2, 4, -0.08)).unwrap();
        assert_relative_eq!(result.final_value, 3651.8017535999998, max_relative = 1e-12);
        assert!(result.final_value < 500.0 * 4.0 * 2.0);
        assert_eq!(result.trajectory.len(), 2);
    }

    #[test]
    fn test_zero_contribution_stays_zero() {
        let result = compute(&plan(0.0, 10, 12, 0.12)).unwrap();
        assert_eq!(result.final_value, 0.0);
        assert!(result.trajectory.iter().all(|v| *v == 0.0));
    }
}
