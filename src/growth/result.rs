//! Projection output for a single plan

use serde::{Deserialize, Serialize};

use super::MILLIONS;

/// Accumulated value and year-end trajectory produced by a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Total accumulated amount (principal + earnings) at the end of the horizon
    pub final_value: f64,

    /// Running accumulated value at each year boundary, in millions
    ///
    /// One entry per projected year. Plans with a single contribution per
    /// year record no entries unless the calculator is configured to record
    /// them (see `GrowthConfig::record_annual_trajectory`).
    pub trajectory: Vec<f64>,
}

impl GrowthResult {
    /// Final accumulated value in millions
    pub fn final_value_millions(&self) -> f64 {
        self.final_value / MILLIONS
    }
}
