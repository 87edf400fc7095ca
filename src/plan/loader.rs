//! CSV loading of investment plans for batch runs
//!
//! Expected columns: `contribution,years,frequency,annual_rate` with a
//! header row. Every loaded row is validated so downstream projections
//! never see an invalid plan.

use super::InvestmentPlan;
use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<InvestmentPlan>, Box<dyn Error>> {
    let file = File::open(path)?;
    load_plans_from_reader(file)
}

/// Load plans from any reader producing CSV with a header row
///
/// The first malformed or invalid row aborts the load with its row number
/// in the error.
pub fn load_plans_from_reader<R: Read>(reader: R) -> Result<Vec<InvestmentPlan>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut plans = Vec::new();

    for (idx, row) in rdr.deserialize().enumerate() {
        let plan: InvestmentPlan = row?;
        plan.validate()
            .map_err(|e| format!("row {}: {}", idx + 1, e))?;
        plans.push(plan);
    }

    debug!("loaded {} plans", plans.len());
    Ok(plans)
}
