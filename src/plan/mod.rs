//! Investment plan data structures and CSV loading

mod data;
pub mod loader;

pub use data::{InvalidPlanError, InvestmentPlan, PlanParams};
pub use loader::{load_plans, load_plans_from_reader};
