//! Auto-Invest - compound-growth projection engine for periodic investment plans
//!
//! This library provides:
//! - Accumulated-value projection for automatic contribution plans
//! - Year-by-year growth trajectories for charting (reported in $M)
//! - Derived reporting quantities and printable summaries
//! - Plan batch loading from CSV
//! - SVG line-chart rendering with configurable styling

pub mod plan;
pub mod growth;
pub mod report;
pub mod chart;

// Re-export commonly used types
pub use plan::{InvalidPlanError, InvestmentPlan, PlanParams};
pub use growth::{compute, GrowthCalculator, GrowthConfig, GrowthResult};
pub use report::{total_earnings, total_principal, InvestmentSummary};
pub use chart::ChartStyle;
