//! Compound-growth projection engine for periodic contribution plans

mod calculator;
mod result;

pub use calculator::{compute, GrowthCalculator, GrowthConfig};
pub use result::GrowthResult;

// ============================================================================
// Trajectory Scale
// ============================================================================
// Trajectory entries and the printed report are denominated in millions of
// currency units, the scale the growth chart plots against.

/// Divisor applied to accumulated values when reporting in millions ($M)
pub const MILLIONS: f64 = 1_000_000.0;
