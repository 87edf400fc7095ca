//! Run growth projections for an entire batch of plans from a CSV file
//!
//! Outputs per-plan results for comparison across plan configurations

use auto_invest::growth::{GrowthCalculator, MILLIONS};
use auto_invest::plan::load_plans;
use auto_invest::report::{total_earnings, total_principal};
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Totals accumulated across the batch
#[derive(Debug, Clone, Default)]
struct BatchTotals {
    principal: f64,
    earnings: f64,
    final_value: f64,
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    let input = env::args().nth(1).unwrap_or_else(|| "plans.csv".to_string());
    println!("Loading plans from {}...", input);

    let plans = load_plans(&input).expect("Failed to load plans");
    println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    let calculator = GrowthCalculator::default();

    println!("Running projections...");
    let proj_start = Instant::now();

    let results: Vec<_> = plans
        .iter()
        .map(|plan| {
            calculator
                .compute(plan)
                .expect("plans are validated at load time")
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Write output
    let output_path = "batch_growth_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Plan,Contribution,Frequency,Years,AnnualRate,FinalValue,PrincipalM,EarningsM,TotalM"
    )
    .unwrap();

    let mut totals = BatchTotals::default();
    for (idx, (plan, result)) in plans.iter().zip(&results).enumerate() {
        let principal = total_principal(plan);
        let earnings = total_earnings(plan, result);
        totals.principal += principal;
        totals.earnings += earnings;
        totals.final_value += result.final_value;

        writeln!(
            file,
            "{},{:.2},{},{},{:.4},{:.2},{:.6},{:.6},{:.6}",
            idx + 1,
            plan.contribution,
            plan.frequency,
            plan.years,
            plan.annual_rate,
            result.final_value,
            principal / MILLIONS,
            earnings / MILLIONS,
            result.final_value / MILLIONS,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    println!("\nBatch Summary:");
    println!("  Plans:     {}", plans.len());
    println!("  Principal: ${:.3}M", totals.principal / MILLIONS);
    println!("  Earnings:  ${:.3}M", totals.earnings / MILLIONS);
    println!("  Total:     ${:.3}M", totals.final_value / MILLIONS);

    println!("\nTotal time: {:?}", start.elapsed());
}
