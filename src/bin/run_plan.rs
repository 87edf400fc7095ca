//! Project a single investment plan from command line arguments
//!
//! Prints the accumulated value, optionally a full summary, the
//! year-by-year trajectory as a table or CSV, and an SVG chart

use anyhow::Context;
use auto_invest::chart::{self, ChartStyle};
use auto_invest::growth::{GrowthCalculator, GrowthConfig};
use auto_invest::plan::InvestmentPlan;
use auto_invest::report::InvestmentSummary;
use chrono::{Datelike, Local};
use clap::Parser;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "run_plan", about = "Project growth of a periodic investment plan")]
struct Args {
    /// Amount invested each period, in dollars
    #[arg(short = 'c', long, default_value_t = 4000.0)]
    contribution: f64,

    /// Investment horizon in years
    #[arg(short = 'y', long, default_value_t = 35)]
    years: u32,

    /// Contributions per year (12 = monthly, 1 = annual)
    #[arg(short = 'f', long, default_value_t = 12)]
    frequency: u32,

    /// Annual growth rate as a decimal (0.12 = 12%)
    #[arg(short = 'r', long, default_value_t = 0.12)]
    rate: f64,

    /// Record the trajectory for annual plans too
    #[arg(long)]
    annual_trajectory: bool,

    /// Print the principal/earnings summary
    #[arg(long)]
    details: bool,

    /// Print the year-by-year trajectory table
    #[arg(long)]
    show_trajectory: bool,

    /// First calendar year of the plan (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Write the trajectory to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Save the trajectory chart
    #[arg(long)]
    chart: bool,

    /// Chart output path (implies --chart)
    #[arg(long)]
    chart_out: Option<PathBuf>,

    /// JSON file with chart style overrides
    #[arg(long)]
    style: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let plan = match InvestmentPlan::new(args.contribution, args.years, args.frequency, args.rate)
    {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("invalid plan: {e}");
            std::process::exit(1);
        }
    };

    let config = GrowthConfig {
        record_annual_trajectory: args.annual_trajectory,
    };
    let result = GrowthCalculator::new(config).compute(&plan)?;

    if args.details {
        println!("{}", InvestmentSummary::new(&plan, &result));
        println!();
    }

    println!(
        "Accumulated value after {} years: ${:.2} (${:.2} million)",
        plan.years,
        result.final_value,
        result.final_value_millions()
    );

    let start_year = args.start_year.unwrap_or_else(|| Local::now().year());

    if args.show_trajectory {
        println!();
        println!("{:<6} {:<14} {:<16}", "Year", "CalendarYear", "ValueMillions");
        for (i, value) in result.trajectory.iter().enumerate() {
            println!(
                "{:<6} {:<14} {:<16.6}",
                i + 1,
                start_year + i as i32,
                value
            );
        }
    }

    if let Some(path) = &args.csv {
        write_trajectory_csv(path, &result.trajectory, start_year)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Trajectory written to {}", path.display());
    }

    let mut style = match &args.style {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid chart style in {}", path.display()))?
        }
        None => ChartStyle::default(),
    };
    if args.chart {
        style.save = true;
    }
    if let Some(out) = args.chart_out {
        style.output_path = Some(out);
        style.save = true;
    }

    if style.save && result.trajectory.is_empty() {
        println!(
            "No trajectory recorded (annual plans skip it unless --annual-trajectory is set); \
             chart not written"
        );
    } else if let Some(path) = chart::save_chart(&result.trajectory, &style, &plan)? {
        println!("Chart written to {}", path.display());
    }

    Ok(())
}

fn write_trajectory_csv(path: &Path, trajectory: &[f64], start_year: i32) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Year,CalendarYear,ValueMillions")?;
    for (i, value) in trajectory.iter().enumerate() {
        writeln!(file, "{},{},{:.6}", i + 1, start_year + i as i32, value)?;
    }
    Ok(())
}
