//! Compare Rust growth engine with spreadsheet reference values
//! Test case: $4000 monthly for 35 years at 12% annual growth

use auto_invest::growth::compute;
use auto_invest::plan::InvestmentPlan;

fn main() {
    // Reference inputs: $4000/month, 35 years, 12% annual
    let plan = InvestmentPlan {
        contribution: 4000.0,
        years: 35,
        frequency: 12,
        annual_rate: 0.12,
    };

    let result = compute(&plan).expect("reference plan is valid");

    println!("Rust vs spreadsheet comparison ($4000/mo, 35y, 12%)");
    println!(
        "{:<6} {:<20} {:<20} {:<14}",
        "Year", "Rust_M", "Reference_M", "Diff"
    );

    // Spreadsheet reference values (accumulated $M at end of each year)
    let reference = [
        (1usize, 0.05123731217331576),
        (2, 0.10862310180742943),
        (3, 0.17289518619763675),
        (4, 0.24487992071466894),
        (5, 0.325502823373745),
        (6, 0.4158004743519102),
        (7, 0.5169338434474552),
        (8, 0.6302032168344657),
        (9, 0.7570649150279174),
        (10, 0.8991500170045833),
        (15, 1.910112377790912),
        (20, 3.6917734863509373),
        (25, 6.83166912330259),
        (30, 12.365238085200303),
        (35, 22.117277323614402),
    ];

    for (year, reference_m) in reference.iter() {
        let rust_m = result.trajectory[year - 1];
        let diff = rust_m - reference_m;

        println!(
            "{:<6} {:<20.12} {:<20.12} {:<14.3e}",
            year, rust_m, reference_m, diff
        );
    }

    let reference_final = 22_117_277.323614404_f64;
    println!(
        "\nFinal value: ${:.2} (reference ${:.2}, diff {:.3e})",
        result.final_value,
        reference_final,
        result.final_value - reference_final
    );
}
