//! Output formatting module

use greensteel_app::projection_service::ProjectionOutcome;
use greensteel_domain::{generate_projection_report, round_to};
use greensteel_types::{OutputFormat, Result};

pub fn output_projection(
    output_format: OutputFormat,
    outcome: &ProjectionOutcome,
    currency: &str,
) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(outcome)?;
            println!("{}", content);
        }
        OutputFormat::Report => {
            print!("{}", generate_projection_report(&outcome.projection, currency));
        }
        OutputFormat::Table => print_table(outcome, currency),
    }
    Ok(())
}

fn print_table(outcome: &ProjectionOutcome, currency: &str) {
    let projection = &outcome.projection;

    println!("\nCost Projection");
    println!("===============");
    println!("Source:            {}", outcome.source);
    println!(
        "Production:        {} t/year",
        outcome.parameters.fixed_production
    );
    println!(
        "Traditional price: {}{}/ton",
        currency, projection.traditional_price
    );

    println!("\n{:>4}  {:>14}  {:>12}", "Year", "Total cost", "Cost/ton");
    println!("{}", "-".repeat(34));
    for row in &projection.rows {
        println!(
            "{:>4}  {:>14.2}  {:>12.4}",
            row.year, row.total_cost, row.cost_per_ton
        );
    }
    println!("{}", "-".repeat(34));

    match projection.tipping_year {
        Some(year) => println!("Tipping calendar year: {}", year),
        None => println!("Tipping calendar year: not reached"),
    }
    println!(
        "Required subsidy at year {}: {}{}/ton",
        projection.target_tipping_year,
        currency,
        round_to(projection.required_subsidy, 4)
    );
}
