//! Plain-text projection report

use crate::model::Projection;

/// Round to a fixed number of decimal places for display.
/// Exact halves go to the even neighbour.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

pub fn generate_projection_report(projection: &Projection, currency: &str) -> String {
    let kinds = projection.resource_kinds();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("        Green Steel Production Cost Report        \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Projection years:      {}\n", projection.years()));
    report.push_str(&format!(
        "  Resources:             {}\n",
        kinds.iter().map(|k| k.label()).collect::<Vec<_>>().join(", ")
    ));
    report.push_str(&format!(
        "  Traditional price:     {}{:.4}/ton\n",
        currency, projection.traditional_price
    ));
    match projection.tipping_year {
        Some(year) => report.push_str(&format!("  Tipping calendar year: {}\n", year)),
        None => report.push_str("  Tipping calendar year: not reached within horizon\n"),
    }
    report.push_str(&format!(
        "  Target tipping year:   {}\n",
        projection.target_tipping_year
    ));
    report.push_str(&format!(
        "  Required subsidy:      {}{}/ton\n",
        currency,
        round_to(projection.required_subsidy, 4)
    ));
    report.push('\n');

    let width = 30 + 12 * kinds.len();
    report.push_str("[Cost Projection]\n");
    report.push_str("-".repeat(width).as_str());
    report.push('\n');
    report.push_str(&format!("{:>4} {:>12}", "Year", "Other"));
    for kind in &kinds {
        report.push_str(&format!(" {:>11}", truncate_str(kind.label(), 11)));
    }
    report.push_str(&format!(" {:>12}\n", "Cost/ton"));
    report.push_str("-".repeat(width).as_str());
    report.push('\n');
    for row in &projection.rows {
        report.push_str(&format!("{:>4} {:>12.2}", row.year, row.other_costs));
        for cost in &row.resource_costs {
            report.push_str(&format!(" {:>11.2}", cost.cost));
        }
        let marker = if row.cost_per_ton <= projection.traditional_price {
            " *"
        } else {
            ""
        };
        report.push_str(&format!(" {:>12.4}{}\n", row.cost_per_ton, marker));
    }
    report.push('\n');
    report.push_str("  * at or below traditional price\n\n");
    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
