//! CSV export of the yearly projection

use std::io::Write;
use std::path::Path;

use greensteel_domain::Projection;
use greensteel_types::Result;

/// Export the projection to a CSV file, one row per year
pub fn export_to_csv(projection: &Projection, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(projection, file)
}

pub fn write_csv<W: Write>(projection: &Projection, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    let kinds = projection.resource_kinds();

    let mut header = vec!["year".to_string(), "other_costs".to_string()];
    header.extend(kinds.iter().map(|k| format!("{}_cost", k.key())));
    header.extend(
        ["total_cost", "production", "cost_per_ton", "traditional_price"]
            .iter()
            .map(|s| s.to_string()),
    );
    writer.write_record(&header)?;

    for row in &projection.rows {
        let mut record = vec![row.year.to_string(), row.other_costs.to_string()];
        record.extend(row.resource_costs.iter().map(|c| c.cost.to_string()));
        record.push(row.total_cost.to_string());
        record.push(row.production.to_string());
        record.push(row.cost_per_ton.to_string());
        record.push(projection.traditional_price.to_string());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
