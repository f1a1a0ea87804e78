//! Excel export functionality

use crate::chart::{build_chart, LineStyle};
use crate::projection_service::ProjectionOutcome;
use greensteel_domain::round_to;
use greensteel_types::{Error, Result};
use rust_xlsxwriter::{
    Chart, ChartFormat, ChartLine, ChartLineDashType, ChartType, Format, Workbook, Worksheet,
};
use std::path::Path;

const PROJECTION_SHEET: &str = "Projection";

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a projection outcome to an Excel workbook
pub fn export_to_excel(
    outcome: &ProjectionOutcome,
    output_path: &Path,
    currency: &str,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, outcome, currency)?;

    let projection_sheet = workbook.add_worksheet();
    write_projection_sheet(projection_sheet, outcome, currency)?;

    workbook.save(output_path).map_err(xlsx_err)?;

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    outcome: &ProjectionOutcome,
    currency: &str,
) -> Result<()> {
    let projection = &outcome.projection;
    let params = &outcome.parameters;

    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Green Steel Production Cost Projection", &header_format)
        .map_err(xlsx_err)?;

    let rows: [(&str, String); 8] = [
        ("Generated:", chrono::Local::now().to_rfc3339()),
        ("Source:", outcome.source.clone()),
        ("Projection years:", projection.years().to_string()),
        ("Fixed production (t):", params.fixed_production.to_string()),
        (
            "Traditional price:",
            format!("{}{}/ton", currency, projection.traditional_price),
        ),
        (
            "Tipping calendar year:",
            projection
                .tipping_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "not reached".to_string()),
        ),
        (
            "Target tipping year:",
            projection.target_tipping_year.to_string(),
        ),
        (
            "Required subsidy:",
            format!("{}{}/ton", currency, round_to(projection.required_subsidy, 4)),
        ),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 2) as u32;
        sheet.write_string(row, 0, *label).map_err(xlsx_err)?;
        sheet.write_string(row, 1, value).map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    sheet.set_column_width(1, 40).map_err(xlsx_err)?;

    Ok(())
}

fn write_projection_sheet(
    sheet: &mut Worksheet,
    outcome: &ProjectionOutcome,
    currency: &str,
) -> Result<()> {
    let projection = &outcome.projection;
    let kinds = projection.resource_kinds();

    sheet.set_name(PROJECTION_SHEET).map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    let mut headers = vec!["Year".to_string(), "Other Costs".to_string()];
    headers.extend(kinds.iter().map(|k| format!("{} Cost", k.label())));
    headers.extend(
        ["Total Cost", "Production (t)", "Cost per Ton", "Traditional Price"]
            .iter()
            .map(|s| s.to_string()),
    );

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(xlsx_err)?;
    }

    let cost_col = (headers.len() - 2) as u16;
    let traditional_col = (headers.len() - 1) as u16;

    for row in &projection.rows {
        let r = (row.year + 1) as u32;
        sheet.write_number(r, 0, row.year as f64).map_err(xlsx_err)?;
        sheet.write_number(r, 1, row.other_costs).map_err(xlsx_err)?;
        for (i, cost) in row.resource_costs.iter().enumerate() {
            sheet
                .write_number(r, (i + 2) as u16, cost.cost)
                .map_err(xlsx_err)?;
        }
        let col = (kinds.len() + 2) as u16;
        sheet.write_number(r, col, row.total_cost).map_err(xlsx_err)?;
        sheet.write_number(r, col + 1, row.production).map_err(xlsx_err)?;
        sheet.write_number(r, cost_col, row.cost_per_ton).map_err(xlsx_err)?;
        sheet
            .write_number(r, traditional_col, projection.traditional_price)
            .map_err(xlsx_err)?;
    }

    for col in 0..headers.len() {
        sheet.set_column_width(col as u16, 16).map_err(xlsx_err)?;
    }

    let spec = build_chart(projection, currency);
    let last_row = projection.years() as u32;
    let mut chart = Chart::new(ChartType::Line);
    for series in &spec.series {
        let col = if series.style == LineStyle::Dashed {
            traditional_col
        } else {
            cost_col
        };
        let chart_series = chart
            .add_series()
            .set_name(series.name.as_str())
            .set_categories((PROJECTION_SHEET, 1, 0, last_row, 0))
            .set_values((PROJECTION_SHEET, 1, col, last_row, col));
        if series.style == LineStyle::Dashed {
            chart_series.set_format(
                ChartFormat::new()
                    .set_line(ChartLine::new().set_dash_type(ChartLineDashType::Dash)),
            );
        }
    }
    chart.title().set_name(spec.title.as_str());
    chart.x_axis().set_name(spec.x_label.as_str());
    chart.y_axis().set_name(spec.y_label.as_str());

    sheet
        .insert_chart(last_row + 2, 0, &chart)
        .map_err(xlsx_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection_service::run_projection;
    use crate::source::ScenarioSource;
    use tempfile::tempdir;

    #[test]
    fn test_export_creates_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projection.xlsx");
        let outcome = run_projection(&ScenarioSource::defaults()).unwrap();
        export_to_excel(&outcome, &path, "£").unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
