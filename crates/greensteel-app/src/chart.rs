//! Chart description for the cost-per-ton projection
//!
//! Rendering backends (the Excel exporter, or any external plotting tool fed
//! with the JSON form) draw exactly what is described here.

use greensteel_domain::{round_to, Projection};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

/// Text label pointing at `(x, y)` with its text placed at `(text_x, text_y)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnnotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub text_x: f64,
    pub text_y: f64,
}

/// Vertical dashed segment at `x` between `y_min` and `y_max`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerticalMarker {
    pub label: String,
    pub x: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
    pub annotations: Vec<ChartAnnotation>,
    pub markers: Vec<VerticalMarker>,
}

pub fn build_chart(projection: &Projection, currency: &str) -> ChartSpec {
    let target = projection.target_tipping_year;
    let traditional = projection.traditional_price;
    let target_cost = projection.cost_per_ton(target).unwrap_or(traditional);

    let series = vec![
        ChartSeries {
            name: "Traditional Price".to_string(),
            style: LineStyle::Dashed,
            points: projection
                .rows
                .iter()
                .map(|r| (r.year as f64, traditional))
                .collect(),
        },
        ChartSeries {
            name: "Cost per Ton".to_string(),
            style: LineStyle::Solid,
            points: projection
                .cost_per_ton_series()
                .into_iter()
                .map(|(year, cost)| (year as f64, cost))
                .collect(),
        },
    ];

    let mut annotations = vec![ChartAnnotation {
        text: format!(
            "Required Subsidy: {}{}/ton",
            currency,
            round_to(projection.required_subsidy, 4)
        ),
        x: target as f64,
        y: target_cost,
        text_x: target as f64 + 1.0,
        text_y: target_cost * 1.5,
    }];
    if let Some(year) = projection.tipping_year {
        annotations.push(ChartAnnotation {
            text: format!("Tipping Calendar Year: {}", year),
            x: year as f64,
            y: traditional,
            text_x: year as f64 + 1.0,
            text_y: traditional * 1.5,
        });
    }

    ChartSpec {
        title: format!(
            "Cost per Ton of Steel Production Over Time (with target tipping point in year {} and required subsidy)",
            target
        ),
        x_label: "Years".to_string(),
        y_label: "Costs per Ton".to_string(),
        series,
        annotations,
        markers: vec![VerticalMarker {
            label: "subsidy".to_string(),
            x: target as f64,
            y_min: traditional,
            y_max: target_cost,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection_service::run_projection;
    use crate::source::ScenarioSource;

    fn default_chart() -> ChartSpec {
        let outcome = run_projection(&ScenarioSource::defaults()).unwrap();
        build_chart(&outcome.projection, "£")
    }

    #[test]
    fn test_chart_series() {
        let chart = default_chart();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].style, LineStyle::Dashed);
        assert!(chart.series[0].points.iter().all(|&(_, y)| y == 0.3));
        assert_eq!(chart.series[1].points[0], (0.0, 0.6));
        assert!(chart.title.contains("target tipping point in year 1"));
    }

    #[test]
    fn test_chart_annotations() {
        let chart = default_chart();
        assert_eq!(chart.annotations.len(), 2);
        assert_eq!(chart.annotations[0].text, "Required Subsidy: £0.1939/ton");
        assert_eq!(chart.annotations[0].text_x, 2.0);
        assert_eq!(chart.annotations[1].text, "Tipping Calendar Year: 4");
        assert_eq!(chart.annotations[1].x, 4.0);
        assert!((chart.annotations[1].text_y - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_subsidy_marker_spans_gap() {
        let chart = default_chart();
        let marker = &chart.markers[0];
        assert_eq!(marker.x, 1.0);
        assert_eq!(marker.y_min, 0.3);
        assert!((marker.y_max - 0.4939).abs() < 1e-12);
    }

    #[test]
    fn test_no_tipping_annotation_without_crossing() {
        let outcome = run_projection(&greensteel_domain::SteelCostParameters {
            traditional_price: 0.1,
            ..Default::default()
        })
        .unwrap();
        let chart = build_chart(&outcome.projection, "$");
        assert_eq!(chart.annotations.len(), 1);
        assert!(chart.annotations[0].text.starts_with("Required Subsidy: $"));
    }
}
