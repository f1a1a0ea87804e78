//! Behavioural properties of the cost projection engine

use greensteel_domain::{
    project_costs, ProjectionInput, ResourceInput, ResourceKind, SteelCostParameters,
};
use greensteel_types::ConfigurationError;

const EPS: f64 = 1e-12;

/// Cost per ton for the built-in default scenario
const DEFAULT_COSTS_PER_TON: [f64; 10] = [
    0.6,
    0.49389999999999995,
    0.41294640000000005,
    0.34983874400000003,
    0.32102588272000004,
    0.2986867287312,
    0.274586173527784,
    0.25899807376472667,
    0.24714404792495595,
    0.24200847242671872,
];

fn default_input() -> ProjectionInput {
    SteelCostParameters::default().to_projection_input().unwrap()
}

#[test]
fn test_default_scenario_costs_per_ton() {
    let projection = project_costs(&default_input()).unwrap();
    assert_eq!(projection.years(), 10);
    for (row, expected) in projection.rows.iter().zip(DEFAULT_COSTS_PER_TON) {
        assert!(
            (row.cost_per_ton - expected).abs() < EPS,
            "year {}: {} != {}",
            row.year,
            row.cost_per_ton,
            expected
        );
    }
}

#[test]
fn test_default_scenario_tipping_and_subsidy() {
    let projection = project_costs(&default_input()).unwrap();
    // year 5 is the first year at or below 0.3
    assert_eq!(projection.tipping_year, Some(4));
    assert!((projection.required_subsidy - 0.19389999999999996).abs() < EPS);
    assert!(projection.needs_subsidy());
}

#[test]
fn test_tipping_year_follows_traditional_price() {
    let mut input = default_input();
    input.traditional_price = 0.45;
    let projection = project_costs(&input).unwrap();
    assert_eq!(projection.tipping_year, Some(1));
    assert!((projection.required_subsidy - 0.04389999999999994).abs() < EPS);

    input.traditional_price = 0.5;
    let projection = project_costs(&input).unwrap();
    assert_eq!(projection.tipping_year, Some(0));
    assert!(projection.required_subsidy < 0.0);
}

#[test]
fn test_year_zero_matches_base_costs() {
    let input = default_input();
    let projection = project_costs(&input).unwrap();
    let base: f64 = input
        .resources
        .iter()
        .fold(input.other_costs, |acc, r| acc + r.base_units * r.price_series[0]);
    assert_eq!(projection.rows[0].cost_per_ton, base / input.fixed_production);
}

#[test]
fn test_row_count_matches_years() {
    for years in 1..=12 {
        let input = ProjectionInput {
            resources: vec![ResourceInput::new(
                ResourceKind::Hydrogen,
                20.0,
                vec![10.0; years],
                0.2,
                0.2,
            )],
            other_costs: 100.0,
            fixed_production: 1000.0,
            years,
            traditional_price: 0.3,
            target_tipping_year: years - 1,
        };
        let projection = project_costs(&input).unwrap();
        assert_eq!(projection.rows.len(), years);
        assert!(projection.rows.iter().all(|r| r.production == 1000.0));
    }
}

#[test]
fn test_single_year_projection() {
    let mut params = SteelCostParameters::default();
    params.years = 1;
    params.target_tipping_year = 0;
    params.hydrogen_prices.truncate(1);
    params.electricity_prices.truncate(1);
    params.carbon_prices.truncate(1);
    params.labour_prices.truncate(1);
    // far above year 0 so a crossing would be visible if one were tested
    params.traditional_price = 10.0;

    let projection = project_costs(&params.to_projection_input().unwrap()).unwrap();
    assert_eq!(projection.rows.len(), 1);
    assert_eq!(projection.tipping_year, None);
    assert!((projection.required_subsidy - (0.6 - 10.0)).abs() < EPS);
}

#[test]
fn test_wasted_units_decay_monotonically() {
    for resource in default_input().resources {
        assert_eq!(resource.wasted_units(0), resource.base_wasted_units());
        for year in 1..30 {
            assert!(resource.wasted_units(year) < resource.wasted_units(year - 1));
            let floor = resource.utilisation_rate * resource.base_units;
            assert!(resource.effective_units(year) >= floor - EPS);
        }
        assert!(resource.wasted_units(500) < 1e-9);
    }
}

#[test]
fn test_zero_efficiency_keeps_base_units() {
    let mut input = default_input();
    for resource in &mut input.resources {
        resource.target_efficiency = 0.0;
    }
    let projection = project_costs(&input).unwrap();
    for row in &projection.rows {
        for (cost, resource) in row.resource_costs.iter().zip(&input.resources) {
            assert_eq!(cost.effective_units, resource.base_units);
        }
    }
}

#[test]
fn test_subsidy_is_lookup_at_target_year() {
    let mut input = default_input();
    for target in 0..input.years {
        input.target_tipping_year = target;
        let projection = project_costs(&input).unwrap();
        assert_eq!(
            projection.required_subsidy,
            projection.rows[target].cost_per_ton - projection.traditional_price
        );
    }
}

#[test]
fn test_projection_is_deterministic() {
    let input = default_input();
    let first = project_costs(&input).unwrap();
    let second = project_costs(&input).unwrap();
    assert_eq!(first, second);
    for (a, b) in first.rows.iter().zip(&second.rows) {
        assert_eq!(a.cost_per_ton.to_bits(), b.cost_per_ton.to_bits());
    }
}

#[test]
fn test_iron_ore_variant() {
    let params = SteelCostParameters {
        base_ironore_units: Some(1.6),
        ironore_prices: Some(vec![90.0; 10]),
        target_efficiency_ironore: Some(0.1),
        target_tipping_year: 3,
        ..Default::default()
    };
    let projection = project_costs(&params.to_projection_input().unwrap()).unwrap();
    assert!((projection.rows[0].cost_per_ton - 0.744).abs() < EPS);
    assert!((projection.rows[9].cost_per_ton - 0.3154393127595187).abs() < EPS);
    assert_eq!(projection.tipping_year, None);
    assert!((projection.required_subsidy - 0.162619544).abs() < EPS);
    assert_eq!(projection.resource_costs(&ResourceKind::IronOre).len(), 10);
}

#[test]
fn test_mismatched_series_produces_no_projection() {
    let mut params = SteelCostParameters::default();
    params.carbon_prices.truncate(8);
    let input = params.to_projection_input().unwrap();
    assert_eq!(
        project_costs(&input),
        Err(ConfigurationError::PriceSeriesLength {
            resource: "carbon".to_string(),
            expected: 10,
            actual: 8,
        })
    );
}

#[test]
fn test_parameters_load_from_toml() {
    let text = toml::to_string(&SteelCostParameters::default()).unwrap();
    assert!(!text.contains("ironore"));
    let params: SteelCostParameters = toml::from_str(&text).unwrap();
    assert_eq!(params, SteelCostParameters::default());
}
