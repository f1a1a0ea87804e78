//! Year-by-year cost projection over a set of resource inputs

use greensteel_types::ConfigurationError;

use super::tipping_point::{find_tipping_year, required_subsidy};
use crate::model::parameters::positive;
use crate::model::{Projection, ProjectionInput, ProjectionRow, ResourceCost, ResourceInput};

/// Check every engine precondition. Runs to the first violation.
pub fn validate_input(input: &ProjectionInput) -> Result<(), ConfigurationError> {
    if input.years < 1 {
        return Err(ConfigurationError::InvalidYears { years: input.years });
    }
    if input.target_tipping_year >= input.years {
        return Err(ConfigurationError::TargetTippingYearOutOfRange {
            target: input.target_tipping_year,
            years: input.years,
        });
    }
    positive("other_costs", input.other_costs)?;
    positive("traditional_price", input.traditional_price)?;
    for resource in &input.resources {
        validate_resource(resource, input.years)?;
    }
    Ok(())
}

fn validate_resource(resource: &ResourceInput, years: usize) -> Result<(), ConfigurationError> {
    let name = resource.kind.key();
    if !(resource.base_units.is_finite() && resource.base_units > 0.0) {
        return Err(ConfigurationError::NonPositiveUnits {
            resource: name.to_string(),
            value: resource.base_units,
        });
    }
    if !(0.0..=1.0).contains(&resource.utilisation_rate) {
        return Err(ConfigurationError::FractionOutOfRange {
            field: format!("{} utilisation rate", name),
            value: resource.utilisation_rate,
        });
    }
    if !(0.0..=1.0).contains(&resource.target_efficiency) {
        return Err(ConfigurationError::FractionOutOfRange {
            field: format!("{} target efficiency", name),
            value: resource.target_efficiency,
        });
    }
    if resource.price_series.len() != years {
        return Err(ConfigurationError::PriceSeriesLength {
            resource: name.to_string(),
            expected: years,
            actual: resource.price_series.len(),
        });
    }
    if let Some((year, &value)) = resource
        .price_series
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(ConfigurationError::NonPositivePrice {
            resource: name.to_string(),
            year,
            value,
        });
    }
    Ok(())
}

/// Project per-ton production cost over `input.years` years.
///
/// Year 0 prices the raw base units; later years apply each resource's own
/// waste decay before pricing. Fails without producing any rows when the
/// input violates a precondition.
pub fn project_costs(input: &ProjectionInput) -> Result<Projection, ConfigurationError> {
    validate_input(input)?;

    let rows: Vec<ProjectionRow> = (0..input.years)
        .map(|year| project_year(input, year))
        .collect();

    let costs_per_ton: Vec<f64> = rows.iter().map(|r| r.cost_per_ton).collect();
    let tipping_year = find_tipping_year(&costs_per_ton, input.traditional_price);
    let required_subsidy = required_subsidy(
        &costs_per_ton,
        input.traditional_price,
        input.target_tipping_year,
    )?;

    Ok(Projection {
        rows,
        traditional_price: input.traditional_price,
        target_tipping_year: input.target_tipping_year,
        tipping_year,
        required_subsidy,
    })
}

fn project_year(input: &ProjectionInput, year: usize) -> ProjectionRow {
    let resource_costs: Vec<ResourceCost> = input
        .resources
        .iter()
        .map(|resource| {
            let price = resource.price_series[year];
            let effective_units = resource.effective_units(year);
            ResourceCost {
                kind: resource.kind.clone(),
                wasted_units: resource.wasted_units(year),
                effective_units,
                price,
                cost: effective_units * price,
            }
        })
        .collect();

    // other costs first, then resources in supplied order
    let total_cost = resource_costs
        .iter()
        .fold(input.other_costs, |acc, c| acc + c.cost);

    ProjectionRow {
        year,
        resource_costs,
        other_costs: input.other_costs,
        total_cost,
        production: input.fixed_production,
        cost_per_ton: total_cost / input.fixed_production,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceKind;

    fn two_year_hydrogen() -> ProjectionInput {
        ProjectionInput {
            resources: vec![ResourceInput::new(
                ResourceKind::Hydrogen,
                20.0,
                vec![10.0, 9.0],
                0.2,
                0.2,
            )],
            other_costs: 100.0,
            fixed_production: 1000.0,
            years: 2,
            traditional_price: 0.3,
            target_tipping_year: 1,
        }
    }

    #[test]
    fn test_hydrogen_year_one_cost() {
        let projection = project_costs(&two_year_hydrogen()).unwrap();
        let cost = projection.rows[1]
            .resource_cost(&ResourceKind::Hydrogen)
            .unwrap()
            .cost;
        assert!((cost - 151.2).abs() < 1e-9);
        assert!((projection.rows[1].total_cost - 251.2).abs() < 1e-9);
        assert!((projection.rows[1].cost_per_ton - 0.2512).abs() < 1e-12);
    }

    #[test]
    fn test_year_zero_is_base_case() {
        let projection = project_costs(&two_year_hydrogen()).unwrap();
        let row = &projection.rows[0];
        assert_eq!(row.total_cost, 300.0);
        assert_eq!(row.cost_per_ton, 0.3);
        assert_eq!(row.production, 1000.0);
    }

    #[test]
    fn test_crossing_recorded_one_year_early() {
        // year 1 is the first year at or below 0.3, recorded as year 0
        let projection = project_costs(&two_year_hydrogen()).unwrap();
        assert_eq!(projection.tipping_year, Some(0));
        assert!((projection.required_subsidy - (0.2512 - 0.3)).abs() < 1e-12);
        assert!(!projection.needs_subsidy());
    }

    #[test]
    fn test_negative_benchmark_and_other_costs_rejected() {
        let mut input = two_year_hydrogen();
        input.traditional_price = -1.0;
        assert_eq!(
            project_costs(&input),
            Err(ConfigurationError::NonPositiveValue {
                field: "traditional_price".to_string(),
                value: -1.0,
            })
        );

        let mut input = two_year_hydrogen();
        input.other_costs = -50.0;
        assert!(matches!(
            project_costs(&input),
            Err(ConfigurationError::NonPositiveValue { field, .. }) if field == "other_costs"
        ));
    }

    #[test]
    fn test_nan_traditional_price_rejected() {
        let mut input = two_year_hydrogen();
        input.traditional_price = f64::NAN;
        assert!(matches!(
            validate_input(&input),
            Err(ConfigurationError::NonPositiveValue { .. })
        ));
    }

    #[test]
    fn test_short_price_series_rejected() {
        let mut input = two_year_hydrogen();
        input.years = 10;
        input.resources[0].price_series = vec![10.0; 8];
        assert_eq!(
            project_costs(&input),
            Err(ConfigurationError::PriceSeriesLength {
                resource: "hydrogen".to_string(),
                expected: 10,
                actual: 8,
            })
        );
    }

    #[test]
    fn test_long_price_series_rejected() {
        let mut input = two_year_hydrogen();
        input.resources[0].price_series = vec![10.0, 9.0, 8.0];
        assert!(matches!(
            project_costs(&input),
            Err(ConfigurationError::PriceSeriesLength { actual: 3, .. })
        ));
    }

    #[test]
    fn test_zero_years_rejected() {
        let mut input = two_year_hydrogen();
        input.years = 0;
        input.target_tipping_year = 0;
        assert_eq!(
            project_costs(&input),
            Err(ConfigurationError::InvalidYears { years: 0 })
        );
    }

    #[test]
    fn test_target_year_out_of_range() {
        let mut input = two_year_hydrogen();
        input.target_tipping_year = 2;
        assert!(matches!(
            project_costs(&input),
            Err(ConfigurationError::TargetTippingYearOutOfRange { target: 2, years: 2 })
        ));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let mut input = two_year_hydrogen();
        input.resources[0].price_series[1] = 0.0;
        assert!(matches!(
            project_costs(&input),
            Err(ConfigurationError::NonPositivePrice { year: 1, .. })
        ));
    }

    #[test]
    fn test_non_positive_units_rejected() {
        let mut input = two_year_hydrogen();
        input.resources[0].base_units = -1.0;
        assert!(matches!(
            project_costs(&input),
            Err(ConfigurationError::NonPositiveUnits { .. })
        ));
    }

    #[test]
    fn test_efficiency_out_of_range_rejected() {
        let mut input = two_year_hydrogen();
        input.resources[0].target_efficiency = 1.5;
        assert!(matches!(
            project_costs(&input),
            Err(ConfigurationError::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_other_costs_only() {
        let input = ProjectionInput {
            resources: Vec::new(),
            ..two_year_hydrogen()
        };
        let projection = project_costs(&input).unwrap();
        assert_eq!(projection.costs_per_ton(), vec![0.1, 0.1]);
        assert_eq!(projection.tipping_year, Some(0));
    }
}
