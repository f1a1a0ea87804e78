//! Projection use case: load parameters, run the engine, log the outcome

use greensteel_domain::{project_costs, Projection, SteelCostParameters};
use greensteel_types::Result;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::source::ParameterSource;

/// Parameters used for a run together with the resulting projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionOutcome {
    pub source: String,
    pub parameters: SteelCostParameters,
    pub projection: Projection,
}

pub fn run_projection(source: &dyn ParameterSource) -> Result<ProjectionOutcome> {
    let origin = source.describe();
    info!(source = %origin, "loading projection parameters");

    let parameters = source.load()?;
    let input = match parameters.to_projection_input() {
        Ok(input) => input,
        Err(e) => {
            warn!(error = %e, "projection rejected");
            return Err(e.into());
        }
    };
    debug!(
        years = input.years,
        resources = input.resources.len(),
        fixed_production = input.fixed_production,
        "projection input assembled"
    );

    let projection = match project_costs(&input) {
        Ok(projection) => projection,
        Err(e) => {
            warn!(error = %e, "projection rejected");
            return Err(e.into());
        }
    };

    match projection.tipping_year {
        Some(year) => info!(tipping_year = year, "cost per ton reaches traditional price"),
        None => info!("cost per ton stays above traditional price within horizon"),
    }
    info!(
        target_year = projection.target_tipping_year,
        required_subsidy = projection.required_subsidy,
        "required subsidy evaluated"
    );

    Ok(ProjectionOutcome {
        source: origin,
        parameters,
        projection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScenarioSource;
    use greensteel_types::{ConfigurationError, Error};

    #[test]
    fn test_run_default_scenario() {
        let outcome = run_projection(&ScenarioSource::defaults()).unwrap();
        assert_eq!(outcome.projection.years(), 10);
        assert_eq!(outcome.projection.tipping_year, Some(4));
        assert_eq!(outcome.source, "built-in default scenario");
    }

    #[test]
    fn test_run_rejects_short_series() {
        let mut params = SteelCostParameters::default();
        params.labour_prices.pop();
        match run_projection(&params) {
            Err(Error::Configuration(ConfigurationError::PriceSeriesLength {
                resource,
                actual,
                ..
            })) => {
                assert_eq!(resource, "labour");
                assert_eq!(actual, 9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    /// Source that hands parameters over without validating them
    struct UncheckedSource(SteelCostParameters);

    impl ParameterSource for UncheckedSource {
        fn describe(&self) -> String {
            "unchecked".to_string()
        }

        fn load(&self) -> Result<SteelCostParameters> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_run_rejects_incomplete_iron_ore_from_source() {
        let params = SteelCostParameters {
            base_ironore_units: Some(1.6),
            ..Default::default()
        };
        assert!(matches!(
            run_projection(&UncheckedSource(params)),
            Err(Error::Configuration(ConfigurationError::IncompleteResource { .. }))
        ));
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = run_projection(&ScenarioSource::defaults()).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["projection"]["tipping_year"], 4);
        assert_eq!(json["projection"]["rows"].as_array().unwrap().len(), 10);
    }
}
