//! Flat parameter record as supplied by a parameter source

use greensteel_types::ConfigurationError;
use serde::{Deserialize, Serialize};

use super::projection::ProjectionInput;
use super::resource::{ResourceInput, ResourceKind};

/// Scenario parameters for a green steel cost projection.
///
/// Iron ore is optional: it takes part in the projection only when units,
/// prices and efficiency are all given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SteelCostParameters {
    pub base_other_costs: f64,
    pub base_hydrogen_units: f64,
    pub base_electricity_units: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_ironore_units: Option<f64>,
    pub base_carbon_units: f64,
    pub base_labour_units: f64,

    pub hydrogen_prices: Vec<f64>,
    pub electricity_prices: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ironore_prices: Option<Vec<f64>>,
    pub carbon_prices: Vec<f64>,
    pub labour_prices: Vec<f64>,

    /// Tons produced per year
    #[serde(default = "default_fixed_production")]
    pub fixed_production: f64,
    pub years: usize,

    pub raw_material_utilisation: f64,
    pub operational_labour_efficiency: f64,

    pub target_efficiency_hydrogen: f64,
    pub target_efficiency_electricity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_efficiency_ironore: Option<f64>,
    pub target_efficiency_carbon: f64,
    pub target_efficiency_labour: f64,

    pub traditional_price: f64,
    pub target_tipping_year: usize,
}

fn default_fixed_production() -> f64 {
    1000.0
}

impl Default for SteelCostParameters {
    fn default() -> Self {
        Self {
            base_other_costs: 100.0,
            base_hydrogen_units: 20.0,
            base_electricity_units: 10.0,
            base_ironore_units: None,
            base_carbon_units: 10.0,
            base_labour_units: 5.0,
            hydrogen_prices: vec![10.0, 9.0, 9.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0],
            electricity_prices: vec![15.0, 15.0, 13.0, 13.0, 14.0, 14.0, 13.0, 13.0, 13.0, 13.0],
            ironore_prices: None,
            carbon_prices: vec![7.0, 8.0, 8.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 9.0],
            labour_prices: vec![16.0, 17.0, 18.0, 18.0, 18.0, 20.0, 20.0, 20.0, 20.0, 22.0],
            fixed_production: default_fixed_production(),
            years: 10,
            raw_material_utilisation: 0.2,
            operational_labour_efficiency: 0.3,
            target_efficiency_hydrogen: 0.2,
            target_efficiency_electricity: 0.29,
            target_efficiency_ironore: None,
            target_efficiency_carbon: 0.4,
            target_efficiency_labour: 0.2,
            traditional_price: 0.3,
            target_tipping_year: 1,
        }
    }
}

impl SteelCostParameters {
    /// Whether the extended (iron ore) variant is configured
    pub fn has_iron_ore(&self) -> bool {
        self.base_ironore_units.is_some()
            || self.ironore_prices.is_some()
            || self.target_efficiency_ironore.is_some()
    }

    /// Checks the scenario-level fields the engine takes as preconditions.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        positive("base_other_costs", self.base_other_costs)?;
        positive("fixed_production", self.fixed_production)?;
        positive("traditional_price", self.traditional_price)?;
        fraction("raw_material_utilisation", self.raw_material_utilisation)?;
        fraction(
            "operational_labour_efficiency",
            self.operational_labour_efficiency,
        )?;
        self.iron_ore().map(|_| ())
    }

    /// Resource list in canonical order: hydrogen, electricity, iron ore,
    /// carbon, labour.
    pub fn resources(&self) -> Result<Vec<ResourceInput>, ConfigurationError> {
        let mut resources = vec![
            ResourceInput::new(
                ResourceKind::Hydrogen,
                self.base_hydrogen_units,
                self.hydrogen_prices.clone(),
                self.raw_material_utilisation,
                self.target_efficiency_hydrogen,
            ),
            ResourceInput::new(
                ResourceKind::Electricity,
                self.base_electricity_units,
                self.electricity_prices.clone(),
                self.raw_material_utilisation,
                self.target_efficiency_electricity,
            ),
        ];
        if let Some(iron_ore) = self.iron_ore()? {
            resources.push(iron_ore);
        }
        resources.push(ResourceInput::new(
            ResourceKind::Carbon,
            self.base_carbon_units,
            self.carbon_prices.clone(),
            self.raw_material_utilisation,
            self.target_efficiency_carbon,
        ));
        resources.push(ResourceInput::new(
            ResourceKind::Labour,
            self.base_labour_units,
            self.labour_prices.clone(),
            self.operational_labour_efficiency,
            self.target_efficiency_labour,
        ));
        Ok(resources)
    }

    pub fn to_projection_input(&self) -> Result<ProjectionInput, ConfigurationError> {
        self.validate()?;
        Ok(ProjectionInput {
            resources: self.resources()?,
            other_costs: self.base_other_costs,
            fixed_production: self.fixed_production,
            years: self.years,
            traditional_price: self.traditional_price,
            target_tipping_year: self.target_tipping_year,
        })
    }

    /// Replace the price list of one resource, e.g. from an imported table.
    pub fn set_prices(
        &mut self,
        kind: &ResourceKind,
        prices: Vec<f64>,
    ) -> Result<(), ConfigurationError> {
        match kind {
            ResourceKind::Hydrogen => self.hydrogen_prices = prices,
            ResourceKind::Electricity => self.electricity_prices = prices,
            ResourceKind::IronOre => self.ironore_prices = Some(prices),
            ResourceKind::Carbon => self.carbon_prices = prices,
            ResourceKind::Labour => self.labour_prices = prices,
            ResourceKind::Other(name) => {
                return Err(ConfigurationError::InvalidPriceList(format!(
                    "unknown resource '{}'",
                    name
                )))
            }
        }
        Ok(())
    }

    fn iron_ore(&self) -> Result<Option<ResourceInput>, ConfigurationError> {
        match (
            self.base_ironore_units,
            &self.ironore_prices,
            self.target_efficiency_ironore,
        ) {
            (None, None, None) => Ok(None),
            (Some(units), Some(prices), Some(efficiency)) => Ok(Some(ResourceInput::new(
                ResourceKind::IronOre,
                units,
                prices.clone(),
                self.raw_material_utilisation,
                efficiency,
            ))),
            (units, prices, efficiency) => {
                let mut missing = Vec::new();
                if units.is_none() {
                    missing.push("base_ironore_units");
                }
                if prices.is_none() {
                    missing.push("ironore_prices");
                }
                if efficiency.is_none() {
                    missing.push("target_efficiency_ironore");
                }
                Err(ConfigurationError::IncompleteResource {
                    resource: ResourceKind::IronOre.key().to_string(),
                    missing: missing.join(", "),
                })
            }
        }
    }
}

pub(crate) fn positive(field: &str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositiveValue {
            field: field.to_string(),
            value,
        })
    }
}

fn fraction(field: &str, value: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::FractionOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}
