//! Parameter sources feeding the projection engine

use std::path::{Path, PathBuf};

use greensteel_domain::{ResourceKind, SteelCostParameters};
use greensteel_infra::{load_price_table, load_scenario};
use greensteel_types::Result;
use tracing::debug;

/// Supplies a validated parameter set for one projection run
pub trait ParameterSource {
    /// Human-readable origin, used in logs and reports
    fn describe(&self) -> String;

    fn load(&self) -> Result<SteelCostParameters>;
}

impl ParameterSource for SteelCostParameters {
    fn describe(&self) -> String {
        "in-memory parameters".to_string()
    }

    fn load(&self) -> Result<SteelCostParameters> {
        self.validate()?;
        Ok(self.clone())
    }
}

/// Command-line style overrides applied on top of a loaded scenario
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterOverrides {
    pub target_tipping_year: Option<usize>,
    pub traditional_price: Option<f64>,
    pub fixed_production: Option<f64>,
    /// Replacement price lists, applied after any price table
    pub price_lists: Vec<(ResourceKind, Vec<f64>)>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        self.target_tipping_year.is_none()
            && self.traditional_price.is_none()
            && self.fixed_production.is_none()
            && self.price_lists.is_empty()
    }

    pub fn apply(&self, params: &mut SteelCostParameters) -> Result<()> {
        if let Some(year) = self.target_tipping_year {
            params.target_tipping_year = year;
        }
        if let Some(price) = self.traditional_price {
            params.traditional_price = price;
        }
        if let Some(production) = self.fixed_production {
            params.fixed_production = production;
        }
        for (kind, prices) in &self.price_lists {
            params.set_prices(kind, prices.clone())?;
        }
        Ok(())
    }
}

/// Scenario assembled from an optional TOML file, an optional CSV price
/// table and overrides. Without a file the built-in defaults are used.
#[derive(Debug, Clone, Default)]
pub struct ScenarioSource {
    scenario: Option<PathBuf>,
    price_table: Option<PathBuf>,
    overrides: ParameterOverrides,
}

impl ScenarioSource {
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            scenario: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_price_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.price_table = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn scenario_path(&self) -> Option<&Path> {
        self.scenario.as_deref()
    }
}

impl ParameterSource for ScenarioSource {
    fn describe(&self) -> String {
        let mut origin = match &self.scenario {
            Some(path) => format!("scenario {}", path.display()),
            None => "built-in default scenario".to_string(),
        };
        if let Some(table) = &self.price_table {
            origin.push_str(&format!(" with prices from {}", table.display()));
        }
        origin
    }

    fn load(&self) -> Result<SteelCostParameters> {
        let mut params = match &self.scenario {
            Some(path) => load_scenario(path)?,
            None => SteelCostParameters::default(),
        };

        if let Some(table_path) = &self.price_table {
            let table = load_price_table(table_path)?;
            debug!(
                path = %table_path.display(),
                years = table.years(),
                "applying price table"
            );
            table.apply_to(&mut params)?;
        }

        if !self.overrides.is_empty() {
            debug!(overrides = ?self.overrides, "applying parameter overrides");
            self.overrides.apply(&mut params)?;
        }

        params.validate()?;
        Ok(params)
    }
}
