//! Resource inputs and their waste-decay dynamics

use serde::{Deserialize, Serialize};

/// A tracked production input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Hydrogen,
    Electricity,
    IronOre,
    Carbon,
    Labour,
    /// Any additional input not modelled by name
    Other(String),
}

impl ResourceKind {
    /// Short key used in scenario files and price tables
    pub fn key(&self) -> &str {
        match self {
            ResourceKind::Hydrogen => "hydrogen",
            ResourceKind::Electricity => "electricity",
            ResourceKind::IronOre => "ironore",
            ResourceKind::Carbon => "carbon",
            ResourceKind::Labour => "labour",
            ResourceKind::Other(name) => name.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ResourceKind::Hydrogen => "Hydrogen",
            ResourceKind::Electricity => "Electricity",
            ResourceKind::IronOre => "Iron Ore",
            ResourceKind::Carbon => "Carbon",
            ResourceKind::Labour => "Labour",
            ResourceKind::Other(name) => name.as_str(),
        }
    }

    /// Physical unit the base quantity is expressed in
    pub fn unit(&self) -> &str {
        match self {
            ResourceKind::Hydrogen => "kg",
            ResourceKind::Electricity => "kWh",
            ResourceKind::IronOre => "t",
            ResourceKind::Carbon => "kg",
            ResourceKind::Labour => "hours",
            ResourceKind::Other(_) => "units",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "hydrogen" => ResourceKind::Hydrogen,
            "electricity" => ResourceKind::Electricity,
            "ironore" | "iron_ore" | "iron ore" => ResourceKind::IronOre,
            "carbon" => ResourceKind::Carbon,
            "labour" | "labor" => ResourceKind::Labour,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One production input with its own utilisation and efficiency trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInput {
    pub kind: ResourceKind,
    /// Units consumed per ton of output in year 0
    pub base_units: f64,
    /// Per-unit price, one entry per projection year
    pub price_series: Vec<f64>,
    /// Year-0 fraction of units put to productive use
    pub utilisation_rate: f64,
    /// Year-on-year decay rate applied to wasted units
    pub target_efficiency: f64,
}

impl ResourceInput {
    pub fn new(
        kind: ResourceKind,
        base_units: f64,
        price_series: Vec<f64>,
        utilisation_rate: f64,
        target_efficiency: f64,
    ) -> Self {
        Self {
            kind,
            base_units,
            price_series,
            utilisation_rate,
            target_efficiency,
        }
    }

    pub fn base_wasted_units(&self) -> f64 {
        self.base_units * (1.0 - self.utilisation_rate)
    }

    pub fn wasted_units(&self, year: usize) -> f64 {
        self.base_wasted_units() * (1.0 - self.target_efficiency).powf(year as f64)
    }

    pub fn savings(&self, year: usize) -> f64 {
        self.base_wasted_units() - self.wasted_units(year)
    }

    /// Units actually consumed in `year`; year 0 is the raw base quantity.
    pub fn effective_units(&self, year: usize) -> f64 {
        if year == 0 {
            self.base_units
        } else {
            self.base_units - self.savings(year)
        }
    }

    /// Cost of this input in `year`, or `None` past the end of the price series.
    pub fn cost(&self, year: usize) -> Option<f64> {
        let price = self.price_series.get(year)?;
        Some(self.effective_units(year) * price)
    }
}
