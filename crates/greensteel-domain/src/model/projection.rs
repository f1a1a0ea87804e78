//! Projection input and output types

use serde::{Deserialize, Serialize};

use super::resource::{ResourceInput, ResourceKind};

/// Everything the engine needs for one projection run.
///
/// `fixed_production` must be non-zero; the engine divides by it without
/// checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub resources: Vec<ResourceInput>,
    /// Constant per-year fixed costs, not subject to waste dynamics
    pub other_costs: f64,
    /// Tons produced per year, constant across the horizon
    pub fixed_production: f64,
    pub years: usize,
    /// Benchmark price per ton of conventionally produced steel
    pub traditional_price: f64,
    /// Year index at which the required subsidy is evaluated
    pub target_tipping_year: usize,
}

/// Cost of one resource in one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub kind: ResourceKind,
    pub wasted_units: f64,
    pub effective_units: f64,
    pub price: f64,
    pub cost: f64,
}

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: usize,
    pub resource_costs: Vec<ResourceCost>,
    pub other_costs: f64,
    pub total_cost: f64,
    pub production: f64,
    pub cost_per_ton: f64,
}

impl ProjectionRow {
    pub fn resource_cost(&self, kind: &ResourceKind) -> Option<&ResourceCost> {
        self.resource_costs.iter().find(|c| &c.kind == kind)
    }
}

/// Result of a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub rows: Vec<ProjectionRow>,
    pub traditional_price: f64,
    pub target_tipping_year: usize,
    /// Year index recorded on the first crossing below the traditional price
    pub tipping_year: Option<usize>,
    /// Cost per ton at the target year minus the traditional price (signed)
    pub required_subsidy: f64,
}

impl Projection {
    pub fn years(&self) -> usize {
        self.rows.len()
    }

    pub fn cost_per_ton(&self, year: usize) -> Option<f64> {
        self.rows.get(year).map(|r| r.cost_per_ton)
    }

    pub fn costs_per_ton(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.cost_per_ton).collect()
    }

    /// `(year, cost_per_ton)` pairs for charting
    pub fn cost_per_ton_series(&self) -> Vec<(usize, f64)> {
        self.rows.iter().map(|r| (r.year, r.cost_per_ton)).collect()
    }

    /// Per-year cost of a single resource, empty if it is not part of the run
    pub fn resource_costs(&self, kind: &ResourceKind) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.resource_cost(kind).map(|c| c.cost))
            .collect()
    }

    pub fn resource_kinds(&self) -> Vec<ResourceKind> {
        self.rows
            .first()
            .map(|r| r.resource_costs.iter().map(|c| c.kind.clone()).collect())
            .unwrap_or_default()
    }

    pub fn needs_subsidy(&self) -> bool {
        self.required_subsidy > 0.0
    }
}
