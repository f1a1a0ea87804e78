//! Green steel cost projection domain
//!
//! Pure computation only: this crate performs no I/O and keeps no state
//! between calls. Parameter ingestion and rendering live in the infra and app
//! crates.

pub mod model;
pub mod service;

pub use model::{
    Projection, ProjectionInput, ProjectionRow, ResourceCost, ResourceInput, ResourceKind,
    SteelCostParameters,
};
pub use service::{
    find_tipping_year, generate_projection_report, project_costs, required_subsidy, round_to,
    validate_input,
};
