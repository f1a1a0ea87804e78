//! Domain services

pub mod cost_projection;
pub mod projection_report;
pub mod tipping_point;

pub use cost_projection::{project_costs, validate_input};
pub use projection_report::{generate_projection_report, round_to};
pub use tipping_point::{find_tipping_year, required_subsidy};
