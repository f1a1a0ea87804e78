//! Domain model types

pub mod parameters;
pub mod projection;
pub mod resource;

pub use parameters::SteelCostParameters;
pub use projection::{Projection, ProjectionInput, ProjectionRow, ResourceCost};
pub use resource::{ResourceInput, ResourceKind};
