//! Infrastructure layer - scenario files and price inputs

pub mod price_input;
pub mod scenario_file;

pub use price_input::{
    load_price_table, parse_price_assignment, parse_price_list, read_price_table, PriceTable,
};
pub use scenario_file::{load_scenario, render_scenario, save_scenario};
