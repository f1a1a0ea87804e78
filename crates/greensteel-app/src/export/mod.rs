//! Projection exporters

pub mod csv_export;
pub mod excel;

pub use csv_export::{export_to_csv, write_csv};
pub use excel::export_to_excel;
