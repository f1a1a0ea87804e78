//! Application service layer - parameter sources, config, charting, export

pub mod chart;
pub mod config;
pub mod export;
pub mod projection_service;
pub mod source;
