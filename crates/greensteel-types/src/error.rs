//! Error types for greensteel

use thiserror::Error;

/// Precondition violations detected before a projection is computed.
///
/// The engine fails closed on any of these: no projection rows are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("projection horizon must be at least 1 year, got {years}")]
    InvalidYears { years: usize },

    #[error("{resource} price series has {actual} entries, expected {expected} (one per year)")]
    PriceSeriesLength {
        resource: String,
        expected: usize,
        actual: usize,
    },

    #[error("{resource} base units must be positive, got {value}")]
    NonPositiveUnits { resource: String, value: f64 },

    #[error("{resource} price for year {year} must be positive, got {value}")]
    NonPositivePrice {
        resource: String,
        year: usize,
        value: f64,
    },

    #[error("{field} must be within [0, 1], got {value}")]
    FractionOutOfRange { field: String, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositiveValue { field: String, value: f64 },

    #[error("target tipping year {target} is outside the projection horizon [0, {years})")]
    TargetTippingYearOutOfRange { target: usize, years: usize },

    #[error("{resource} is partially configured: missing {missing}")]
    IncompleteResource { resource: String, missing: String },

    #[error("invalid price list: {0}")]
    InvalidPriceList(String),
}

/// Configuration / scenario file errors
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Scenario file not found: {0}")]
    ScenarioNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigFileError),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_names_resource() {
        let err = ConfigurationError::PriceSeriesLength {
            resource: "hydrogen".to_string(),
            expected: 10,
            actual: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("hydrogen"));
        assert!(msg.contains("8"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_configuration_error_converts_into_error() {
        let err: Error = ConfigurationError::InvalidYears { years: 0 }.into();
        assert!(matches!(err, Error::Configuration(ConfigurationError::InvalidYears { years: 0 })));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
