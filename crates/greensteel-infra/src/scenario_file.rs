//! Scenario files (TOML)

use std::path::Path;

use greensteel_domain::SteelCostParameters;
use greensteel_types::{ConfigFileError, Result};

const SCENARIO_HEADER: &str = "\
# Green steel cost projection scenario
#
# Units are per ton of steel in year 0; every price list needs one entry
# per projection year. Fractions (utilisation, efficiency) are within [0, 1].
# Iron ore is optional: set base_ironore_units, ironore_prices and
# target_efficiency_ironore together to enable it.

";

/// Load scenario parameters from a TOML file
pub fn load_scenario(path: &Path) -> Result<SteelCostParameters> {
    if !path.exists() {
        return Err(ConfigFileError::ScenarioNotFound(path.display().to_string()).into());
    }
    let content = std::fs::read_to_string(path)?;
    let params: SteelCostParameters = toml::from_str(&content)?;
    Ok(params)
}

/// Render scenario parameters as commented TOML
pub fn render_scenario(params: &SteelCostParameters) -> Result<String> {
    let body = toml::to_string_pretty(params)?;
    Ok(format!("{}{}", SCENARIO_HEADER, body))
}

/// Save scenario parameters to a TOML file, creating parent directories
pub fn save_scenario(path: &Path, params: &SteelCostParameters) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_scenario(params)?)?;
    Ok(())
}
