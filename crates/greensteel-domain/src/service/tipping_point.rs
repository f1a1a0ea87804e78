//! Tipping year detection and subsidy lookup

use greensteel_types::ConfigurationError;

/// Find the tipping year in a cost-per-ton series.
///
/// Scans from year 1 for the first cost at or below `traditional_price` and
/// records the year before it (`i - 1`). Year 0 is never tested, and later
/// crossings never replace the first one.
pub fn find_tipping_year(costs_per_ton: &[f64], traditional_price: f64) -> Option<usize> {
    costs_per_ton
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &cost)| cost <= traditional_price)
        .map(|(i, _)| i - 1)
}

/// Gap between cost per ton at `target_year` and the traditional price.
///
/// Positive means a subsidy is needed; negative means production is already
/// cheaper than the benchmark.
pub fn required_subsidy(
    costs_per_ton: &[f64],
    traditional_price: f64,
    target_year: usize,
) -> Result<f64, ConfigurationError> {
    costs_per_ton
        .get(target_year)
        .map(|cost| cost - traditional_price)
        .ok_or(ConfigurationError::TargetTippingYearOutOfRange {
            target: target_year,
            years: costs_per_ton.len(),
        })
}
