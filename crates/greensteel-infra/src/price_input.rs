//! Price inputs: comma-separated lists and CSV price tables

use std::io::Read;
use std::path::Path;

use greensteel_domain::{ResourceKind, SteelCostParameters};
use greensteel_types::{ConfigurationError, Result};

/// Parse a comma-separated price list such as `"10,9,9,8"`.
///
/// Whitespace around entries is ignored; empty entries and non-numbers are
/// rejected rather than skipped.
pub fn parse_price_list(text: &str) -> std::result::Result<Vec<f64>, ConfigurationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConfigurationError::InvalidPriceList(
            "price list is empty".to_string(),
        ));
    }
    text.split(',')
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.trim();
            entry.parse::<f64>().map_err(|_| {
                ConfigurationError::InvalidPriceList(format!(
                    "entry {} ('{}') is not a number",
                    i + 1,
                    entry
                ))
            })
        })
        .collect()
}

/// Parse a `resource=list` assignment such as `"hydrogen=10,9,9"`.
pub fn parse_price_assignment(
    text: &str,
) -> std::result::Result<(ResourceKind, Vec<f64>), ConfigurationError> {
    let (resource, list) = text.split_once('=').ok_or_else(|| {
        ConfigurationError::InvalidPriceList(format!(
            "'{}' is not of the form resource=price,price,...",
            text
        ))
    })?;
    Ok((ResourceKind::from_key(resource), parse_price_list(list)?))
}

/// Per-resource price columns read from a CSV table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    columns: Vec<(ResourceKind, Vec<f64>)>,
}

impl PriceTable {
    pub fn years(&self) -> usize {
        self.columns.first().map(|(_, p)| p.len()).unwrap_or(0)
    }

    pub fn get(&self, kind: &ResourceKind) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, p)| p.as_slice())
    }

    pub fn kinds(&self) -> impl Iterator<Item = &ResourceKind> {
        self.columns.iter().map(|(k, _)| k)
    }

    /// Overwrite the scenario's price lists with the table's columns
    pub fn apply_to(&self, params: &mut SteelCostParameters) -> Result<()> {
        for (kind, prices) in &self.columns {
            params.set_prices(kind, prices.clone())?;
        }
        Ok(())
    }
}

/// Load a price table from a CSV file
///
/// Expected header: resource keys (`hydrogen,electricity,ironore,carbon,labour`),
/// optionally preceded by a `year` column which is ignored. One row per year.
pub fn load_price_table(path: &Path) -> Result<PriceTable> {
    let file = std::fs::File::open(path)?;
    read_price_table(file)
}

pub fn read_price_table<R: Read>(reader: R) -> Result<PriceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut columns: Vec<(usize, ResourceKind, Vec<f64>)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.eq_ignore_ascii_case("year"))
        .map(|(i, h)| (i, ResourceKind::from_key(h), Vec::new()))
        .collect();

    if columns.is_empty() {
        return Err(ConfigurationError::InvalidPriceList(
            "price table has no resource columns".to_string(),
        )
        .into());
    }

    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        for (col, kind, prices) in &mut columns {
            let field = record.get(*col).unwrap_or_default();
            let price = field.parse::<f64>().map_err(|_| {
                ConfigurationError::InvalidPriceList(format!(
                    "row {}, {}: '{}' is not a number",
                    row_idx + 1,
                    kind.key(),
                    field
                ))
            })?;
            prices.push(price);
        }
    }

    Ok(PriceTable {
        columns: columns
            .into_iter()
            .map(|(_, kind, prices)| (kind, prices))
            .collect(),
    })
}
