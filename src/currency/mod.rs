//! Currency and number-symbol reference data.
//!
//! The tables ship inside the binary as YAML and are parsed once on first
//! use. Lookups are by two-letter region code (from a language tag) and by
//! ISO 4217 currency code.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Result, TranslateError};

/// Embedded reference tables.
const REFERENCE_YAML: &str = include_str!("reference.yml");

static REFERENCE: OnceLock<ReferenceData> = OnceLock::new();

/// Metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 code, e.g. `USD`.
    pub code: String,
    /// Symbol used outside the currency's home regions, e.g. `US$`.
    pub symbol: String,
    /// Symbol used inside its home regions, e.g. `$`.
    pub local_symbol: String,
    /// Minor-unit digits (2 for USD, 0 for JPY).
    pub digits: u8,
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPosition {
    /// `$8.88`
    Prefix,
    /// `8,88 €`
    Suffix,
}

/// Separators and currency placement for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberSymbols {
    /// Decimal separator.
    pub decimal: String,
    /// Grouping separator.
    pub group: String,
    /// Currency symbol placement.
    pub currency_position: CurrencyPosition,
    /// Whether a no-break space separates symbol and number.
    #[serde(default)]
    pub currency_spacing: bool,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal: ".".into(),
            group: ",".into(),
            currency_position: CurrencyPosition::Prefix,
            currency_spacing: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrencyEntry {
    symbol: String,
    local_symbol: String,
    digits: u8,
}

#[derive(Debug, Default, Deserialize)]
struct RawReference {
    #[serde(default)]
    regions: HashMap<String, Vec<String>>,
    #[serde(default)]
    currencies: HashMap<String, CurrencyEntry>,
    #[serde(default)]
    number_symbols: HashMap<String, NumberSymbols>,
}

#[derive(Debug, Default)]
struct ReferenceData {
    regions: HashMap<String, Vec<String>>,
    currencies: HashMap<String, Currency>,
    number_symbols: HashMap<String, NumberSymbols>,
    fallback_symbols: NumberSymbols,
}

impl ReferenceData {
    fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        let raw: RawReference = serde_norway::from_str(content)
            .map_err(|e| format!("Failed to parse currency reference data: {e}"))?;
        let currencies = raw
            .currencies
            .into_iter()
            .map(|(code, entry)| {
                let currency = Currency {
                    code: code.clone(),
                    symbol: entry.symbol,
                    local_symbol: entry.local_symbol,
                    digits: entry.digits,
                };
                (code, currency)
            })
            .collect();
        Ok(Self {
            regions: raw.regions,
            currencies,
            number_symbols: raw.number_symbols,
            fallback_symbols: NumberSymbols::default(),
        })
    }
}

fn reference() -> &'static ReferenceData {
    REFERENCE.get_or_init(|| match ReferenceData::from_yaml(REFERENCE_YAML) {
        Ok(data) => {
            tracing::debug!(
                regions = data.regions.len(),
                currencies = data.currencies.len(),
                "loaded currency reference data"
            );
            data
        }
        Err(e) => {
            tracing::warn!(error = %e, "currency reference data unavailable");
            ReferenceData::default()
        }
    })
}

/// What: Default currency of a region.
///
/// Inputs:
/// - `region`: two-letter region code, case-insensitive
///
/// Output:
/// - Metadata of the first currency listed for the region
///
/// # Errors
/// - `UnknownRegion` when the region has no entry
/// - `NoCurrency` when the region lists no currency or the currency has no metadata
pub fn region_currency(region: &str) -> Result<&'static Currency> {
    let region = region.to_ascii_uppercase();
    let data = reference();
    let codes = data
        .regions
        .get(&region)
        .ok_or_else(|| TranslateError::UnknownRegion {
            region: region.clone(),
        })?;
    codes
        .first()
        .and_then(|code| data.currencies.get(code))
        .ok_or(TranslateError::NoCurrency { region })
}

/// Metadata for an ISO 4217 code, if known.
#[must_use]
pub fn currency(code: &str) -> Option<&'static Currency> {
    reference().currencies.get(&code.to_ascii_uppercase())
}

/// Whether `code` is the default currency of `region`.
#[must_use]
pub fn is_home_currency(region: &str, code: &str) -> bool {
    region_currency(region).is_ok_and(|c| c.code.eq_ignore_ascii_case(code))
}

/// Number symbols for a language subtag; English conventions when unknown.
#[must_use]
pub fn number_symbols(language: &str) -> &'static NumberSymbols {
    let data = reference();
    data.number_symbols
        .get(&language.to_ascii_lowercase())
        .unwrap_or(&data.fallback_symbols)
}
