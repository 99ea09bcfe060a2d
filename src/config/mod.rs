//! Typed formatting configuration handed to every compiled template.
//!
//! A [`FormatConfig`] names number formats that templates reference as
//! `{value, number, <name>}`. Every language gets a derived `money` format
//! for its region's currency; callers may add or replace named formats.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::currency;
use crate::error::{Result, TranslateError};
use crate::language::LanguageTag;

/// Name of the derived currency format.
pub const MONEY_FORMAT: &str = "money";

/// How a number is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Plain decimal number.
    #[default]
    Decimal,
    /// Amount of money in `currency`.
    Currency,
    /// Ratio multiplied by 100 with a percent sign.
    Percent,
}

/// One named number format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Presentation style.
    #[serde(default)]
    pub style: NumberStyle,
    /// ISO 4217 code, required for [`NumberStyle::Currency`].
    #[serde(default)]
    pub currency: Option<String>,
    /// Fraction digits always shown.
    #[serde(default, alias = "minimumFractionDigits")]
    pub minimum_fraction_digits: Option<u8>,
    /// Fraction digits shown at most; the value is rounded to this.
    #[serde(default, alias = "maximumFractionDigits")]
    pub maximum_fraction_digits: Option<u8>,
    /// Whether to insert grouping separators (default: yes).
    #[serde(default, alias = "useGrouping")]
    pub use_grouping: Option<bool>,
}

impl NumberFormat {
    /// What: Fraction digit bounds after applying style defaults.
    ///
    /// Output:
    /// - `(min, max)` with `min <= max`
    ///
    /// Details:
    /// - Currency defaults to the currency's minor units for the maximum
    ///   (2 when the currency is unknown), decimal to 3, percent to 0.
    #[must_use]
    pub fn fraction_digits(&self) -> (u8, u8) {
        let default_max = match self.style {
            NumberStyle::Decimal => 3,
            NumberStyle::Percent => 0,
            NumberStyle::Currency => self
                .currency
                .as_deref()
                .and_then(currency::currency)
                .map_or(2, |c| c.digits),
        };
        let min = self.minimum_fraction_digits.unwrap_or(match self.style {
            NumberStyle::Currency => default_max,
            _ => 0,
        });
        let max = self.maximum_fraction_digits.unwrap_or(default_max).max(min);
        (min, max)
    }
}

/// Named number formats available to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Formats keyed by the name used in templates.
    #[serde(default)]
    pub number: BTreeMap<String, NumberFormat>,
}

impl FormatConfig {
    /// What: Derived money format for a language.
    ///
    /// Inputs:
    /// - `tag`: language tag whose last two characters name the region
    ///
    /// Output:
    /// - Config with a single `money` currency format, zero minimum
    ///   fraction digits
    ///
    /// # Errors
    /// - `InvalidRegion`, `UnknownRegion` or `NoCurrency` from the lookup
    pub fn money_for(tag: &LanguageTag) -> Result<Self> {
        let region = tag.region()?;
        let currency = currency::region_currency(&region)?;
        let mut number = BTreeMap::new();
        number.insert(
            MONEY_FORMAT.to_string(),
            NumberFormat {
                style: NumberStyle::Currency,
                currency: Some(currency.code.clone()),
                minimum_fraction_digits: Some(0),
                maximum_fraction_digits: None,
                use_grouping: None,
            },
        );
        Ok(Self { number })
    }

    /// What: Overlay caller overrides on these defaults.
    ///
    /// Details:
    /// - A named format in `overrides` replaces the same-named default as a
    ///   whole; names only present here are kept.
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut number = self.number.clone();
        number.extend(
            overrides
                .number
                .iter()
                .map(|(name, format)| (name.clone(), format.clone())),
        );
        Self { number }
    }

    /// Look up a named number format.
    #[must_use]
    pub fn number_format(&self, name: &str) -> Option<&NumberFormat> {
        self.number.get(name)
    }
}

/// What: Load a `FormatConfig` from a YAML file.
///
/// # Errors
/// - `Io` when the file cannot be read
/// - `Table` when the YAML does not describe a format config
pub fn load_format_config(path: &Path) -> Result<FormatConfig> {
    let contents = fs::read_to_string(path).map_err(|source| TranslateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(FormatConfig::default());
    }
    serde_norway::from_str(&contents).map_err(|e| TranslateError::Table {
        path: path.to_path_buf(),
        reason: format!("Failed to parse format config: {e}"),
    })
}
