//! Language tags and the active/default language pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};

/// Language used when neither an explicit language nor a default is given.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Opaque language identifier such as `en_US`.
///
/// The tag is used verbatim as a translation table key; only the currency
/// derivation and the formatter's locale look inside it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Wrap a raw tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Raw tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// What: Region code taken from the last two characters of the tag.
    ///
    /// Output:
    /// - Uppercased two-letter region (e.g. `"US"` for `en_US`)
    ///
    /// # Errors
    /// - `InvalidRegion` when the tag is shorter than two characters or its
    ///   last two characters are not ASCII letters (`"en"` is accepted and
    ///   yields `"EN"`, which the currency lookup then rejects).
    pub fn region(&self) -> Result<String> {
        let tail: Vec<char> = self.0.chars().rev().take(2).collect();
        if tail.len() != 2 || !tail.iter().all(char::is_ascii_alphabetic) {
            return Err(TranslateError::InvalidRegion {
                tag: self.0.clone(),
            });
        }
        Ok(tail.iter().rev().collect::<String>().to_ascii_uppercase())
    }

    /// Language part of the tag, lowercased (`"en"` for `en_US`).
    #[must_use]
    pub fn language_subtag(&self) -> String {
        self.0
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Two-letter region subtag, uppercased, when the tag has one
    /// (`"PT"` for `pt_PT`, `None` for a bare `pt`).
    #[must_use]
    pub fn region_subtag(&self) -> Option<String> {
        self.0
            .split(['_', '-'])
            .skip(1)
            .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase)
    }

    /// What: Hyphenated BCP 47 style form handed to the formatter.
    ///
    /// Details:
    /// - Underscores become hyphens, the language subtag is lowercased and
    ///   two-letter region subtags are uppercased: `en_us` -> `en-US`.
    /// - Other subtags (scripts, variants) keep their casing.
    #[must_use]
    pub fn to_bcp47(&self) -> String {
        self.0
            .split(['_', '-'])
            .filter(|part| !part.is_empty())
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    part.to_ascii_lowercase()
                } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                    part.to_ascii_uppercase()
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LanguageTag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The language value broadcast by a provider.
///
/// Carries the default explicitly so translation resolution never reads a
/// process-wide variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageContext {
    /// Language whose messages win.
    pub active: LanguageTag,
    /// Language supplying messages the active language lacks.
    pub default: LanguageTag,
}

impl LanguageContext {
    /// What: Build the pair a provider broadcasts.
    ///
    /// Inputs:
    /// - `language`: explicit language, if any
    /// - `default`: default language, if any (falls back to [`DEFAULT_LANGUAGE`])
    ///
    /// Output:
    /// - `LanguageContext` with `active = language || default`
    #[must_use]
    pub fn resolve(language: Option<LanguageTag>, default: Option<LanguageTag>) -> Self {
        let default = default.unwrap_or_else(|| LanguageTag::new(DEFAULT_LANGUAGE));
        let active = language.unwrap_or_else(|| default.clone());
        Self { active, default }
    }

    /// Context used when no provider is mounted above a consumer.
    #[must_use]
    pub fn fallback() -> Self {
        Self::resolve(None, None)
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::fallback()
    }
}
