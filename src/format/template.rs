//! Compiled message templates.

use std::sync::Arc;

use super::number::{NumberLocale, format_number};
use super::parser::{NumberStyleArg, PluralSelector, Segment, parse};
use super::plural::{PluralRule, ordinal_category};
use super::value::{ParamValue, ResolvedParams};
use crate::config::{FormatConfig, NumberFormat, NumberStyle};
use crate::currency::{self, NumberSymbols};
use crate::error::{Result, TranslateError};
use crate::language::LanguageTag;

/// A template parsed once and bound to a locale and formatting config.
///
/// Formatting walks the parsed segments; the source is never re-parsed.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    source: String,
    locale: String,
    language: String,
    region: Option<String>,
    symbols: &'static NumberSymbols,
    plural_rule: PluralRule,
    config: Arc<FormatConfig>,
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// What: Parse `source` for `language` with `config`.
    ///
    /// Inputs:
    /// - `source`: ICU-style template text
    /// - `language`: tag the template belongs to
    /// - `config`: named number formats (shared across a language's templates)
    ///
    /// Output:
    /// - Template ready for [`Self::format`]
    ///
    /// # Errors
    /// - `Syntax` for malformed templates and for `number` placeholders
    ///   naming a style the config does not define
    pub fn compile(source: &str, language: &LanguageTag, config: Arc<FormatConfig>) -> Result<Self> {
        let segments = parse(source)?;
        check_styles(source, &segments, &config)?;
        let subtag = language.language_subtag();
        Ok(Self {
            source: source.to_string(),
            locale: language.to_bcp47(),
            symbols: currency::number_symbols(&subtag),
            plural_rule: PluralRule::for_locale(&subtag, language.region_subtag().as_deref()),
            region: language.region().ok(),
            language: subtag,
            config,
            segments,
        })
    }

    /// Template source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Hyphenated locale the template formats for (e.g. `en-US`).
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// What: Produce the message for `params`.
    ///
    /// # Errors
    /// - `MissingParam` when a referenced parameter is absent
    /// - `NotANumber` when a numeric placeholder gets a non-numeric value
    pub fn format(&self, params: &ResolvedParams) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        self.write_segments(&self.segments, params, None, &mut out)?;
        Ok(out)
    }

    fn number_locale(&self) -> NumberLocale<'_> {
        NumberLocale {
            symbols: self.symbols,
            region: self.region.as_deref(),
        }
    }

    fn write_segments(
        &self,
        segments: &[Segment],
        params: &ResolvedParams,
        pound: Option<f64>,
        out: &mut String,
    ) -> Result<()> {
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument(name) => out.push_str(&lookup(params, name)?.to_string()),
                Segment::Number { name, style } => {
                    let value = numeric(params, name)?;
                    let format = self.number_format(style);
                    out.push_str(&format_number(value, &format, self.number_locale()));
                }
                Segment::Plural {
                    name,
                    offset,
                    ordinal,
                    arms,
                } => {
                    let value = numeric(params, name)?;
                    let shifted = value - offset;
                    let category = if *ordinal {
                        ordinal_category(&self.language, shifted)
                    } else {
                        self.plural_rule.categorize(shifted)
                    };
                    let exact = arms.iter().find(|(selector, _)| {
                        matches!(selector, PluralSelector::Exact(n) if (*n - value).abs() < f64::EPSILON)
                    });
                    let chosen = exact
                        .or_else(|| {
                            arms.iter().find(|(selector, _)| {
                                *selector == PluralSelector::Category(category)
                            })
                        })
                        .or_else(|| arms.iter().find(|(selector, _)| is_other(selector)));
                    if let Some((_, body)) = chosen {
                        self.write_segments(body, params, Some(shifted), out)?;
                    }
                }
                Segment::Select { name, arms } => {
                    let key = lookup(params, name)?.to_string();
                    let chosen = arms
                        .iter()
                        .find(|(k, _)| *k == key)
                        .or_else(|| arms.iter().find(|(k, _)| k == "other"));
                    if let Some((_, body)) = chosen {
                        self.write_segments(body, params, pound, out)?;
                    }
                }
                Segment::Pound => match pound {
                    Some(n) => out.push_str(&format_number(
                        n,
                        &NumberFormat::default(),
                        self.number_locale(),
                    )),
                    None => out.push('#'),
                },
            }
        }
        Ok(())
    }

    fn number_format(&self, style: &NumberStyleArg) -> NumberFormat {
        match style {
            NumberStyleArg::Default => NumberFormat::default(),
            NumberStyleArg::Integer => NumberFormat {
                maximum_fraction_digits: Some(0),
                ..NumberFormat::default()
            },
            NumberStyleArg::Percent => NumberFormat {
                style: NumberStyle::Percent,
                ..NumberFormat::default()
            },
            NumberStyleArg::Named(name) => self
                .config
                .number_format(name)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

fn is_other(selector: &PluralSelector) -> bool {
    *selector == PluralSelector::Category(super::plural::PluralCategory::Other)
}

fn lookup<'p>(params: &'p ResolvedParams, name: &str) -> Result<&'p ParamValue> {
    params.get(name).ok_or_else(|| TranslateError::MissingParam {
        name: name.to_string(),
    })
}

fn numeric(params: &ResolvedParams, name: &str) -> Result<f64> {
    let value = lookup(params, name)?;
    value.as_number().ok_or_else(|| TranslateError::NotANumber {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Reject `number` placeholders whose named style the config lacks.
fn check_styles(source: &str, segments: &[Segment], config: &FormatConfig) -> Result<()> {
    for segment in segments {
        match segment {
            Segment::Number {
                style: NumberStyleArg::Named(name),
                ..
            } if config.number_format(name).is_none() => {
                return Err(TranslateError::Syntax {
                    template: source.to_string(),
                    offset: source.find(name.as_str()).unwrap_or_default(),
                    reason: format!("unknown number style '{name}'"),
                });
            }
            Segment::Plural { arms, .. } => {
                for (_, body) in arms {
                    check_styles(source, body, config)?;
                }
            }
            Segment::Select { arms, .. } => {
                for (_, body) in arms {
                    check_styles(source, body, config)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
