//! Active-over-default message resolution.

use std::collections::BTreeMap;

use super::table::{CompiledTable, Translations};
use crate::error::Result;
use crate::format::{CompiledTemplate, ResolvedParams};
use crate::language::LanguageContext;

/// What: Merge the default and active message sets of `table`.
///
/// Output:
/// - key -> template, active entries replacing default entries key by key
///
/// Details:
/// - A missing language contributes nothing; a key missing from both sets
///   is missing from the result.
#[must_use]
pub fn merged_messages<'t>(
    table: &'t CompiledTable,
    language: &LanguageContext,
) -> BTreeMap<&'t str, &'t CompiledTemplate> {
    let mut merged = BTreeMap::new();
    for tag in [&language.default, &language.active] {
        if let Some(set) = table.get(tag) {
            merged.extend(set.iter().map(|(key, template)| (key.as_str(), template)));
        }
    }
    merged
}

/// What: Format every message visible in `language`.
///
/// Inputs:
/// - `table`: precompiled templates
/// - `language`: active and default language
/// - `params`: values for this render
///
/// Output:
/// - key -> formatted message
///
/// # Errors
/// - The first formatting error of any merged template
pub fn translate_with_defaults(
    table: &CompiledTable,
    language: &LanguageContext,
    params: &ResolvedParams,
) -> Result<Translations> {
    let merged = merged_messages(table, language);
    if language.active != language.default {
        let own = table.get(&language.active).map_or(0, BTreeMap::len);
        let fallback = merged.len().saturating_sub(own);
        if fallback > 0 {
            tracing::debug!(
                active = %language.active,
                default = %language.default,
                fallback,
                "using default-language messages"
            );
        }
    }
    merged
        .into_iter()
        .map(|(key, template)| -> Result<(String, String)> {
            Ok((key.to_string(), template.format(params)?))
        })
        .collect()
}
