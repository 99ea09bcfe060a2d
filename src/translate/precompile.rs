//! One-time compilation of a translation table ("pre-heating").

use std::sync::Arc;

use super::table::{CompiledTable, MessageSet, TranslationTable};
use crate::config::FormatConfig;
use crate::error::Result;
use crate::format::CompiledTemplate;

/// What: Compile every template of every language.
///
/// Inputs:
/// - `translations`: raw table
/// - `overrides`: caller formatting overrides
///
/// Output:
/// - `CompiledTable` keyed by language
///
/// Details:
/// - Each language gets the money format of its region merged with
///   `overrides`, computed once and shared by all its templates.
///
/// # Errors
/// - Region and currency lookup failures for any language
/// - Template syntax errors
pub fn pre_heat(translations: &TranslationTable, overrides: &FormatConfig) -> Result<CompiledTable> {
    let mut compiled = CompiledTable::default();
    for (language, messages) in translations.iter() {
        let config = Arc::new(FormatConfig::money_for(language)?.merged_with(overrides));
        let set = messages
            .iter()
            .map(|(key, source)| {
                CompiledTemplate::compile(source, language, Arc::clone(&config))
                    .map(|template| (key.clone(), template))
            })
            .collect::<Result<MessageSet>>()?;
        tracing::debug!(
            language = %language,
            templates = set.len(),
            "compiled translations"
        );
        compiled.insert(language.clone(), set);
    }
    Ok(compiled)
}
