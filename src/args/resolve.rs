//! Resolve a translation table for the languages named on the command line.

use std::fmt::Write as _;

use translated::config::load_format_config;
use translated::language::detect_system_locale;
use translated::translate::{
    Translations, load_table_dir, load_table_file, pre_heat, template_param_values,
    translate_with_defaults,
};
use translated::{DEFAULT_LANGUAGE, LanguageContext, LanguageTag, ParamDerivers};

use super::Args;
use super::utils::param_props;

/// Error surfaced by the command-line flow.
pub type CliError = Box<dyn std::error::Error>;

/// What: Pick the language pair for this run.
///
/// Details:
/// - The default language comes from `--default-language`, then the system
///   locale, then [`DEFAULT_LANGUAGE`].
/// - The active language falls back to the default.
pub fn language_context(args: &Args) -> LanguageContext {
    let default = args
        .default_language
        .as_deref()
        .map(LanguageTag::new)
        .or_else(detect_system_locale)
        .unwrap_or_else(|| LanguageTag::new(DEFAULT_LANGUAGE));
    LanguageContext::resolve(args.language.as_deref().map(LanguageTag::new), Some(default))
}

/// What: Load, compile and resolve the table named by `args`.
///
/// Output:
/// - Formatted messages of the active language over the default language
///
/// # Errors
/// - Table or format config loading failures
/// - Compile or formatting errors
pub fn resolve(args: &Args) -> Result<Translations, CliError> {
    let table = if args.translations.is_dir() {
        load_table_dir(&args.translations)?
    } else {
        load_table_file(&args.translations)?
    };
    let format = args
        .format_config
        .as_deref()
        .map(load_format_config)
        .transpose()?
        .unwrap_or_default();
    let compiled = pre_heat(&table, &format)?;

    let language = language_context(args);
    tracing::info!(
        active = %language.active,
        default = %language.default,
        languages = compiled.languages().len(),
        "resolving translations"
    );
    if compiled.get(&language.active).is_none() && compiled.get(&language.default).is_none() {
        tracing::warn!(active = %language.active, "no messages for the requested languages");
    }

    let params = template_param_values(&param_props(&args.params), &ParamDerivers::new());
    Ok(translate_with_defaults(&compiled, &language, &params)?)
}

/// What: Render resolved messages for stdout.
///
/// # Errors
/// - JSON serialization failure
pub fn render_output(translations: &Translations, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(translations)?);
    }
    let mut out = String::new();
    for (key, message) in translations {
        let _ = writeln!(out, "{key} = {message}");
    }
    Ok(out)
}
