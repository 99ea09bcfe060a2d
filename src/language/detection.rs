//! System locale detection.

use std::env;

use super::tag::LanguageTag;

/// What: Detect the system language from the environment.
///
/// Output:
/// - `Some(LanguageTag)` in underscore form (e.g. `de_DE`), or `None`
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order.
/// - The `C` and `POSIX` locales carry no language and are skipped.
#[must_use]
pub fn detect_system_locale() -> Option<LanguageTag> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find_map(|value| parse_locale_string(&value))
}

/// What: Turn a POSIX locale string into a language tag.
///
/// Inputs:
/// - `locale_str`: e.g. `"de_DE.UTF-8"`, `"en-us"`, `"sr_RS@latin"`
///
/// Output:
/// - `Some(LanguageTag)` like `de_DE`, or `None` for empty/`C`/`POSIX` values
///
/// Details:
/// - Drops the encoding (`.UTF-8`) and modifier (`@euro`) suffixes.
/// - Language is lowercased, a two-letter region is uppercased.
fn parse_locale_string(locale_str: &str) -> Option<LanguageTag> {
    let trimmed = locale_str.trim();
    let base = trimmed.split(['.', '@']).next()?.trim();
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }

    let mut parts = base.split(['_', '-']).filter(|p| !p.is_empty());
    let language = parts.next()?.to_ascii_lowercase();
    if !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    match parts.next() {
        Some(region) if region.len() == 2 => Some(LanguageTag::new(format!(
            "{language}_{}",
            region.to_ascii_uppercase()
        ))),
        Some(other) => Some(LanguageTag::new(format!("{language}_{other}"))),
        None => Some(LanguageTag::new(language)),
    }
}
