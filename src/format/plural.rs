//! CLDR-style plural categories and per-language selection rules.

/// Plural category a number falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// `zero`
    Zero,
    /// `one`
    One,
    /// `two`
    Two,
    /// `few`
    Few,
    /// `many`
    Many,
    /// `other`
    Other,
}

impl PluralCategory {
    /// Parse a category keyword as written in templates.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Cardinal plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// English, German, Dutch, Spanish...: `one` for 1, else `other`.
    OneOther,
    /// French, Brazilian Portuguese: `one` for 0 and 1.
    /// European Portuguese uses [`PluralRule::OneOther`].
    French,
    /// Russian, Ukrainian, Belarusian.
    EastSlavic,
    /// Polish.
    Polish,
    /// Czech and Slovak.
    Czech,
    /// Arabic: all six categories.
    Arabic,
    /// Japanese, Chinese, Korean...: always `other`.
    NoPlural,
}

impl PluralRule {
    /// What: Rule for a language subtag (`"en"`, `"ru"`...).
    ///
    /// Details:
    /// - Unknown languages use [`PluralRule::OneOther`].
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        match language {
            "fr" | "pt" => Self::French,
            "ru" | "uk" | "be" => Self::EastSlavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "ar" => Self::Arabic,
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" => Self::NoPlural,
            _ => Self::OneOther,
        }
    }

    /// What: Rule for a language subtag and the tag's region subtag.
    ///
    /// Details:
    /// - Portuguese outside Brazil (`pt_PT`, `pt_AO`...) counts only 1 as
    ///   `one`. A bare `pt` is Brazilian Portuguese.
    /// - Every other language ignores the region.
    #[must_use]
    pub fn for_locale(language: &str, region: Option<&str>) -> Self {
        match (language, region) {
            ("pt", Some(region)) if !region.eq_ignore_ascii_case("BR") => Self::OneOther,
            _ => Self::for_language(language),
        }
    }

    /// Category of `n`. Fractional values select `other` except where the
    /// rule looks only at the integer part.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn categorize(self, n: f64) -> PluralCategory {
        let abs = n.abs();
        let is_int = abs.fract() == 0.0;
        let i = abs.trunc() as u64;
        match self {
            Self::NoPlural => PluralCategory::Other,
            Self::OneOther => {
                if is_int && i == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::French => {
                if i <= 1 {
                    PluralCategory::One
                } else if is_int && i != 0 && i % 1_000_000 == 0 {
                    PluralCategory::Many
                } else {
                    PluralCategory::Other
                }
            }
            _ if !is_int => PluralCategory::Other,
            Self::EastSlavic => {
                let (m10, m100) = (i % 10, i % 100);
                if m10 == 1 && m100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                let (m10, m100) = (i % 10, i % 100);
                if i == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Czech => match i {
                1 => PluralCategory::One,
                2..=4 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            Self::Arabic => {
                let m100 = i % 100;
                match i {
                    0 => PluralCategory::Zero,
                    1 => PluralCategory::One,
                    2 => PluralCategory::Two,
                    _ if (3..=10).contains(&m100) => PluralCategory::Few,
                    _ if (11..=99).contains(&m100) => PluralCategory::Many,
                    _ => PluralCategory::Other,
                }
            }
        }
    }
}

/// Ordinal category of `n` (`selectordinal`). Only English distinguishes
/// ordinals here; other languages use `other`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ordinal_category(language: &str, n: f64) -> PluralCategory {
    if language != "en" || n.fract() != 0.0 {
        return PluralCategory::Other;
    }
    let i = n.abs() as u64;
    match (i % 10, i % 100) {
        (1, m) if m != 11 => PluralCategory::One,
        (2, m) if m != 12 => PluralCategory::Two,
        (3, m) if m != 13 => PluralCategory::Few,
        _ => PluralCategory::Other,
    }
}
