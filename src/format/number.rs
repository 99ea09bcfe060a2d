//! Locale-aware number rendering for `number` placeholders.

use fixed_decimal::{Decimal, FloatPrecision};

use crate::config::{NumberFormat, NumberStyle};
use crate::currency::{self, CurrencyPosition, NumberSymbols};

/// Locale facts the renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct NumberLocale<'a> {
    /// Separators and currency placement.
    pub symbols: &'a NumberSymbols,
    /// Region of the formatting language, used to pick local currency symbols.
    pub region: Option<&'a str>,
}

/// What: Render `value` according to `format`.
///
/// Inputs:
/// - `value`: number to render
/// - `format`: style and fraction digit bounds
/// - `locale`: separators, currency placement, region
///
/// Output:
/// - Formatted string, e.g. `$8.88`, `1,234.5`, `8,88 €`, `25%`
///
/// Details:
/// - Rounds half away from zero to the maximum fraction digits, then trims
///   trailing zeros down to the minimum. Rounding is done on decimal digits,
///   never by scaling the float.
/// - Currencies show their local symbol inside their home region and the
///   international symbol (or ISO code) elsewhere.
#[must_use]
pub fn format_number(value: f64, format: &NumberFormat, locale: NumberLocale<'_>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let shift = if format.style == NumberStyle::Percent {
        2
    } else {
        0
    };
    let (min, max) = format.fraction_digits();
    let grouping = format.use_grouping.unwrap_or(true);
    let (negative, digits) = if value.is_infinite() {
        (value < 0.0, "∞".to_string())
    } else {
        round_digits(value, shift, min, max, grouping, locale.symbols)
    };
    let sign = if negative { "-" } else { "" };

    match format.style {
        NumberStyle::Decimal => format!("{sign}{digits}"),
        NumberStyle::Percent => format!("{sign}{digits}%"),
        NumberStyle::Currency => {
            let code = format.currency.as_deref().unwrap_or_default();
            let symbol = currency_symbol(code, locale.region);
            let space = if locale.symbols.currency_spacing {
                "\u{a0}"
            } else {
                ""
            };
            match locale.symbols.currency_position {
                CurrencyPosition::Prefix => format!("{sign}{symbol}{space}{digits}"),
                CurrencyPosition::Suffix => format!("{sign}{digits}{space}{symbol}"),
            }
        }
    }
}

fn currency_symbol(code: &str, region: Option<&str>) -> String {
    match currency::currency(code) {
        Some(c) if region.is_some_and(|r| currency::is_home_currency(r, code)) => {
            c.local_symbol.clone()
        }
        Some(c) => c.symbol.clone(),
        None => code.to_ascii_uppercase(),
    }
}

/// Shortest decimal digits that read back as `value`, without exponent.
fn exact_digits(value: f64) -> String {
    Decimal::try_from_f64(value, FloatPrecision::RoundTrip)
        .map_or_else(|_| format!("{value}"), |decimal| decimal.to_string())
}

/// Split `exact` at its decimal point after moving the point `shift` places right.
fn shifted_parts(exact: &str, shift: usize) -> (String, String) {
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact, ""));
    let moved: String = frac_part
        .chars()
        .chain(std::iter::repeat('0'))
        .take(shift.max(frac_part.len()))
        .collect();
    let (head, tail) = moved.split_at(shift);
    let int_part = format!("{int_part}{head}");
    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    (int_part.to_string(), tail.to_string())
}

/// Add one unit in the last place. Returns `false` when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Round `value` (times `10^shift`) to `max` fraction digits and lay out the digits.
/// Returns whether the rounded value is negative.
///
/// Rounding works on the shortest round-trip decimal digits of `value`, so
/// `1.005` is a tie that rounds up and magnitudes past 2^53 keep their digits.
fn round_digits(
    value: f64,
    shift: usize,
    min: u8,
    max: u8,
    grouping: bool,
    symbols: &NumberSymbols,
) -> (bool, String) {
    let max = usize::from(max);
    let (int_part, frac_part) = shifted_parts(&exact_digits(value.abs()), shift);
    let round_up = frac_part.as_bytes().get(max).is_some_and(|d| *d >= b'5');

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(max))
        .collect();
    if round_up && !increment(&mut digits) {
        digits.insert(0, b'1');
    }
    let negative = value < 0.0 && digits.iter().any(|d| *d != b'0');

    let raw: String = digits.iter().copied().map(char::from).collect();
    let (int_part, frac_part) = raw.split_at(raw.len() - max);

    let mut frac = frac_part.to_string();
    while frac.len() > usize::from(min) && frac.ends_with('0') {
        frac.pop();
    }

    let int_part = if grouping {
        group_thousands(int_part, &symbols.group)
    } else {
        int_part.to_string()
    };
    if frac.is_empty() {
        (negative, int_part)
    } else {
        (negative, format!("{int_part}{}{frac}", symbols.decimal))
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> NumberLocale<'static> {
        NumberLocale {
            symbols: currency::number_symbols("en"),
            region: Some("US"),
        }
    }

    fn money(code: &str) -> NumberFormat {
        NumberFormat {
            style: NumberStyle::Currency,
            currency: Some(code.into()),
            minimum_fraction_digits: Some(0),
            ..NumberFormat::default()
        }
    }

    #[test]
    fn usd_rounds_to_cents() {
        assert_eq!(format_number(8.876_54, &money("USD"), en()), "$8.88");
        assert_eq!(format_number(8.5, &money("USD"), en()), "$8.5");
        assert_eq!(format_number(8.0, &money("USD"), en()), "$8");
        assert_eq!(format_number(1234.5, &money("USD"), en()), "$1,234.5");
        assert_eq!(format_number(-3.456, &money("USD"), en()), "-$3.46");
    }

    #[test]
    fn foreign_currency_uses_international_symbol() {
        assert_eq!(format_number(5.0, &money("AUD"), en()), "A$5");
        assert_eq!(format_number(5.0, &money("XYZ"), en()), "XYZ5");
    }

    #[test]
    fn suffix_currency_locale() {
        let de = NumberLocale {
            symbols: currency::number_symbols("de"),
            region: Some("DE"),
        };
        assert_eq!(
            format_number(1234.567, &money("EUR"), de),
            "1.234,57\u{a0}€"
        );
    }

    #[test]
    fn decimal_and_percent() {
        assert_eq!(format_number(1234.5678, &NumberFormat::default(), en()), "1,234.568");
        assert_eq!(format_number(0.0, &NumberFormat::default(), en()), "0");
        assert_eq!(format_number(-0.0001, &NumberFormat::default(), en()), "0");
        let percent = NumberFormat {
            style: NumberStyle::Percent,
            ..NumberFormat::default()
        };
        assert_eq!(format_number(0.256, &percent, en()), "26%");
        let fixed = NumberFormat {
            minimum_fraction_digits: Some(2),
            maximum_fraction_digits: Some(2),
            use_grouping: Some(false),
            ..NumberFormat::default()
        };
        assert_eq!(format_number(1234.0, &fixed, en()), "1234.00");
        assert_eq!(format_number(0.05, &fixed, en()), "0.05");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::NAN, &NumberFormat::default(), en()), "NaN");
        assert_eq!(
            format_number(f64::NEG_INFINITY, &NumberFormat::default(), en()),
            "-∞"
        );
    }

    #[test]
    fn huge_values_keep_their_digits() {
        assert_eq!(
            format_number(1e21, &money("USD"), en()),
            "$1,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_number(123_456_789_012_345_680.0, &NumberFormat::default(), en()),
            "123,456,789,012,345,680"
        );

        let out = format_number(1e307, &money("USD"), en());
        let expected = format!("${}", group_thousands(&format!("1{}", "0".repeat(307)), ","));
        assert_eq!(out, expected);

        let max = format_number(f64::MAX, &money("USD"), en());
        assert!(max.starts_with("$179,769,313,486,231,570,000,"), "{max}");
        assert_eq!(max.chars().filter(char::is_ascii_digit).count(), 309);
        let min = format_number(f64::MIN, &money("USD"), en());
        assert_eq!(min, format!("-{max}"));
        assert!(!min.contains("inf") && !min.contains('∞'));
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_number(1.005, &money("USD"), en()), "$1.01");
        assert_eq!(format_number(0.125, &money("USD"), en()), "$0.13");
        assert_eq!(format_number(-0.125, &money("USD"), en()), "-$0.13");
        assert_eq!(format_number(9.995, &money("USD"), en()), "$10");
        assert_eq!(format_number(999.995, &money("USD"), en()), "$1,000");
        assert_eq!(format_number(0.5, &money("JPY"), en()), "¥1");
        assert_eq!(format_number(2.5, &money("JPY"), en()), "¥3");
        assert_eq!(format_number(-2.5, &money("JPY"), en()), "-¥3");
        assert_eq!(format_number(0.0049, &money("USD"), en()), "$0");
        assert_eq!(format_number(-0.004, &money("USD"), en()), "$0");
    }

    #[test]
    fn percent_scales_in_decimal() {
        let percent = NumberFormat {
            style: NumberStyle::Percent,
            ..NumberFormat::default()
        };
        assert_eq!(format_number(0.285, &percent, en()), "29%");
        assert_eq!(format_number(0.005, &percent, en()), "1%");
        assert_eq!(format_number(12.5, &percent, en()), "1,250%");
        assert_eq!(format_number(1e300, &percent, en()).len(), 303 + 100 + 1);
    }

    #[test]
    fn digit_helpers() {
        assert_eq!(
            shifted_parts("0.285", 2),
            ("28".to_string(), "5".to_string())
        );
        assert_eq!(shifted_parts("3", 2), ("300".to_string(), String::new()));
        assert_eq!(
            shifted_parts("12.5", 0),
            ("12".to_string(), "5".to_string())
        );
        let mut digits = *b"199";
        assert!(increment(&mut digits));
        assert_eq!(&digits, b"200");
        let mut digits = *b"99";
        assert!(!increment(&mut digits));
        assert_eq!(&digits, b"00");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1234567", ","), "1,234,567");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1000", "."), "1.000");
    }
}
