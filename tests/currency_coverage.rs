//! Integration tests for region to currency coverage.
//!
//! Tests cover:
//! - Every ISO 3166-1 alpha-2 region resolving to a currency
//! - Tags from regions outside the largest economies compiling through `translated`
//! - Money rendered with the region's own symbol and minor units

use translated::currency::region_currency;
use translated::format::ParamValue;
use translated::language::LanguageContext;
use translated::translate::{pre_heat, translate_with_defaults};
use translated::{
    FormatConfig, LanguageTag, TranslateError, TranslatedConfig, TranslationTable, translated,
};

/// ISO 3166-1 alpha-2 codes currently assigned.
const ISO_REGIONS: [&str; 249] = [
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

#[test]
/// What: Every assigned region code has a default currency.
///
/// Inputs:
/// - All 249 ISO 3166-1 alpha-2 codes, upper and lower case
///
/// Output:
/// - A currency with a symbol for each, except Antarctica which has none
fn every_iso_region_resolves() {
    for region in ISO_REGIONS {
        if region == "AQ" {
            assert!(matches!(
                region_currency(region),
                Err(TranslateError::NoCurrency { .. })
            ));
            continue;
        }
        let currency = region_currency(region)
            .unwrap_or_else(|e| panic!("{region} has no currency: {e}"));
        assert_eq!(currency.code.len(), 3, "{region}");
        assert!(!currency.symbol.is_empty(), "{region}");
        assert!(!currency.local_symbol.is_empty(), "{region}");
        assert!(currency.digits <= 3, "{region}");
        let lower = region.to_ascii_lowercase();
        assert_eq!(
            region_currency(&lower).map(|c| c.code.as_str()).ok(),
            Some(currency.code.as_str())
        );
    }
}

#[test]
/// What: Tags for smaller markets build a translated wrapper.
///
/// Inputs:
/// - bn_BD, es_PE, sr_RS, be_BY, ar_MA, sw_TZ, es_DO, si_LK, kk_KZ, es_UY
///
/// Output:
/// - `translated` succeeds for the whole table
fn regional_tags_compile() {
    let mut table = TranslationTable::new();
    for tag in [
        "bn_BD", "es_PE", "sr_RS", "be_BY", "ar_MA", "sw_TZ", "es_DO", "si_LK", "kk_KZ", "es_UY",
    ] {
        table = table.with_language(tag, [("price", "{x, number, money}")]);
    }
    assert!(translated(TranslatedConfig::new(table)).is_ok());
}

#[test]
/// What: Money uses the home symbol and the currency's minor units.
///
/// Inputs:
/// - en_GH (GHS, 2 digits), en_RW (RWF, 0 digits), ar_BH (BHD, 3 digits), es_PE
///
/// Output:
/// - Amounts rounded to each currency's digits with its local symbol
fn money_follows_regional_currency() {
    let render = |tag: &str, value: f64| {
        let table = TranslationTable::new().with_language(tag, [("price", "{x, number, money}")]);
        let compiled = pre_heat(&table, &FormatConfig::default()).expect("compiles");
        let language =
            LanguageContext::resolve(Some(LanguageTag::new(tag)), Some(LanguageTag::new(tag)));
        let params = [("x".to_string(), ParamValue::Number(value))]
            .into_iter()
            .collect();
        translate_with_defaults(&compiled, &language, &params)
            .expect("formats")
            .remove("price")
            .expect("price is translated")
    };
    assert_eq!(render("en_GH", 8.876_54), "GH₵8.88");
    assert_eq!(render("en_RW", 1234.5), "RF1,235");
    assert_eq!(render("ar_BH", 2.0005), "د.ب.2.001");
    assert_eq!(render("es_PE", 8.5), "8,5\u{a0}S/");
}
