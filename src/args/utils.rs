//! Helpers for argument processing.

use translated::{PropValue, Props};

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - `--verbose` wins over `--log-level`.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse one `--param name=value` argument.
///
/// # Errors
/// - Returns `Err` when there is no `=` or the name is empty.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected name=value, got '{raw}'"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty parameter name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// What: Turn `--param` pairs into props.
///
/// Details:
/// - Values that parse as finite numbers become numbers, the rest text.
/// - A repeated name keeps the last value.
pub fn param_props(params: &[(String, String)]) -> Props {
    params
        .iter()
        .map(|(name, value)| {
            let value = match value.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => PropValue::Number(n),
                _ => PropValue::Str(value.clone()),
            };
            (name.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn param_syntax() {
        assert_eq!(
            parse_param("word=big=bigger").expect("valid"),
            ("word".to_string(), "big=bigger".to_string())
        );
        assert_eq!(
            parse_param("empty=").expect("valid"),
            ("empty".to_string(), String::new())
        );
        assert!(parse_param("noequals").is_err());
        assert!(parse_param(" =x").is_err());
    }

    #[test]
    fn numeric_params_become_numbers() {
        let props = param_props(&[
            ("x".to_string(), "8.87654".to_string()),
            ("name".to_string(), "Ada".to_string()),
            ("inf".to_string(), "inf".to_string()),
            ("x2".to_string(), "1".to_string()),
            ("x2".to_string(), "2".to_string()),
        ]);
        assert_eq!(props.get_number("x"), Some(8.876_54));
        assert_eq!(props.get_str("name"), Some("Ada"));
        assert_eq!(props.get_str("inf"), Some("inf"));
        assert_eq!(props.get_number("x2"), Some(2.0));
    }

    #[test]
    fn verbose_forces_debug() {
        let args = crate::args::Args::try_parse_from(["translated", "-t", "x", "-v"])
            .expect("valid arguments");
        assert_eq!(determine_log_level(&args), "debug");
        let args = crate::args::Args::try_parse_from(["translated", "-t", "x", "--log-level", "trace"])
            .expect("valid arguments");
        assert_eq!(determine_log_level(&args), "trace");
    }
}
