//! Error type shared by every translation stage.

use std::fmt;
use std::path::PathBuf;

/// What: Error type for precompilation, formatting and table loading.
///
/// Inputs: Generated by the template compiler, the currency lookup, the
/// formatter and the YAML table loader.
///
/// Output: Implements `Display`/`Error` so callers can propagate it with `?`.
///
/// Details:
/// - Nothing in the crate recovers from these locally; they are
///   configuration errors surfaced to whoever built the translation table.
/// - A missing translation key or a missing language is not an error.
#[derive(Debug)]
pub enum TranslateError {
    /// The language tag does not end in a two-letter region code.
    InvalidRegion {
        /// Offending language tag.
        tag: String,
    },
    /// The region code has no entry in the currency reference data.
    UnknownRegion {
        /// Region code taken from the language tag.
        region: String,
    },
    /// The region is known but no currency (or currency metadata) exists for it.
    NoCurrency {
        /// Region code taken from the language tag.
        region: String,
    },
    /// A message template could not be parsed.
    Syntax {
        /// Template source that failed.
        template: String,
        /// Byte offset of the failure.
        offset: usize,
        /// Human readable reason.
        reason: String,
    },
    /// A template referenced a parameter that was not supplied.
    MissingParam {
        /// Parameter name.
        name: String,
    },
    /// A numeric placeholder received a value that is not a number.
    NotANumber {
        /// Parameter name.
        name: String,
        /// Value that was supplied.
        value: String,
    },
    /// I/O error while reading a translation table or config file.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// A translation table or config file has invalid content.
    Table {
        /// File that failed.
        path: PathBuf,
        /// Human readable reason.
        reason: String,
    },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { tag } => {
                write!(f, "language tag '{tag}' does not end in a region code")
            }
            Self::UnknownRegion { region } => {
                write!(f, "region '{region}' has no currency reference data")
            }
            Self::NoCurrency { region } => write!(f, "region '{region}' has no currency"),
            Self::Syntax {
                template,
                offset,
                reason,
            } => write!(f, "{reason} at offset {offset} in template \"{template}\""),
            Self::MissingParam { name } => {
                write!(f, "template parameter '{name}' was not provided")
            }
            Self::NotANumber { name, value } => {
                write!(f, "template parameter '{name}' is not a number: \"{value}\"")
            }
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Table { path, reason } => write!(f, "invalid file {}: {reason}", path.display()),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TranslateError>;
