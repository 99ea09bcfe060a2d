//! ICU-style message formatting.
//!
//! Templates are parsed once into a [`CompiledTemplate`] bound to a locale and
//! a [`crate::config::FormatConfig`]; formatting then only substitutes
//! parameters.

mod number;
mod parser;
mod plural;
mod template;
mod value;

pub use number::{NumberLocale, format_number};
pub use plural::{PluralCategory, PluralRule};
pub use template::CompiledTemplate;
pub use value::{ParamValue, ResolvedParams};
