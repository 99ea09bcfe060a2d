//! Language tags and the signal that broadcasts the active language.
//!
//! A [`crate::component::TranslationProvider`] publishes a
//! [`LanguageContext`] on a [`LanguageSignal`]; translated components read it
//! through a [`LanguageSubscriber`] handed down the render chain.

mod detection;
mod signal;
mod tag;

pub use detection::detect_system_locale;
pub use signal::{LanguageSignal, LanguageSubscriber};
pub use tag::{DEFAULT_LANGUAGE, LanguageContext, LanguageTag};
