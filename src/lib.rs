//! Library entry for `translated`: language-aware components whose props are
//! filled from precompiled ICU-style message templates.
//!
//! A [`component::TranslationProvider`] broadcasts the active and default
//! language down a component tree. Components wrapped by a
//! [`component::Translator`] resolve their messages for that language on every
//! render, falling back to the default language key by key.

pub mod component;
pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod language;
pub mod translate;

pub use component::{
    Component, Element, Mounted, Node, PropValue, Props, RenderContext, TranslatedConfig,
    TranslationProvider, Translator, translated,
};
pub use config::FormatConfig;
pub use error::{Result, TranslateError};
pub use language::{DEFAULT_LANGUAGE, LanguageContext, LanguageSignal, LanguageTag};
pub use translate::{ParamDerivers, TranslationTable};
