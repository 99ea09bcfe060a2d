//! Raw and compiled translation tables.

use std::collections::{BTreeMap, HashMap};

use crate::format::CompiledTemplate;
use crate::language::LanguageTag;

/// Raw messages of one language: key -> template source.
pub type RawMessages = BTreeMap<String, String>;

/// Compiled messages of one language: key -> template.
pub type MessageSet = BTreeMap<String, CompiledTemplate>;

/// Formatted output of one render: key -> message.
pub type Translations = BTreeMap<String, String>;

/// Template sources for every language, as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    languages: BTreeMap<LanguageTag, RawMessages>,
}

impl TranslationTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Builder-style insertion of a whole language.
    ///
    /// Details:
    /// - Keys already present for the language are replaced.
    #[must_use]
    pub fn with_language<K, V>(
        mut self,
        language: impl Into<LanguageTag>,
        messages: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entry = self.languages.entry(language.into()).or_default();
        entry.extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Insert (or replace) a single template.
    pub fn insert(
        &mut self,
        language: impl Into<LanguageTag>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.languages
            .entry(language.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Merge another table in; its templates win on conflicts.
    pub fn extend(&mut self, other: Self) {
        for (language, messages) in other.languages {
            self.languages.entry(language).or_default().extend(messages);
        }
    }

    /// Messages of one language.
    #[must_use]
    pub fn get(&self, language: &LanguageTag) -> Option<&RawMessages> {
        self.languages.get(language)
    }

    /// Iterate over languages in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageTag, &RawMessages)> {
        self.languages.iter()
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether the table has no languages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Templates compiled for every language of a [`TranslationTable`].
///
/// Immutable once built; shared by every instance of a translated component.
#[derive(Debug, Clone, Default)]
pub struct CompiledTable {
    sets: HashMap<LanguageTag, MessageSet>,
}

impl CompiledTable {
    pub(crate) fn insert(&mut self, language: LanguageTag, set: MessageSet) {
        self.sets.insert(language, set);
    }

    /// Message set of one language.
    #[must_use]
    pub fn get(&self, language: &LanguageTag) -> Option<&MessageSet> {
        self.sets.get(language)
    }

    /// Compiled languages, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&LanguageTag> {
        let mut tags: Vec<&LanguageTag> = self.sets.keys().collect();
        tags.sort_unstable();
        tags
    }

    /// Total number of compiled templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.sets.values().map(BTreeMap::len).sum()
    }
}
