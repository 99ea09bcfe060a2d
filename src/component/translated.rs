//! The `Translated` wrapper: props in, translated props out.

use std::fmt;
use std::rc::Rc;

use super::{Component, Element, Props, RenderContext};
use crate::config::FormatConfig;
use crate::error::Result;
use crate::translate::{
    CompiledTable, ParamDerivers, TranslationTable, Translations, pre_heat,
    template_param_values, translate_with_defaults,
};

/// Maps resolved translations (and the current props) to props to merge in.
pub type MapTranslations = Box<dyn Fn(&Translations, &Props) -> Props>;

/// What: Default translation mapping.
///
/// Output:
/// - One text prop per translation key
#[must_use]
pub fn translations_as_props(translations: &Translations, _props: &Props) -> Props {
    translations
        .iter()
        .map(|(key, message)| (key.clone(), message.clone()))
        .collect()
}

/// Everything a [`Translator`] is built from.
#[derive(Default)]
pub struct TranslatedConfig {
    /// Templates for every language.
    pub translations: TranslationTable,
    /// Parameters computed from props on every render.
    pub params: ParamDerivers,
    /// Custom mapping; [`translations_as_props`] when `None`.
    pub map_translations_to_props: Option<MapTranslations>,
    /// Formatting overrides merged over each language's money format.
    pub format: FormatConfig,
}

impl TranslatedConfig {
    /// Config with `translations` and nothing else.
    #[must_use]
    pub fn new(translations: TranslationTable) -> Self {
        Self {
            translations,
            ..Self::default()
        }
    }

    /// Set the derived parameters.
    #[must_use]
    pub fn params(mut self, params: ParamDerivers) -> Self {
        self.params = params;
        self
    }

    /// Set the translation mapping.
    #[must_use]
    pub fn map_translations_to_props(
        mut self,
        map: impl Fn(&Translations, &Props) -> Props + 'static,
    ) -> Self {
        self.map_translations_to_props = Some(Box::new(map));
        self
    }

    /// Set the formatting overrides.
    #[must_use]
    pub fn format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}

impl fmt::Debug for TranslatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatedConfig")
            .field("translations", &self.translations)
            .field("params", &self.params)
            .field(
                "map_translations_to_props",
                &self.map_translations_to_props.is_some(),
            )
            .field("format", &self.format)
            .finish()
    }
}

struct Shared {
    compiled: CompiledTable,
    params: ParamDerivers,
    map: Option<MapTranslations>,
}

/// Precompiled translations ready to wrap any number of components.
#[derive(Clone)]
pub struct Translator {
    shared: Rc<Shared>,
}

/// What: Precompile `config` into a [`Translator`].
///
/// Inputs:
/// - `config`: translations, derived params, mapping and format overrides
///
/// Output:
/// - `Translator` whose compiled table is reused by every render
///
/// # Errors
/// - Any [`pre_heat`] error; nothing is deferred to render time
pub fn translated(config: TranslatedConfig) -> Result<Translator> {
    let compiled = pre_heat(&config.translations, &config.format)?;
    tracing::debug!(
        languages = compiled.languages().len(),
        templates = compiled.template_count(),
        "translator ready"
    );
    Ok(Translator {
        shared: Rc::new(Shared {
            compiled,
            params: config.params,
            map: config.map_translations_to_props,
        }),
    })
}

impl Translator {
    /// Wrap `component` so it renders with translated props.
    #[must_use]
    pub fn wrap(&self, component: impl Component + 'static) -> Translated {
        Translated {
            shared: Rc::clone(&self.shared),
            inner: Rc::new(component),
        }
    }

    /// The compiled table shared by every wrapped component.
    #[must_use]
    pub fn compiled(&self) -> &CompiledTable {
        &self.shared.compiled
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("compiled", &self.shared.compiled)
            .finish_non_exhaustive()
    }
}

/// A component rendered with translations merged into its props.
#[derive(Clone)]
pub struct Translated {
    shared: Rc<Shared>,
    inner: Rc<dyn Component>,
}

impl Translated {
    /// What: Translated props for one render.
    ///
    /// # Errors
    /// - Formatting errors of any visible template
    pub fn translated_props(&self, props: &Props, ctx: &RenderContext) -> Result<Props> {
        let params = template_param_values(props, &self.shared.params);
        let translations = translate_with_defaults(&self.shared.compiled, &ctx.language(), &params)?;
        let mapped = match &self.shared.map {
            Some(map) => map(&translations, props),
            None => translations_as_props(&translations, props),
        };
        Ok(props.merged_with(&mapped))
    }
}

impl Component for Translated {
    fn render(&self, props: &Props, ctx: &RenderContext) -> Result<Element> {
        let props = self.translated_props(props, ctx)?;
        self.inner.render(&props, ctx)
    }
}

impl fmt::Debug for Translated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translated").finish_non_exhaustive()
    }
}
