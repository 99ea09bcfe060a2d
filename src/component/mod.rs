//! Minimal component tree: props in, [`Element`] out.
//!
//! The language travels down the tree inside a [`RenderContext`]: a
//! [`TranslationProvider`] publishes it and hands its descendants a context
//! bound to its signal, and [`Translated`] components read it from there.

mod element;
mod mount;
mod props;
mod provider;
mod translated;

use std::fmt;
use std::rc::Rc;

pub use element::Element;
pub use mount::Mounted;
pub use props::{PropValue, Props};
pub use provider::TranslationProvider;
pub use translated::{
    MapTranslations, Translated, TranslatedConfig, Translator, translated, translations_as_props,
};

use crate::error::Result;
use crate::language::{LanguageContext, LanguageSubscriber};

/// Something that renders props into markup.
pub trait Component {
    /// What: Render with `props` under `ctx`.
    ///
    /// # Errors
    /// - Any error from formatting translations along the render path
    fn render(&self, props: &Props, ctx: &RenderContext) -> Result<Element>;
}

impl<F> Component for F
where
    F: Fn(&Props, &RenderContext) -> Result<Element>,
{
    fn render(&self, props: &Props, ctx: &RenderContext) -> Result<Element> {
        self(props, ctx)
    }
}

/// A component paired with the props to render it with.
#[derive(Clone)]
pub struct Node {
    component: Rc<dyn Component>,
    props: Props,
}

impl Node {
    /// Pair `component` with `props`.
    #[must_use]
    pub fn new(component: impl Component + 'static, props: Props) -> Self {
        Self {
            component: Rc::new(component),
            props,
        }
    }

    /// Pair an already shared component with `props`.
    #[must_use]
    pub fn shared(component: Rc<dyn Component>, props: Props) -> Self {
        Self { component, props }
    }

    /// Props this node renders with.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Replace the props.
    pub fn set_props(&mut self, props: Props) {
        self.props = props;
    }

    /// What: Render the node.
    ///
    /// # Errors
    /// - Whatever the component's render returns
    pub fn render(&self, ctx: &RenderContext) -> Result<Element> {
        self.component.render(&self.props, ctx)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// Ambient values threaded through a render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    language: Option<LanguageSubscriber>,
}

impl RenderContext {
    /// Context with no provider above it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Child context bound to the nearest provider's signal.
    #[must_use]
    pub fn with_language(&self, subscriber: LanguageSubscriber) -> Self {
        Self {
            language: Some(subscriber),
        }
    }

    /// Current language pair, or [`LanguageContext::fallback`] outside any provider.
    #[must_use]
    pub fn language(&self) -> LanguageContext {
        self.language
            .as_ref()
            .map_or_else(LanguageContext::fallback, LanguageSubscriber::current)
    }

    /// Whether a provider is mounted above this point.
    #[must_use]
    pub const fn has_provider(&self) -> bool {
        self.language.is_some()
    }
}
