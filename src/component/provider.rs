//! Component that broadcasts the language to its subtree.

use super::{Component, Element, Props, RenderContext};
use crate::error::Result;
use crate::language::{LanguageContext, LanguageSignal, LanguageSubscriber, LanguageTag};

/// Broadcasts a [`LanguageContext`] to every descendant.
///
/// Reads two string props: `language` (the active language) and
/// `default_language` (falls back to [`crate::language::DEFAULT_LANGUAGE`]).
/// Empty strings count as absent. Children come from the `children` prop and
/// are rendered inside a single `div`.
#[derive(Debug, Clone, Default)]
pub struct TranslationProvider {
    signal: LanguageSignal,
}

impl TranslationProvider {
    /// Provider with its own signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the language this provider broadcasts, outside of rendering.
    #[must_use]
    pub fn subscribe(&self) -> LanguageSubscriber {
        self.signal.subscribe()
    }

    fn tag_prop(props: &Props, name: &str) -> Option<LanguageTag> {
        props
            .get_str(name)
            .filter(|s| !s.is_empty())
            .map(LanguageTag::new)
    }
}

impl Component for TranslationProvider {
    fn render(&self, props: &Props, ctx: &RenderContext) -> Result<Element> {
        let language = LanguageContext::resolve(
            Self::tag_prop(props, "language"),
            Self::tag_prop(props, "default_language"),
        );
        self.signal.publish(language);

        let child_ctx = ctx.with_language(self.signal.subscribe());
        let children = props
            .children()
            .iter()
            .map(|child| child.render(&child_ctx))
            .collect::<Result<Vec<_>>>()?;
        Ok(Element::tag("div").children(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Node;
    use crate::language::DEFAULT_LANGUAGE;

    fn language_probe() -> Node {
        Node::new(
            |_: &Props, ctx: &RenderContext| -> Result<Element> {
                let lang = ctx.language();
                Ok(Element::text(format!("{}|{}", lang.active, lang.default)))
            },
            Props::new(),
        )
    }

    fn render(props: Props) -> Element {
        TranslationProvider::new()
            .render(&props, &RenderContext::new())
            .expect("provider renders")
    }

    #[test]
    fn broadcasts_explicit_language_and_default() {
        let el = render(
            Props::new()
                .with("language", "en_IE")
                .with("default_language", "en_AU")
                .with("children", vec![language_probe()]),
        );
        assert_eq!(el.text_content(), "en_IE|en_AU");
    }

    #[test]
    fn falls_back_to_default_then_constant() {
        let el = render(
            Props::new()
                .with("default_language", "en_AU")
                .with("children", vec![language_probe()]),
        );
        assert_eq!(el.text_content(), "en_AU|en_AU");

        let el = render(
            Props::new()
                .with("language", "")
                .with("children", vec![language_probe()]),
        );
        assert_eq!(
            el.text_content(),
            format!("{DEFAULT_LANGUAGE}|{DEFAULT_LANGUAGE}")
        );
    }

    #[test]
    fn wraps_children_in_one_container() {
        let el = render(Props::new().with("children", vec![language_probe(), language_probe()]));
        match el {
            Element::Node { tag, children, .. } => {
                assert_eq!(tag, "div");
                assert_eq!(children.len(), 2);
                assert!(matches!(children[0], Element::Text(_)));
            }
            Element::Text(_) => panic!("expected a container"),
        }
    }

    #[test]
    fn nearest_provider_wins() {
        let inner = Node::new(
            TranslationProvider::new(),
            Props::new()
                .with("language", "de_DE")
                .with("children", vec![language_probe()]),
        );
        let el = render(
            Props::new()
                .with("language", "fr_FR")
                .with("children", vec![language_probe(), inner]),
        );
        assert_eq!(el.text_content(), "fr_FR|en_USde_DE|en_US");
    }

    #[test]
    fn subscribers_see_committed_changes_only() {
        let provider = TranslationProvider::new();
        let mut sub = provider.subscribe();
        let ctx = RenderContext::new();

        provider
            .render(&Props::new().with("language", "en_CA"), &ctx)
            .expect("renders");
        assert!(sub.has_changed());
        sub.mark_seen();

        provider
            .render(&Props::new().with("language", "en_CA"), &ctx)
            .expect("renders");
        assert!(!sub.has_changed());
        assert_eq!(sub.current().active.as_str(), "en_CA");
    }
}
