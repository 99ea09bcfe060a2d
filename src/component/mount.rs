//! A mounted render tree.

use super::{Element, Node, Props, RenderContext};
use crate::error::Result;
use crate::language::{LanguageSignal, LanguageSubscriber};

/// A rendered root node that re-renders on demand.
///
/// The root context is either empty or bound to an externally owned
/// [`LanguageSignal`]; [`Mounted::refresh`] re-renders only when that signal
/// changed since the last render.
#[derive(Debug)]
pub struct Mounted {
    root: Node,
    ctx: RenderContext,
    watch: Option<LanguageSubscriber>,
    element: Element,
    renders: usize,
}

impl Mounted {
    /// What: Render `root` once with no language above it.
    ///
    /// # Errors
    /// - Any render error of the tree
    pub fn mount(root: Node) -> Result<Self> {
        Self::mount_in(root, RenderContext::new(), None)
    }

    /// What: Render `root` with its language taken from `signal`.
    ///
    /// # Errors
    /// - Any render error of the tree
    pub fn mount_with_language(root: Node, signal: &LanguageSignal) -> Result<Self> {
        let ctx = RenderContext::new().with_language(signal.subscribe());
        Self::mount_in(root, ctx, Some(signal.subscribe()))
    }

    fn mount_in(root: Node, ctx: RenderContext, watch: Option<LanguageSubscriber>) -> Result<Self> {
        let mut mounted = Self {
            element: Element::text(""),
            root,
            ctx,
            watch,
            renders: 0,
        };
        mounted.rerender()?;
        Ok(mounted)
    }

    /// A language change is only marked seen once a render succeeds, so a
    /// failed render is retried by the next [`Mounted::refresh`].
    fn rerender(&mut self) -> Result<()> {
        self.element = self.root.render(&self.ctx)?;
        self.renders += 1;
        if let Some(watch) = self.watch.as_mut() {
            watch.mark_seen();
        }
        Ok(())
    }

    /// Last rendered output.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// What: Replace the root props and re-render.
    ///
    /// # Errors
    /// - Any render error; the previous output is kept
    pub fn set_props(&mut self, props: Props) -> Result<()> {
        self.root.set_props(props);
        self.rerender()
    }

    /// What: Re-render if the watched language changed.
    ///
    /// Output:
    /// - `true` when a render happened
    ///
    /// # Errors
    /// - Any render error; the change stays pending for the next call
    pub fn refresh(&mut self) -> Result<bool> {
        let changed = self.watch.as_ref().is_some_and(LanguageSubscriber::has_changed);
        if changed {
            self.rerender()?;
        }
        Ok(changed)
    }

    /// How many times the tree has rendered.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.renders
    }
}
