//! Rendered markup tree.

use std::collections::BTreeMap;
use std::fmt;

/// Output of a render: text or a tagged node with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Text content.
    Text(String),
    /// Tagged node.
    Node {
        /// Tag name, e.g. `div`.
        tag: String,
        /// Attributes in name order.
        attrs: BTreeMap<String, String>,
        /// Child elements.
        children: Vec<Element>,
    },
}

impl Element {
    /// Text element.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Empty tagged node.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Node {
            tag: name.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. No-op on text elements.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Node { attrs, .. } = &mut self {
            attrs.insert(name.into(), value.into());
        }
        self
    }

    /// Append a child. No-op on text elements.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        if let Self::Node { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append children. No-op on text elements.
    #[must_use]
    pub fn children(mut self, more: impl IntoIterator<Item = Self>) -> Self {
        if let Self::Node { children, .. } = &mut self {
            children.extend(more);
        }
        self
    }

    /// Attribute value by name.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Node { attrs, .. } => attrs.get(name).map(String::as_str),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this element and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Node { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First element (depth first, self included) whose `id` attribute is `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        match self {
            Self::Node { children, .. } => children.iter().find_map(|c| c.find_by_id(id)),
            Self::Text(_) => None,
        }
    }
}

fn escape(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in s.chars() {
        match ch {
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '&' => f.write_str("&amp;")?,
            '"' => f.write_str("&quot;")?,
            _ => write!(f, "{ch}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => escape(s, f),
            Self::Node {
                tag,
                attrs,
                children,
            } => {
                write!(f, "<{tag}")?;
                for (name, value) in attrs {
                    write!(f, " {name}=\"")?;
                    escape(value, f)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}
