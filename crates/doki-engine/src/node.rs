//! # Nodes
//!
//! A [`Node`] is the structured result of expanding one tag. It is a small
//! element tree: a tag name, ordered attributes with unique keys, and ordered
//! children. Every node serializes to a self-contained markup fragment that
//! can be spliced back into the surrounding text.
//!
//! ## Children
//!
//! - [`Child::Text`] is escaped on output, including `[` and `]`, so expanded
//!   text can never be scanned as a tag again by a later pass.
//! - [`Child::Markup`] is written verbatim. Handlers use it for content that
//!   has already been through an inline pass.
//! - [`Child::Node`] nests another element.

use std::fmt;

/// Elements that have no closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "source"];

/// True if `name` can be written as an attribute name as is: a non-empty run
/// of ASCII letters, digits, `_`, `.`, `:` and `-`.
pub fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'-'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Markup(String),
    Node(Node),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Child>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns the value of attribute `key`, if set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets attribute `key`. An existing value is replaced in place, so the
    /// attribute keeps the position of its first assignment.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn push(&mut self, child: Child) {
        self.children.push(child);
    }

    pub fn with_child(mut self, node: Node) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Child::Markup(markup.into()));
        self
    }

    /// Child elements only, skipping text and markup.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            _ => None,
        })
    }

    /// Concatenated text and markup of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Text(t) | Child::Markup(t) => out.push_str(t),
                Child::Node(n) => n.collect_text(out),
            }
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serializes the node and its descendants.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    pub fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attributes {
            if !is_attribute_name(key) {
                log::debug!("dropping attribute with invalid name `{key}` on <{}>", self.tag);
                continue;
            }
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                Child::Text(t) => write_text(t, out),
                Child::Markup(m) => out.push_str(m),
                Child::Node(n) => n.write_markup(out),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

fn write_text(text: &str, out: &mut String) {
    for ch in html_escape::encode_text(text).chars() {
        match ch {
            '[' => out.push_str("&#91;"),
            ']' => out.push_str("&#93;"),
            _ => out.push(ch),
        }
    }
}
