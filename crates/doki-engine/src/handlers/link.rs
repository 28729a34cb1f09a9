use crate::args::Args;
use crate::node::Node;
use crate::parsing::Expander;

/// Marks a same-page anchor reference.
pub const FRAGMENT_MARKER: char = '#';

/// How the renderer should follow a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Scroll to an anchor on the current page.
    Internal,
    /// Open in a new context.
    External,
}

impl LinkTarget {
    pub fn of(href: &str) -> Self {
        if href.starts_with(FRAGMENT_MARKER) {
            LinkTarget::Internal
        } else {
            LinkTarget::External
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinkTarget::Internal => "internal",
            LinkTarget::External => "external",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    pub target: LinkTarget,
}

impl Link {
    /// The first positional argument overrides the target, which otherwise
    /// is the link text itself.
    pub fn from_tag(content: &str, args: &Args) -> Self {
        let href = args.positional(0).unwrap_or(content).to_string();
        Self {
            text: content.to_string(),
            target: LinkTarget::of(&href),
            href,
        }
    }

    pub fn into_node(self) -> Node {
        Node::new("doki-link")
            .with_attr("href", self.href)
            .with_attr("data-target", self.target.as_str())
            .with_text(self.text)
    }
}

pub fn link(_: &Expander<'_>, content: &str, args: &Args) -> Node {
    Link::from_tag(content, args).into_node()
}
