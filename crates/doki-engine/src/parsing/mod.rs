//! # Tag Parsing
//!
//! Two-phase expansion over a text buffer.
//!
//! ## Parsing Phases
//!
//! 1. **Block phase** (`block`): `[name args]content[/name]` spans are replaced
//!    by the serialized node their handler returns
//! 2. **Inline phase** (`inline`): `[name: "content" args]` spans in the block
//!    phase's output are replaced the same way
//!
//! Handlers that accept rich content run one more inline pass over their own
//! content through the [`Expander`] they are given. They never re-enter the
//! block phase.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter constants for both tag forms
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`block`**: block tag scanner with balanced or legacy closing
//! - **`inline`**: inline tag scanner
//!
//! ## Fallback
//!
//! Nothing here fails. A span whose name is not registered stays verbatim,
//! and text that does not complete a tag is plain text.

pub mod block;
pub mod cursor;
pub mod inline;
pub mod kinds;

use crate::args::parse_args;
use crate::node::Node;
use crate::options::ParseOptions;
use crate::registry::TagRegistry;

/// Dispatch context: the registry tags are looked up in, plus options.
///
/// Handlers receive the expander that invoked them so nested content is
/// expanded against the same registry.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'r> {
    registry: &'r TagRegistry,
    options: ParseOptions,
}

impl<'r> Expander<'r> {
    pub fn new(registry: &'r TagRegistry, options: ParseOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r TagRegistry {
        self.registry
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Runs both phases over `text`.
    pub fn parse(&self, text: &str) -> String {
        let blocks = block::expand_blocks(self, text);
        inline::expand_inline(self, &blocks)
    }

    /// Runs the block phase only.
    pub fn blocks(&self, text: &str) -> String {
        block::expand_blocks(self, text)
    }

    /// Runs one inline pass over `content`.
    pub fn inline(&self, content: &str) -> String {
        inline::expand_inline(self, content)
    }

    /// Looks up `name` and runs its handler. `None` means the name is not
    /// registered and the caller keeps the source span.
    pub(crate) fn dispatch(&self, name: &str, content: &str, raw_args: &str) -> Option<Node> {
        let Some(def) = self.registry.lookup(name) else {
            log::debug!("unknown tag `{name}`, leaving it verbatim");
            return None;
        };

        let args = parse_args(raw_args);
        log::trace!("expanding `{name}` with {} argument(s)", args.len());
        Some(def.expand(self, content, &args))
    }
}

/// Expands every recognized tag in `text` with default options.
pub fn parse(registry: &TagRegistry, text: &str) -> String {
    parse_with(registry, ParseOptions::default(), text)
}

pub fn parse_with(registry: &TagRegistry, options: ParseOptions, text: &str) -> String {
    Expander::new(registry, options).parse(text)
}

/// The block phase on its own.
pub fn parse_blocks(registry: &TagRegistry, options: ParseOptions, text: &str) -> String {
    Expander::new(registry, options).blocks(text)
}

/// The inline phase on its own.
pub fn parse_inline(registry: &TagRegistry, options: ParseOptions, text: &str) -> String {
    Expander::new(registry, options).inline(text)
}

#[cfg(test)]
mod tests;
