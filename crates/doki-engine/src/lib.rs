//! # doki engine
//!
//! Expands bracket tags in a text buffer into markup fragments.
//!
//! ```text
//! [note]Careful with [code: "rm -rf"][/note]
//!   -> <doki-note>Careful with <doki-code-block-container>…</doki-note>
//! ```
//!
//! Text outside recognized tags, including any host markup, passes through
//! unchanged. Tags are looked up in a [`TagRegistry`] the caller owns.
//!
//! ## Modules
//!
//! - **`args`**: argument token parsing
//! - **`node`**: the element tree handlers return, and its serialization
//! - **`normalize`**: code, list, and table content normalizers
//! - **`handlers`**: the built-in tag set
//! - **`registry`**: name to handler mapping
//! - **`parsing`**: the block and inline scanners
//! - **`options`**: matching rule switches

pub mod args;
pub mod handlers;
pub mod node;
pub mod normalize;
pub mod options;
pub mod parsing;
pub mod registry;

pub use args::{Args, Argument, parse_args};
pub use node::{Child, Node};
pub use options::{BlockNesting, NumberFormatDetection, ParseOptions};
pub use parsing::{Expander, parse, parse_blocks, parse_inline, parse_with};
pub use registry::{Handler, RegistryError, TagDefinition, TagRegistry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A registry and options bundled together.
#[derive(Debug, Clone, Default)]
pub struct Doki {
    registry: TagRegistry,
    options: ParseOptions,
}

impl Doki {
    /// Built-in tags, default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            registry: TagRegistry::with_defaults(),
            options,
        }
    }

    pub fn with_registry(registry: TagRegistry, options: ParseOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TagRegistry {
        &mut self.registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Expander<'_>, &str, &Args) -> Node + Send + Sync + 'static,
    {
        self.registry.register(name, handler);
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ParseOptions) {
        self.options = options;
    }

    pub fn parse(&self, text: &str) -> String {
        parse_with(&self.registry, self.options, text)
    }
}
