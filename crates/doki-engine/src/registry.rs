//! # Tag Registry
//!
//! Maps a tag name to the handler that expands it. The registry is a plain
//! value owned by the caller: two registries never share state, and a
//! registry can be changed between parses (late registration).
//!
//! Names are not validated. Registering a name twice replaces the earlier
//! handler.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::args::Args;
use crate::handlers;
use crate::node::Node;
use crate::parsing::Expander;

/// A tag handler: `(expander, content, args) -> Node`.
///
/// The expander lets a handler run an inline pass over its own content
/// against the same registry it was dispatched from.
pub type Handler = Arc<dyn Fn(&Expander<'_>, &str, &Args) -> Node + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("cannot alias unknown tag `{0}`")]
    UnknownTag(String),
}

#[derive(Clone)]
pub struct TagDefinition {
    name: String,
    handler: Handler,
}

impl TagDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expand(&self, expander: &Expander<'_>, content: &str, args: &Args) -> Node {
        (self.handler)(expander, content, args)
    }
}

impl fmt::Debug for TagDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct TagRegistry {
    tags: HashMap<String, TagDefinition>,
}

impl TagRegistry {
    /// A registry with no tags; every tag passes through verbatim.
    pub fn empty() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// A registry holding the built-in tag set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        handlers::register_defaults(&mut registry);
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Expander<'_>, &str, &Args) -> Node + Send + Sync + 'static,
    {
        self.register_handler(name, Arc::new(handler));
    }

    pub fn register_handler(&mut self, name: impl Into<String>, handler: Handler) {
        let name = name.into();
        if self.tags.contains_key(&name) {
            log::debug!("replacing handler for tag `{name}`");
        }
        self.tags
            .insert(name.clone(), TagDefinition { name, handler });
    }

    /// Registers `alias` as another name for the handler behind `target`.
    pub fn alias(
        &mut self,
        alias: impl Into<String>,
        target: &str,
    ) -> Result<(), RegistryError> {
        let handler = self
            .tags
            .get(target)
            .map(|def| Arc::clone(&def.handler))
            .ok_or_else(|| RegistryError::UnknownTag(target.to_string()))?;
        self.register_handler(alias, handler);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&TagDefinition> {
        self.tags.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
