//! # Default Handlers
//!
//! The built-in tag set. Each handler turns `(content, args)` into a
//! [`Node`](crate::node::Node); the typed models here (`CodeBlock`, `Link`,
//! `Media`) and the normalizer models (`ListModel`, `TableModel`) each know
//! how to become one.
//!
//! Rich-content handlers (wrappers, list items, table cells) run one inline
//! pass over their content. Code and link text is escaped instead.

pub mod code;
pub mod link;
pub mod list;
pub mod media;
pub mod table;
pub mod wrapper;

pub use code::CodeBlock;
pub use link::{Link, LinkTarget};
pub use media::{Media, MediaKind};
pub use wrapper::wrapper;

use crate::registry::TagRegistry;

/// Plain content wrappers: tag name and the element they produce.
pub const WRAPPERS: &[(&str, &str)] = &[
    ("title", "doki-title"),
    ("heading", "doki-heading"),
    ("subheading", "doki-subheading"),
    ("p", "doki-paragraph"),
    ("paragraph", "doki-paragraph"),
    ("citation", "doki-citation"),
    ("credit", "doki-credit"),
    ("footer", "doki-footer"),
    ("tab", "doki-tab"),
    ("frame", "doki-frame"),
    ("note", "doki-note"),
    ("warning", "doki-warning"),
    ("danger", "doki-danger"),
];

/// Adds the built-in tags to `registry`, replacing any of the same name.
pub fn register_defaults(registry: &mut TagRegistry) {
    for &(name, element) in WRAPPERS {
        registry.register(name, wrapper(element));
    }

    registry.register("code", code::inline_code);
    registry.register("codeblock", code::code_block);
    registry.register("link", link::link);
    registry.register("img", media::image);
    registry.register("image", media::image);
    registry.register("video", media::video);
    registry.register("iframe", media::iframe);
    registry.register("table", table::table);
    registry.register("list", list::list);
}
