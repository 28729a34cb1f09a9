//! # Normalizers
//!
//! Pure functions over already-extracted tag content. None of them know about
//! tags, registries, or nodes; handlers call them and build nodes from the
//! result.
//!
//! - **`code`**: indentation stripping for code blocks
//! - **`list`**: item splitting and bullet / number format inference
//! - **`table`**: row and cell splitting

pub mod code;
pub mod list;
pub mod table;

pub use code::normalize_code_block;
pub use list::{ListKind, ListModel, NumberFormat, parse_list};
pub use table::{TableModel, parse_table};
