//! Delimiters of the two tag forms. The scanners read these constants and
//! never hardcode a bracket themselves.
//!
//! ```text
//! block:   [name args]content[/name]
//! inline:  [name: "content" args]
//! ```

/// `[name args]content[/name]`
pub struct BlockTag;

impl BlockTag {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const END_MARK: u8 = b'/';

    /// Block names are ASCII word characters.
    pub fn is_name_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }

    /// The closing tag for `name`, e.g. `[/note]`.
    pub fn closing(name: &str) -> String {
        format!(
            "{}{}{name}{}",
            Self::OPEN as char,
            Self::END_MARK as char,
            Self::CLOSE as char
        )
    }
}

/// `[name: "content" args]`
pub struct InlineTag;

impl InlineTag {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const SEPARATOR: u8 = b':';
    pub const QUOTE: u8 = b'"';

    /// Inline names run up to the separator and may not contain brackets.
    pub fn is_name_byte(b: u8) -> bool {
        b != Self::SEPARATOR && b != Self::CLOSE && b != Self::OPEN
    }
}
