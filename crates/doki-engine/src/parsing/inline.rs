//! Inline tags: `[name: "content" args]`.
//!
//! Content is everything between the first pair of double quotes; there is
//! no escaping, so a quote inside content ends it early. Inline tags do not
//! nest inside each other's quotes, which keeps a single pass sufficient.

use super::{Expander, cursor::Cursor, kinds::InlineTag};

/// One matched inline tag, borrowing from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMatch<'a> {
    pub name: &'a str,
    pub content: &'a str,
    pub args: &'a str,
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset just past the closing `]`.
    pub end: usize,
}

/// Runs one inline pass over `text`.
pub fn expand_inline(expander: &Expander<'_>, text: &str) -> String {
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    while cur.seek("[") {
        let Some(tag) = try_parse_inline(&mut cur) else {
            cur.bump();
            continue;
        };

        if let Some(node) = expander.dispatch(tag.name, tag.content, tag.args) {
            out.push_str(&text[copied..tag.start]);
            node.write_markup(&mut out);
            copied = tag.end;
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Attempts to read an inline tag at the cursor.
///
/// On success the cursor sits just past the closing `]`. On failure it is
/// left where it started.
pub fn try_parse_inline<'a>(cur: &mut Cursor<'a>) -> Option<InlineMatch<'a>> {
    let saved = cur.clone();
    let start = cur.pos();

    let parsed = parse_parts(cur);
    let Some((name, content, args)) = parsed else {
        *cur = saved;
        return None;
    };

    Some(InlineMatch {
        name,
        content,
        args,
        start,
        end: cur.pos(),
    })
}

fn parse_parts<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str, &'a str)> {
    if !cur.eat(InlineTag::OPEN) {
        return None;
    }

    let name = cur.eat_while(InlineTag::is_name_byte);
    if name.is_empty() || !cur.eat(InlineTag::SEPARATOR) {
        return None;
    }

    cur.skip_whitespace();
    if !cur.eat(InlineTag::QUOTE) {
        return None;
    }
    let content = cur.eat_while(|b| b != InlineTag::QUOTE);
    if !cur.eat(InlineTag::QUOTE) {
        return None;
    }

    let args = cur.eat_while(|b| b != InlineTag::CLOSE);
    if !cur.eat(InlineTag::CLOSE) {
        return None;
    }

    Some((name, content, args))
}
