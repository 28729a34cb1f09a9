//! Block tags: `[name args]content[/name]`.
//!
//! A single left-to-right pass. At each `[` the scanner tries to read an
//! opener and find its closing tag; on success the whole span is handed to
//! the registry, otherwise the `[` is plain text and scanning moves on.
//!
//! Content is not scanned for further block tags. A recognized span whose
//! name is unknown stays verbatim, including anything inside it.

use crate::options::BlockNesting;

use super::{Expander, cursor::Cursor, kinds::BlockTag};

/// One matched block tag, borrowing from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMatch<'a> {
    pub name: &'a str,
    pub args: &'a str,
    /// Content between the tags, untrimmed.
    pub content: &'a str,
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset just past the closing tag.
    pub end: usize,
}

/// Runs the block phase over `text`.
pub fn expand_blocks(expander: &Expander<'_>, text: &str) -> String {
    let nesting = expander.options().nesting;
    let mut cur = Cursor::new(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    while cur.seek("[") {
        let Some(block) = try_parse_block(&mut cur, nesting) else {
            cur.bump();
            continue;
        };

        if let Some(node) = expander.dispatch(block.name, block.content.trim(), block.args) {
            out.push_str(&text[copied..block.start]);
            node.write_markup(&mut out);
            copied = block.end;
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Attempts to read a complete block tag at the cursor.
///
/// On success the cursor sits just past the closing tag. On failure it is
/// left where it started.
pub fn try_parse_block<'a>(cur: &mut Cursor<'a>, nesting: BlockNesting) -> Option<BlockMatch<'a>> {
    let start = cur.pos();
    let (name, args) = try_parse_opener(cur)?;
    let content_start = cur.pos();

    let found = match nesting {
        BlockNesting::Balanced => find_balanced_close(cur.s, content_start, name),
        BlockNesting::Legacy => find_first_close(cur.s, content_start, name),
    };

    let Some((content_end, end)) = found else {
        log::debug!("block tag `{name}` at byte {start} is never closed");
        cur.i = start;
        return None;
    };

    cur.i = end;
    Some(BlockMatch {
        name,
        args,
        content: &cur.s[content_start..content_end],
        start,
        end,
    })
}

/// Reads `[name args]`, returning name and raw args.
///
/// An opener whose args start with `:` is an inline tag and is rejected.
fn try_parse_opener<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    let saved = cur.clone();
    if !cur.eat(BlockTag::OPEN) {
        return None;
    }

    let name = cur.eat_while(BlockTag::is_name_byte);
    let args = cur.eat_while(|b| b != BlockTag::CLOSE);
    if name.is_empty() || args.starts_with(':') || !cur.eat(BlockTag::CLOSE) {
        // Not an opener, restore cursor
        *cur = saved;
        return None;
    }

    Some((name, args))
}

/// Finds the first `[/name]` at or after `from`.
fn find_first_close(s: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let closing = BlockTag::closing(name);
    s[from..]
        .find(&closing)
        .map(|offset| (from + offset, from + offset + closing.len()))
}

/// Finds the `[/name]` that balances an opener ending at `from`, counting
/// nested `[name …]` openers.
fn find_balanced_close(s: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let closing = BlockTag::closing(name);
    let mut cur = Cursor::at(s, from);
    let mut depth = 1usize;

    while cur.seek("[") {
        let at = cur.pos();
        if cur.starts_with(closing.as_bytes()) {
            depth -= 1;
            if depth == 0 {
                return Some((at, at + closing.len()));
            }
            cur.bump_n(closing.len());
            continue;
        }

        match try_parse_opener(&mut cur) {
            Some((inner, _)) if inner == name => depth += 1,
            Some(_) => {}
            None => {
                cur.bump();
            }
        }
    }

    None
}
