/// A cursor for byte-wise tag scanning with position tracking.
///
/// All delimiters in the tag grammar are ASCII, so scanning by byte and
/// stopping only on delimiter bytes keeps every slice on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at byte `i` of `s`.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    pub fn new(s: &'a str) -> Self {
        Self::at(s, 0)
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes `b` if it is the current byte.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Consumes bytes while `pred` holds and returns them.
    ///
    /// `pred` must reject every byte it could stop inside a multi-byte char
    /// on; predicates that only test ASCII bytes are always safe.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        &self.s[start..self.i]
    }

    /// Skips Unicode whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.i += rest.len() - rest.trim_start().len();
    }

    /// Moves to the next occurrence of `pat`. Returns false, without moving,
    /// when there is none.
    pub fn seek(&mut self, pat: &str) -> bool {
        match self.rest().find(pat) {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("[/note]");
        assert!(cur.starts_with(b"[/"));
        assert!(!cur.starts_with(b"]"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn starts_with_at_eof() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(2);
        assert!(cur.eof());
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn eat_only_consumes_matching_byte() {
        let mut cur = Cursor::new("[x");
        assert!(!cur.eat(b'x'));
        assert!(cur.eat(b'['));
        assert_eq!(cur.rest(), "x");
    }

    #[test]
    fn eat_while_stops_on_delimiter() {
        let mut cur = Cursor::new("naïve]rest");
        assert_eq!(cur.eat_while(|b| b != b']'), "naïve");
        assert_eq!(cur.peek(), Some(b']'));
    }

    #[test]
    fn skip_whitespace_handles_unicode_spaces() {
        let mut cur = Cursor::new("\u{3000} \n\t\"x");
        cur.skip_whitespace();
        assert_eq!(cur.peek(), Some(b'"'));
    }

    #[test]
    fn seek_finds_pattern_or_stays() {
        let mut cur = Cursor::new("ab[/x]cd");
        assert!(cur.seek("[/x]"));
        assert_eq!(cur.pos(), 2);
        assert!(!cur.seek("zz"));
        assert_eq!(cur.pos(), 2);
    }
}
