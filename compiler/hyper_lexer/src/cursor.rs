//! Byte cursor over source text.
//!
//! Reads past the end return `0`, which never starts a token, so the
//! scanner can peek freely without bounds checks at every call site.

pub(crate) struct Cursor<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.pos + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) -> u8 {
        let byte = self.current();
        if !self.is_eof() {
            self.pos += 1;
        }
        byte
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Skip the remainder of a UTF-8 character whose lead byte was just consumed.
    pub(crate) fn finish_char(&mut self, lead: u8) {
        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.pos = (self.pos + width - 1).min(self.bytes.len());
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.bytes[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Advance to the next `"` or `\n`, returning the byte found or `0` at EOF.
    pub(crate) fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.bytes[self.pos..];
        match memchr::memchr2(b'"', b'\n', remaining) {
            Some(offset) => {
                self.pos += offset;
                self.bytes[self.pos]
            }
            None => {
                self.pos = self.bytes.len();
                0
            }
        }
    }

    /// Source text between two byte offsets.
    ///
    /// Offsets produced by the scanner always sit on ASCII bytes, hence on
    /// char boundaries; anything else yields an empty slice.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        self.src.get(start..end).unwrap_or("")
    }
}
