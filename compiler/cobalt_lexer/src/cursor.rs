//! Bounds-checked cursor over a [`SourceBuffer`].
//!
//! The cursor owns a single `u32` position that only moves forward. Every
//! read goes through [`SourceBuffer::byte_at`], so probing at or past the
//! end yields "no byte" instead of reading out of bounds.
//!
//! # EOF asymmetry
//!
//! [`skip_n`](Cursor::skip_n) refuses to move once the cursor is at EOF,
//! while the `skip_beyond_*` helpers rely on that: a `skip_until` that runs
//! to EOF followed by a `skip` leaves the cursor parked at EOF.

use crate::{SourceBuffer, Span, Token, TokenKind};

/// Forward-only read position over a source buffer.
///
/// [`Copy`], so a snapshot is just a value copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: SourceBuffer<'src>,
    pos: u32,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(source: SourceBuffer<'src>) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The buffer this cursor reads from.
    #[inline]
    pub fn source(&self) -> SourceBuffer<'src> {
        self.source
    }

    /// Returns `true` once the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte under the cursor, `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.byte_at(self.pos)
    }

    /// Returns `true` if the byte under the cursor is `byte`.
    ///
    /// Always `false` at EOF.
    #[inline]
    pub fn matches_byte(&self, byte: u8) -> bool {
        self.current() == Some(byte)
    }

    /// Returns `true` if the source continues with `text` at the cursor.
    #[inline]
    pub fn matches_str(&self, text: &str) -> bool {
        self.remaining().starts_with(text.as_bytes())
    }

    /// Advance by one byte. No-op at EOF.
    #[inline]
    pub fn skip(&mut self) {
        self.skip_n(1);
    }

    /// Advance by `n` bytes. No-op at EOF; never moves past the end.
    #[inline]
    pub fn skip_n(&mut self, n: u32) {
        if !self.is_eof() {
            self.pos = self.pos.saturating_add(n).min(self.source.len());
        }
    }

    /// Advance until `stop(current)` holds or EOF is reached.
    ///
    /// The cursor lands on the first byte satisfying `stop`, or at EOF.
    #[inline]
    pub fn skip_until(&mut self, stop: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if stop(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance to the next `byte` or EOF using SIMD-accelerated search.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source len which fits in u32"
    )]
    pub fn skip_until_byte(&mut self, byte: u8) {
        match memchr::memchr(byte, self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance to the next occurrence of `text` or EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source len which fits in u32"
    )]
    pub fn skip_until_str(&mut self, text: &str) {
        match memchr::memmem::find(self.remaining(), text.as_bytes()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source.len(),
        }
    }

    /// [`skip_until`](Self::skip_until), then one more byte.
    pub fn skip_beyond(&mut self, stop: impl Fn(u8) -> bool) {
        self.skip_until(stop);
        self.skip();
    }

    /// Land just past the next `byte`, or at EOF.
    pub fn skip_beyond_byte(&mut self, byte: u8) {
        self.skip_until_byte(byte);
        self.skip();
    }

    /// Land just past the next occurrence of `text`, or at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "callers pass short literal delimiters"
    )]
    pub fn skip_beyond_str(&mut self, text: &str) {
        self.skip_until_str(text);
        self.skip_n(text.len() as u32);
    }

    /// Advance by one and return the byte now under the cursor.
    ///
    /// At EOF the cursor does not move and `None` is returned. Stepping onto
    /// EOF also returns `None`.
    pub fn next_char(&mut self) -> Option<u8> {
        if self.is_eof() {
            return None;
        }
        self.pos += 1;
        self.current()
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(b) = self.current() {
            self.skip_n(Self::utf8_char_width(b));
        }
    }

    /// Consume `symbol` if the source continues with it.
    ///
    /// On a match, returns a token of `kind` whose lexeme is exactly
    /// `symbol` at the pre-advance position. Otherwise the cursor does not
    /// move.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "catalog symbols are a few bytes long"
    )]
    pub fn try_tokenize(&mut self, symbol: &str, kind: TokenKind) -> Option<Token<'src>> {
        if !self.matches_str(symbol) {
            return None;
        }
        let start = self.pos;
        self.skip_n(symbol.len() as u32);
        Some(Token::new(kind, Span::new(start, self.pos), self.slice_from(start)))
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'src str {
        self.source.slice(Span::new(start, self.pos))
    }

    #[inline]
    fn remaining(&self) -> &'src [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
