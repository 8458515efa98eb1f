//! Borrowed, immutable view over the source text.
//!
//! The scanner never copies or mutates the text it is given. Offsets are
//! `u32` so spans stay 8 bytes; the one position just past the end is the
//! sentinel that the `EndOfFile` token points at, which is why the largest
//! accepted source is one byte short of `u32::MAX`.

use crate::{Cursor, LexError, Span};

/// Largest accepted source length in bytes.
pub const MAX_SOURCE_LEN: u32 = u32::MAX - 1;

/// Immutable source text plus its validated length.
///
/// Cheap to copy: a fat pointer and a `u32`.
#[derive(Clone, Copy, Debug)]
pub struct SourceBuffer<'src> {
    text: &'src str,
    len: u32,
}

impl<'src> SourceBuffer<'src> {
    /// Wrap `text` without copying it.
    ///
    /// Fails with [`LexError::SourceTooLarge`] if the text is longer than
    /// [`MAX_SOURCE_LEN`].
    pub fn new(text: &'src str) -> Result<Self, LexError> {
        let len = u32::try_from(text.len())
            .ok()
            .filter(|&len| len <= MAX_SOURCE_LEN)
            .ok_or(LexError::SourceTooLarge {
                len: text.len(),
                max: MAX_SOURCE_LEN,
            })?;
        Ok(Self { text, len })
    }

    pub fn as_str(&self) -> &'src str {
        self.text
    }

    pub fn as_bytes(&self) -> &'src [u8] {
        self.text.as_bytes()
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte at `pos`, or `None` at or past the end.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> Option<u8> {
        self.as_bytes().get(pos as usize).copied()
    }

    /// Source text covered by `span`.
    ///
    /// Returns `""` for spans that leave the source (the `EndOfFile`
    /// sentinel) or that do not fall on character boundaries.
    pub fn slice(&self, span: Span) -> &'src str {
        self.text.get(span.to_range()).unwrap_or_default()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'src> {
        Cursor::new(*self)
    }
}

#[cfg(test)]
mod tests;
