//! Byte classifiers.
//!
//! All classifiers are ASCII-only and total over `u8`: non-ASCII bytes are
//! never letters, digits or whitespace, whatever the process locale.

/// First character of an identifier: ASCII letter only.
#[inline]
pub fn is_first_identifier_char(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Identifier continuation: ASCII letter or digit.
#[inline]
pub fn is_identifier_char(b: u8) -> bool {
    is_first_identifier_char(b) || is_digit(b)
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// C `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`], this includes vertical tab (`0x0B`).
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
