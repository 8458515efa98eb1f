//! Token model: spans, kinds, literal payloads.
//!
//! Tokens never own source text. The lexeme is a borrowed slice of the
//! [`SourceBuffer`](crate::SourceBuffer), and the decoded payload of an
//! identifier or numeric literal travels inside the token as a
//! [`LiteralValue`].

use std::fmt;

/// Byte range in the source, `start..end` (end exclusive).
///
/// Layout: 8 bytes total, two `u32` offsets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Token kinds for Cobalt.
///
/// Closed set. Payloads are not stored here; see [`LiteralValue`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Structural symbols ===
    /// `\n`
    EndOfLine,
    /// `(`
    ParameterListBegin,
    /// `)`
    ParameterListEnd,
    /// `{`
    FunctionBodyBegin,
    /// `}`
    FunctionBodyEnd,
    /// `[`
    PropertyBodyBegin,
    /// `]`
    PropertyBodyEnd,
    /// `=`
    Equal,
    /// `:`
    TypeConstraintSeparator,
    /// `,`
    Separator,

    // === Keywords ===
    Return,
    Break,
    Continue,

    // === Identifiers & literals ===
    Identifier,
    LiteralInt,
    LiteralFloat,

    // === Control ===
    EndOfFile,
    /// A character no other rule accepts. Always one character long.
    Unexpected,
}

impl TokenKind {
    /// Human-readable name used in diagnostics and token dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::EndOfLine => "end of line",
            TokenKind::ParameterListBegin => "`(`",
            TokenKind::ParameterListEnd => "`)`",
            TokenKind::FunctionBodyBegin => "`{`",
            TokenKind::FunctionBodyEnd => "`}`",
            TokenKind::PropertyBodyBegin => "`[`",
            TokenKind::PropertyBodyEnd => "`]`",
            TokenKind::Equal => "`=`",
            TokenKind::TypeConstraintSeparator => "`:`",
            TokenKind::Separator => "`,`",
            TokenKind::Return => "`return`",
            TokenKind::Break => "`break`",
            TokenKind::Continue => "`continue`",
            TokenKind::Identifier => "identifier",
            TokenKind::LiteralInt => "integer literal",
            TokenKind::LiteralFloat => "float literal",
            TokenKind::EndOfFile => "end of file",
            TokenKind::Unexpected => "unexpected character",
        }
    }

    /// Returns `true` for `return`, `break` and `continue`.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Return | TokenKind::Break | TokenKind::Continue
        )
    }

    /// Returns `true` for kinds that carry a [`LiteralValue`] payload.
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::LiteralInt | TokenKind::LiteralFloat
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Decoded payload of a token.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LiteralValue<'src> {
    /// No payload: symbols, keywords, `EndOfFile`, `Unexpected`, and
    /// integer literals whose value did not fit in `i64`.
    Symbolic,
    /// Identifier text (borrowed from the source).
    Identifier(&'src str),
    Int(i64),
    Float(f64),
}

impl fmt::Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Symbolic => Ok(()),
            LiteralValue::Identifier(text) => f.write_str(text),
            LiteralValue::Int(n) => write!(f, "{n}"),
            LiteralValue::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// A token: kind, location, source text and payload.
///
/// # Invariant
///
/// `lexeme` is exactly `source[span]`, except for `EndOfFile`, whose span
/// is the one-byte sentinel just past the source and whose lexeme is empty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub lexeme: &'src str,
    pub value: LiteralValue<'src>,
}

impl<'src> Token<'src> {
    /// Create a payload-free token.
    #[inline]
    pub fn new(kind: TokenKind, span: Span, lexeme: &'src str) -> Self {
        Token {
            kind,
            span,
            lexeme,
            value: LiteralValue::Symbolic,
        }
    }

    /// Attach a decoded payload.
    #[inline]
    #[must_use]
    pub fn with_value(self, value: LiteralValue<'src>) -> Self {
        Token { value, ..self }
    }

    /// The end-of-file token for a source of `source_len` bytes.
    #[inline]
    pub fn eof(source_len: u32) -> Self {
        Token::new(
            TokenKind::EndOfFile,
            Span::new(source_len, source_len + 1),
            "",
        )
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} {:?}", self.kind, self.span, self.lexeme)?;
        if self.value != LiteralValue::Symbolic {
            write!(f, " = {}", self.value)?;
        }
        Ok(())
    }
}
