//! Lexer error types.
//!
//! Unrecognized characters are not errors: they surface as
//! [`TokenKind::Unexpected`](crate::TokenKind::Unexpected) tokens and the
//! caller decides what to do with them. `LexError` covers the few cases
//! where the scanner cannot produce a faithful token or payload.

use thiserror::Error;

use crate::Span;

/// An error recorded while building a buffer or decoding a literal.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// Source text does not fit in `u32` offsets.
    #[error("source is {len} bytes, which exceeds the {max} byte limit")]
    SourceTooLarge { len: usize, max: u32 },

    /// Decimal digit run does not fit in a 64-bit signed integer.
    #[error("integer literal `{text}` at {span} does not fit in a 64-bit signed integer")]
    IntOverflow { span: Span, text: String },

    /// Float literal text was rejected by the float parser.
    #[error("float literal `{text}` at {span} could not be parsed")]
    FloatParse { span: Span, text: String },
}

impl LexError {
    /// Location of the offending literal, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::SourceTooLarge { .. } => None,
            LexError::IntOverflow { span, .. } | LexError::FloatParse { span, .. } => Some(*span),
        }
    }
}
