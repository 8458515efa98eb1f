//! Hand-written scanner for Cobalt.
//!
//! Turns one immutable source buffer into a stream of [`Token`]s for the
//! parser. The pieces, bottom-up:
//!
//! - [`SourceBuffer`]: borrowed view of the text with `u32` offsets
//! - [`Cursor`]: forward-only, bounds-checked position with match/skip helpers
//! - [`classify`]: ASCII byte classes
//! - [`catalog`]: fixed symbol and keyword tables
//! - [`Scanner`]: one [`Token`] per `next_token()` call
//!
//! Malformed input is data, not failure: characters nothing else accepts
//! come back as [`TokenKind::Unexpected`].
//!
//! ```
//! use cobalt_lexer::{lex, LiteralValue, TokenKind};
//!
//! let output = lex("add(x: int) { return x }").map_err(|e| e.to_string())?;
//! assert_eq!(output.tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(output.tokens[0].value, LiteralValue::Identifier("add"));
//! assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
//! # Ok::<(), String>(())
//! ```

pub mod catalog;
pub mod classify;
mod cursor;
mod lex_error;
mod options;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use options::{NewlineMode, ScanOptions};
pub use scanner::Scanner;
pub use source_buffer::{SourceBuffer, MAX_SOURCE_LEN};
pub use token::{LiteralValue, Span, Token, TokenKind};

use tracing::debug;

/// Result of scanning a whole buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput<'src> {
    /// Every token up to and including the first `EndOfFile`.
    pub tokens: Vec<Token<'src>>,
    /// Literal payloads that could not be decoded.
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of `Unexpected` tokens.
    pub fn unexpected_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unexpected)
            .count()
    }
}

/// Scan `source` to the end with default options.
///
/// Fails only if the source is too large to address.
pub fn lex(source: &str) -> Result<LexOutput<'_>, LexError> {
    lex_with_options(source, ScanOptions::default())
}

/// Scan `source` to the end.
pub fn lex_with_options(source: &str, options: ScanOptions) -> Result<LexOutput<'_>, LexError> {
    let buffer = SourceBuffer::new(source)?;
    let mut scanner = Scanner::with_options(buffer, options);
    let tokens: Vec<_> = scanner.by_ref().collect();
    let errors = scanner.take_errors();

    debug!(
        bytes = buffer.len(),
        tokens = tokens.len(),
        errors = errors.len(),
        "lexed source"
    );

    Ok(LexOutput { tokens, errors })
}
