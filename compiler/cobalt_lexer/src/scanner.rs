//! Pull-based token producer.
//!
//! Each [`Scanner::next_token`] call skips insignificant text once, then
//! dispatches in a fixed order:
//!
//! 1. whitespace (one pass)
//! 2. one line comment (`//`, stops before the newline) or one block
//!    comment (`/* ... */`, no nesting, unterminated runs to EOF)
//! 3. EOF check
//! 4. symbol catalog, first match wins
//! 5. identifier, then keyword resolution
//! 6. decimal number, integer or float
//! 7. anything else: a one-character `Unexpected` token
//!
//! Steps 1 and 2 run once per call, not to a fixed point. Whitespace right
//! after a block comment therefore comes back as `Unexpected`, and a second
//! comment immediately after the first is not suppressed.

use tracing::{trace, warn};

use crate::catalog::{self, SYMBOLS};
use crate::classify::{is_digit, is_first_identifier_char, is_identifier_char, is_whitespace};
use crate::{
    Cursor, LexError, LiteralValue, NewlineMode, ScanOptions, SourceBuffer, Span, Token, TokenKind,
};

/// Streaming scanner over one source buffer.
///
/// One scanner per buffer, driven by a single caller. Independent scanners
/// over independent buffers can run on separate threads.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    options: ScanOptions,
    /// Payload of the most recent identifier or numeric literal.
    last_value: Option<LiteralValue<'src>>,
    errors: Vec<LexError>,
    /// Set once the [`Iterator`] impl has yielded `EndOfFile`.
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner with default options.
    pub fn new(source: SourceBuffer<'src>) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: SourceBuffer<'src>, options: ScanOptions) -> Self {
        Self {
            cursor: source.cursor(),
            options,
            last_value: None,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Payload of the most recent identifier or numeric literal.
    ///
    /// `None` until the first one is produced. Keywords, symbols,
    /// `Unexpected` and `EndOfFile` leave it alone; an integer literal that
    /// overflows `i64` clears it.
    pub fn last_value(&self) -> Option<&LiteralValue<'src>> {
        self.last_value.as_ref()
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Drain the recorded errors.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Produce the next token.
    ///
    /// Once EOF is reached every further call returns the same
    /// `EndOfFile` token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_trivia();

        if self.cursor.is_eof() {
            return Token::eof(self.cursor.source().len());
        }

        let token = self.scan_token();
        trace!(kind = ?token.kind, span = %token.span, lexeme = token.lexeme, "token");
        token
    }

    fn skip_trivia(&mut self) {
        match self.options.newlines {
            NewlineMode::Skip => self.cursor.skip_until(|b| !is_whitespace(b)),
            NewlineMode::Emit => self.cursor.skip_until(|b| b == b'\n' || !is_whitespace(b)),
        }

        if self.cursor.matches_str("//") {
            self.cursor.skip_until_byte(b'\n');
        } else if self.cursor.matches_str("/*") {
            self.cursor.skip_beyond_str("*/");
        }
    }

    fn scan_token(&mut self) -> Token<'src> {
        for &(symbol, kind) in &SYMBOLS {
            if let Some(token) = self.cursor.try_tokenize(symbol, kind) {
                return token;
            }
        }

        let start = self.cursor.pos();
        match self.cursor.current() {
            Some(b) if is_first_identifier_char(b) => self.identifier(start),
            Some(b) if is_digit(b) => self.number(start),
            _ => self.unexpected(start),
        }
    }

    fn identifier(&mut self, start: u32) -> Token<'src> {
        self.cursor.skip_until(|b| !is_identifier_char(b));
        let span = Span::new(start, self.cursor.pos());
        let text = self.cursor.slice_from(start);

        if let Some(kind) = catalog::keyword(text) {
            return Token::new(kind, span, text);
        }

        let value = LiteralValue::Identifier(text);
        self.last_value = Some(value);
        Token::new(TokenKind::Identifier, span, text).with_value(value)
    }

    fn number(&mut self, start: u32) -> Token<'src> {
        self.cursor.skip_until(|b| !is_digit(b));

        if self.cursor.matches_byte(b'.') {
            self.cursor.skip(); // decimal point
            self.cursor.skip_until(|b| !is_digit(b));
            return self.float(start);
        }

        let span = Span::new(start, self.cursor.pos());
        let text = self.cursor.slice_from(start);
        let token = Token::new(TokenKind::LiteralInt, span, text);
        match text.parse::<i64>() {
            Ok(n) => {
                let value = LiteralValue::Int(n);
                self.last_value = Some(value);
                token.with_value(value)
            }
            Err(_) => {
                warn!(%span, text, "integer literal overflows i64");
                self.last_value = None;
                self.errors.push(LexError::IntOverflow {
                    span,
                    text: text.to_owned(),
                });
                token
            }
        }
    }

    /// `digits '.' digits?`, so `42.` is a valid float equal to `42.0`.
    fn float(&mut self, start: u32) -> Token<'src> {
        let span = Span::new(start, self.cursor.pos());
        let text = self.cursor.slice_from(start);
        let token = Token::new(TokenKind::LiteralFloat, span, text);
        match text.parse::<f64>() {
            Ok(x) => {
                let value = LiteralValue::Float(x);
                self.last_value = Some(value);
                token.with_value(value)
            }
            Err(_) => {
                warn!(%span, text, "float literal failed to parse");
                self.last_value = None;
                self.errors.push(LexError::FloatParse {
                    span,
                    text: text.to_owned(),
                });
                token
            }
        }
    }

    /// One full character, so the lexeme is always valid UTF-8.
    fn unexpected(&mut self, start: u32) -> Token<'src> {
        self.cursor.advance_char();
        Token::new(
            TokenKind::Unexpected,
            Span::new(start, self.cursor.pos()),
            self.cursor.slice_from(start),
        )
    }
}

/// Yields tokens up to and including the first `EndOfFile`.
impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}
