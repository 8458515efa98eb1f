//! Fixed symbol and keyword tables.
//!
//! Both tables are ordered and searched first-match-wins. No symbol is a
//! prefix of another today, so the order is not load-bearing yet; new
//! multi-byte symbols must go before any entry that is their prefix.

use crate::TokenKind;

/// Literal symbols, tried in order before identifier and number scanning.
pub const SYMBOLS: [(&str, TokenKind); 10] = [
    ("\n", TokenKind::EndOfLine),
    ("(", TokenKind::ParameterListBegin),
    (")", TokenKind::ParameterListEnd),
    ("{", TokenKind::FunctionBodyBegin),
    ("}", TokenKind::FunctionBodyEnd),
    ("[", TokenKind::PropertyBodyBegin),
    ("]", TokenKind::PropertyBodyEnd),
    ("=", TokenKind::Equal),
    (":", TokenKind::TypeConstraintSeparator),
    (",", TokenKind::Separator),
];

/// Reserved words, checked in order against a scanned identifier.
pub const KEYWORDS: [(&str, TokenKind); 3] = [
    ("return", TokenKind::Return),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
];

/// Look up a reserved keyword by exact, case-sensitive text.
#[inline]
pub fn keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|&&(spelling, _)| spelling == text)
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Fixed spelling of a catalog symbol or keyword.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, literals)
    /// or that have no source text (`EndOfFile`, `Unexpected`).
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        SYMBOLS
            .iter()
            .chain(KEYWORDS.iter())
            .find(|&&(_, kind)| kind == self)
            .map(|&(spelling, _)| spelling)
    }
}
