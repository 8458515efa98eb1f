//! Scanner configuration.

/// How the scanner treats `\n`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum NewlineMode {
    /// `\n` is ordinary whitespace and is skipped before every token.
    ///
    /// `EndOfLine` still appears when a line comment stops at a newline, or
    /// a block comment ends right before one, since whitespace is only
    /// skipped once per token.
    #[default]
    Skip,
    /// Whitespace skipping stops at `\n`, so every newline becomes an
    /// `EndOfLine` token.
    Emit,
}

/// Options for a [`Scanner`](crate::Scanner).
///
/// `Default` treats `\n` as whitespace.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScanOptions {
    pub newlines: NewlineMode,
}

impl ScanOptions {
    /// Options with every newline reported as `EndOfLine`.
    pub fn emit_newlines() -> Self {
        ScanOptions {
            newlines: NewlineMode::Emit,
        }
    }
}
