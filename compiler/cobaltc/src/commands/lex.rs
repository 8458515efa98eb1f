use cobalt_lexer::{lex_with_options, ScanOptions};
use tracing::debug;

use super::read_file;

/// Print the token stream of `path`, one token per line.
///
/// Literal decode errors go to stderr afterwards and make the process exit
/// with status 1. `Unexpected` tokens are printed like any other token.
pub(crate) fn lex_file(path: &str, options: ScanOptions) {
    let content = read_file(path);
    debug!(path, bytes = content.len(), ?options, "lexing file");

    let output = match lex_with_options(&content, options) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("Tokens for '{}' ({} tokens):", path, output.tokens.len());
    for tok in &output.tokens {
        println!("  {tok}");
    }

    if output.has_errors() {
        for err in &output.errors {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}
