//! Command implementations for the `cobalt` binary.

mod lex;

pub(crate) use lex::lex_file;

/// Human-readable message for a failed source read.
fn read_error_message(path: &str, err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => {
            format!("permission denied reading '{path}'")
        }
        std::io::ErrorKind::InvalidData => {
            format!("'{path}' contains invalid UTF-8 data")
        }
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Read a source file, or report why not and exit with status 1.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}
