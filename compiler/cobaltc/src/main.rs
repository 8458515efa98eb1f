//! Cobalt compiler CLI.
//!
//! Only the front of the pipeline exists so far: `cobalt lex` dumps the
//! token stream of a file.

use std::sync::Once;

use cobalt_lexer::ScanOptions;

mod commands;

use commands::lex_file;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=cobalt_lexer=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = ScanOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--newlines" {
                    options = ScanOptions::emit_newlines();
                } else if arg.starts_with('-') {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("Usage: cobalt lex <file.cb> [--newlines]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --newlines    Report every newline as an EndOfLine token");
                std::process::exit(1);
            };

            lex_file(path, options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Cobalt compiler");
    println!();
    println!("Usage: cobalt <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file> [--newlines]   Print the token stream of a file");
    println!("  help                      Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=cobalt_lexer=trace) for scanner logs.");
}
