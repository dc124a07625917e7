//! notes-lsp binary.
//!
//! Usage:
//!   notes-lsp [options]
//!
//! Options:
//!   --stdio      Use stdio for communication (default)
//!   --log        Verbose tracing on stderr
//!   --version    Show version information
//!   --help       Show this help message

use notes_lsp::{LspServer, ServerConfig};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ServerConfig::default();

    for arg in &args[1..] {
        match arg.as_str() {
            "--stdio" => {}
            "--log" => config.verbose = true,
            "--version" => {
                println!("notes-lsp {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_help();
                process::exit(1);
            }
        }
    }

    let mut server = LspServer::new(config);
    match server.run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("notes-lsp: transport error: {err}");
            process::exit(1);
        }
    }
}

fn print_help() {
    eprintln!("notes-lsp - language server for Markdown knowledge bases");
    eprintln!();
    eprintln!("Usage: notes-lsp [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --stdio      Use stdio for communication (default)");
    eprintln!("  --log        Verbose tracing on stderr");
    eprintln!("  --version    Show version information");
    eprintln!("  --help       Show this help message");
}
