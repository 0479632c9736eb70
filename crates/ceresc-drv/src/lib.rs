//! ceresc-drv - Compiler Driver
//!
//! The driver reads Ceres source files, runs the lexer over each, and
//! prints the resulting token stream one token per line. Lexical errors
//! stop the dump for that file and make the process exit non-zero.

use std::env;
use std::path::PathBuf;

use ceresc_lex::Lexer;
use ceresc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
use thiserror::Error;

/// Configuration for a driver run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source files to tokenize, in command-line order.
    pub input_files: Vec<PathBuf>,
    /// Emit progress notes to stderr.
    pub verbose: bool,
    /// Print each file's raw source before its token dump.
    pub dump_source: bool,
    /// Print usage and exit.
    pub help: bool,
    /// Print version and exit.
    pub version: bool,
}

/// Errors that abort a driver run.
///
/// Unreadable input files are not in this set: the session reports them
/// as `E0101` diagnostics and keeps going, so one bad path does not hide
/// the other files' output.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Bad command line.
    #[error("{0}")]
    InvalidArgs(String),
    /// The command line named no source files.
    #[error("no input files provided")]
    NoInputFiles,
    /// Tokenization produced at least one error.
    #[error("aborting due to {0} previous error(s)")]
    LexFailed(usize),
}

/// Parse command line arguments from the process environment.
pub fn parse_args() -> Result<Config, DriverError> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parse command line arguments from a slice (testable form).
pub fn parse_args_from(args: &[String]) -> Result<Config, DriverError> {
    let mut config = Config::default();

    for arg in args {
        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--dump-source" {
            config.dump_source = true;
        } else if arg.starts_with('-') {
            return Err(DriverError::InvalidArgs(format!("unknown option: {}", arg)));
        } else {
            config.input_files.push(PathBuf::from(arg));
        }
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("Ceres Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: ceresc [OPTIONS] <input files>");
    println!();
    println!("Options:");
    println!("  -h, --help       Print this help message");
    println!("  -V, --version    Print version information");
    println!("  -v, --verbose    Enable verbose output");
    println!("  --dump-source    Print each file's source before its tokens");
    println!();
    println!("Examples:");
    println!("  ceresc hello.ce        Print the token stream of hello.ce");
    println!("  ceresc -v a.ce b.ce    Tokenize two files with progress notes");
}

/// Print version
pub fn print_version() {
    println!("ceresc {}", env!("CARGO_PKG_VERSION"));
}

/// A tokenization session over one or more source files.
pub struct Session {
    /// Run configuration.
    pub config: Config,
    /// Collected diagnostics across all files.
    pub diagnostics: Handler,
}

impl Session {
    /// Create a session from a parsed configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// Tokenize every input file, printing one dump line per token.
    ///
    /// Each file's dump ends with its EOF token, or with the error token
    /// that stopped it. Diagnostics go to stderr once all files ran.
    pub fn run(&mut self) -> Result<(), DriverError> {
        for path in self.config.input_files.clone() {
            if self.config.verbose {
                eprintln!("[verbose] Lexing: {}", path.display());
            }

            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    DiagnosticBuilder::error(format!("could not read {}: {}", path.display(), e))
                        .code(DiagnosticCode::E_DRIVER_IO)
                        .emit(&self.diagnostics);
                    continue;
                }
            };

            if self.config.dump_source {
                println!("--- {} ---", path.display());
                print!("{}", content);
                if !content.ends_with('\n') {
                    println!();
                }
                println!("---");
            }

            Self::dump_tokens(&content, &mut self.diagnostics);
        }

        for diagnostic in self.diagnostics.diagnostics() {
            eprintln!("{}", diagnostic);
        }

        let errors = self.diagnostics.error_count();
        if errors > 0 {
            return Err(DriverError::LexFailed(errors));
        }
        Ok(())
    }

    /// Print the token stream of one buffer, stopping at EOF or the
    /// first error token.
    fn dump_tokens(source: &str, handler: &mut Handler) {
        let mut lexer = Lexer::new(source, handler);
        loop {
            let token = lexer.next_token();
            println!("{}", token);
            if token.is_eof() || token.is_error() {
                break;
            }
        }
    }
}

/// Entry point shared by the binary and the tests.
pub fn run() -> Result<(), DriverError> {
    let config = parse_args()?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    if config.input_files.is_empty() {
        return Err(DriverError::NoInputFiles);
    }

    let mut session = Session::new(config);
    session.run()
}
