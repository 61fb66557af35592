//! Error handling for the generator.
//! Defines the error type and result alias used throughout the crate, and the
//! handler that turns an error into stderr output and an exit code.

use std::io;
use thiserror::Error;

use crate::cli::print_usage;
use crate::constants::EXIT_FAILURE;

/// Errors that can stop an invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// A flag that the command line does not know about.
    #[error("unknown option `{0}'")]
    UnknownOption(String),

    /// A value-taking option given without its value.
    #[error("option `{0}' argument missing")]
    ArgumentMissing(&'static str),

    /// `--es6` requested on a Node.js older than the supported minimum.
    #[error("option `--es6' requires Node version {0}.x or higher")]
    UnsupportedRuntime(u64),

    /// An engine name outside the supported set.
    #[error("invalid {kind} engine `{name}'")]
    InvalidEngine { kind: &'static str, name: String },

    /// Any other argument parsing failure reported by clap.
    #[error("{0}")]
    Usage(String),

    /// The user refused to generate into a non-empty directory.
    #[error("aborting")]
    Declined,

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors while serializing the package manifest
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents missing or malformed embedded templates
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents a failure while reading the confirmation answer
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl Error {
    /// Whether the usage text should be printed ahead of this error.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownOption(_)
                | Error::ArgumentMissing(_)
                | Error::UnsupportedRuntime(_)
                | Error::InvalidEngine { .. }
                | Error::Usage(_)
        )
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Formats a message as an indented stderr block, one `<label>: ` prefix per
/// line and a blank line before and after.
pub fn format_block(label: &str, message: &str) -> String {
    let mut block = String::from("\n");
    for line in message.lines() {
        block.push_str(&format!("  {label}: {line}\n"));
    }
    block.push('\n');
    block
}

/// Prints a warning block to stderr.
pub fn print_warning(message: &str) {
    eprint!("{}", format_block("warning", message));
}

/// Prints an error block to stderr.
pub fn print_error(message: &str) {
    eprint!("{}", format_block("error", message));
}

/// Default error handler that prints the error and exits the program.
///
/// Usage errors are preceded by the usage text on stdout. A declined overwrite
/// prints a bare abort message.
pub fn default_error_handler(err: Error) -> ! {
    log::debug!("terminating: {err:?}");
    match err {
        Error::Declined => eprintln!("{err}"),
        err if err.is_usage_error() => {
            print_usage();
            print_error(&err.to_string());
        }
        err => print_error(&err.to_string()),
    }
    std::process::exit(EXIT_FAILURE);
}
