//! Error handling and display for the CLI.

use aws_general::ParseError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{kind} '{input}' is not valid: {source}")]
    Invalid {
        kind: &'static str,
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("{kind} has no fixed list of values")]
    NotListable { kind: &'static str },

    #[error("{failed} of {total} line(s) failed to parse")]
    CheckFailed { failed: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Invalid {
                source: ParseError::TrailingInput { .. },
                ..
            } => {
                eprintln!(
                    "\n{}",
                    "Hint: the value is followed by extra characters; check for stray whitespace."
                        .yellow()
                );
            }
            CliError::Invalid {
                kind: "ARN",
                ..
            } => {
                eprintln!(
                    "\n{}",
                    "Hint: ARNs look like arn:aws:<service>:<region>:<account>:<resource>."
                        .yellow()
                );
            }
            CliError::NotListable { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: run `awsid parse <kind> <text>` to validate a value instead.".yellow()
                );
            }
            _ => {}
        }
    }
}
