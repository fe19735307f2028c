//! `awsid check` - validate a file of ARNs, one per line.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use aws_general::{Arn, AwsType, ParseError};
use clap::Args;
use serde_json::json;

use super::CommandContext;
use crate::error::CliError;
use crate::output::{print_failure, print_success, OutputFormat};

/// Validate a file of ARNs, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// File to read, or `-` for stdin.
    path: PathBuf,
}

/// Outcome of checking one line.
#[derive(Debug, PartialEq, Eq)]
pub struct LineFailure {
    pub line: usize,
    pub text: String,
    pub error: ParseError,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let content = if self.path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        } else {
            fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {}", self.path.display()))?
        };

        let (total, failures) = check_lines(&content);
        tracing::debug!(total, failed = failures.len(), "checked ARNs");

        match ctx.format {
            OutputFormat::Text => {
                for failure in &failures {
                    print_failure(&format!(
                        "line {}: '{}': {}",
                        failure.line, failure.text, failure.error
                    ));
                }
                if failures.is_empty() {
                    print_success(&format!("{} ARN(s) valid", total));
                }
            }
            OutputFormat::Json => {
                let report: Vec<_> = failures
                    .iter()
                    .map(|f| json!({ "line": f.line, "text": f.text, "error": f.error.to_string() }))
                    .collect();
                println!("{}", json!({ "total": total, "failures": report }));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CliError::CheckFailed {
                failed: failures.len(),
                total,
            }
            .into())
        }
    }
}

/// Parses every non-blank, non-comment line as an ARN.
///
/// Returns the number of lines checked and the failures, with 1-based line
/// numbers.
pub fn check_lines(content: &str) -> (usize, Vec<LineFailure>) {
    let mut total = 0;
    let mut failures = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        total += 1;
        if let Err(error) = Arn::from_text(text) {
            failures.push(LineFailure {
                line: idx + 1,
                text: text.to_string(),
                error,
            });
        }
    }

    (total, failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lines() {
        let content = "\
# buckets
arn:aws:s3:::my-bucket

arn:aws:nope:::x
arn:aws:iam::123456789012:user/alice
not-an-arn
";
        let (total, failures) = check_lines(content);
        assert_eq!(total, 4);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].line, 4);
        assert_eq!(failures[0].error.expected(), "ServiceNamespace");
        assert_eq!(failures[1].line, 6);
        assert_eq!(failures[1].error.expected(), "ARN");
    }

    #[test]
    fn test_check_empty_input() {
        let (total, failures) = check_lines("");
        assert_eq!(total, 0);
        assert!(failures.is_empty());
    }
}
