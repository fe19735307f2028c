//! CLI commands.

mod check;
mod list;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// awsid - Inspect and validate AWS identifiers.
#[derive(Debug, Parser)]
#[command(name = "awsid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, env = "AWSID_FORMAT")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a value and print its structure.
    Parse(parse::ParseCommand),

    /// List every value of a closed kind.
    List(list::ListCommand),

    /// Validate a file of ARNs, one per line.
    Check(check::CheckCommand),
}

/// Kind of identifier accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    GeneralVersion,
    SignatureVersion,
    SignatureMethod,
    Region,
    AccountId,
    CanonicalUserId,
    Service,
    Arn,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::List(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
        }
    }
}

/// Context passed to all commands.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
}
