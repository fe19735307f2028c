//! `awsid list` - list every value of a closed kind.

use anyhow::Result;
use aws_general::{
    GeneralVersion, NamedRegion, ServiceNamespace, SignatureMethod, SignatureVersion,
};
use clap::Args;
use serde_json::json;

use super::parse::label;
use super::{CommandContext, Kind};
use crate::error::CliError;
use crate::output::OutputFormat;

/// List every value of a closed kind.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Kind of value to list.
    #[arg(value_enum)]
    kind: Kind,
}

impl ListCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let literals = literals(self.kind).ok_or(CliError::NotListable {
            kind: label(self.kind),
        })?;

        match ctx.format {
            OutputFormat::Text => {
                for literal in &literals {
                    println!("{}", literal);
                }
            }
            OutputFormat::Json => println!("{}", json!(literals)),
        }
        Ok(())
    }
}

/// Returns every literal of `kind`, or `None` for open kinds.
///
/// Regions list only the named regions.
pub fn literals(kind: Kind) -> Option<Vec<&'static str>> {
    let literals = match kind {
        Kind::GeneralVersion => GeneralVersion::ALL.iter().map(|v| v.as_str()).collect(),
        Kind::SignatureVersion => SignatureVersion::ALL.iter().map(|v| v.as_str()).collect(),
        Kind::SignatureMethod => SignatureMethod::ALL.iter().map(|m| m.as_str()).collect(),
        Kind::Service => ServiceNamespace::ALL.iter().map(|s| s.as_str()).collect(),
        Kind::Region => NamedRegion::ALL.iter().map(|r| r.as_str()).collect(),
        Kind::AccountId | Kind::CanonicalUserId | Kind::Arn => return None,
    };
    Some(literals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_kinds_are_listable() {
        assert_eq!(literals(Kind::SignatureVersion), Some(vec!["2", "4"]));
        assert_eq!(literals(Kind::Service).map(|l| l.len()), Some(29));
        assert_eq!(literals(Kind::Region).map(|l| l.len()), Some(9));
    }

    #[test]
    fn test_open_kinds_are_not_listable() {
        assert_eq!(literals(Kind::Arn), None);
        assert_eq!(literals(Kind::AccountId), None);
    }
}
