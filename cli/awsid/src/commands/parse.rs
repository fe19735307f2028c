//! `awsid parse` - parse one value and print its structure.

use anyhow::Result;
use aws_general::{
    AccountId, Arn, AwsType, CanonicalUserId, GeneralVersion, ParseError, Region,
    ServiceNamespace, SignatureMethod, SignatureVersion,
};
use clap::Args;
use serde_json::{json, Value};

use super::{CommandContext, Kind};
use crate::error::CliError;
use crate::output::print_object;

/// Parse a value and print its structure.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Kind of value to parse.
    #[arg(value_enum)]
    kind: Kind,

    /// Text to parse. The whole string must match.
    text: String,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let described = describe(self.kind, &self.text).map_err(|source| CliError::Invalid {
            kind: label(self.kind),
            input: self.text.clone(),
            source,
        })?;

        tracing::debug!(kind = label(self.kind), text = %self.text, "parsed value");
        print_object(&described, ctx.format);
        Ok(())
    }
}

/// Returns the diagnostic label of a kind.
pub fn label(kind: Kind) -> &'static str {
    match kind {
        Kind::GeneralVersion => GeneralVersion::NAME,
        Kind::SignatureVersion => SignatureVersion::NAME,
        Kind::SignatureMethod => SignatureMethod::NAME,
        Kind::Region => Region::NAME,
        Kind::AccountId => AccountId::NAME,
        Kind::CanonicalUserId => CanonicalUserId::NAME,
        Kind::Service => ServiceNamespace::NAME,
        Kind::Arn => Arn::NAME,
    }
}

/// Parses `text` as `kind` and returns a JSON description of the value.
pub fn describe(kind: Kind, text: &str) -> Result<Value, ParseError> {
    let value = match kind {
        Kind::GeneralVersion => simple(GeneralVersion::from_text(text)?),
        Kind::SignatureVersion => simple(SignatureVersion::from_text(text)?),
        Kind::SignatureMethod => simple(SignatureMethod::from_text(text)?),
        Kind::Service => simple(ServiceNamespace::from_text(text)?),
        Kind::AccountId => simple(AccountId::from_text(text)?),
        Kind::CanonicalUserId => simple(CanonicalUserId::from_text(text)?),
        Kind::Region => describe_region(&Region::from_text(text)?),
        Kind::Arn => describe_arn(&Arn::from_text(text)?),
    };
    Ok(value)
}

fn simple<T: AwsType>(value: T) -> Value {
    json!({
        "kind": T::NAME,
        "text": value.to_text(),
    })
}

fn describe_region(region: &Region) -> Value {
    match region {
        Region::Named(named) => json!({
            "kind": Region::NAME,
            "text": region.to_text(),
            "named": named.as_str(),
        }),
        Region::Custom(endpoint) => json!({
            "kind": Region::NAME,
            "text": region.to_text(),
            "host": endpoint.host(),
            "port": endpoint.port(),
        }),
    }
}

fn describe_arn(arn: &Arn) -> Value {
    json!({
        "kind": Arn::NAME,
        "text": arn.to_text(),
        "service": arn.service().as_str(),
        "region": arn.region().map(AwsType::to_text),
        "account": arn.account().map(AccountId::as_str),
        "resource": arn.resource(),
    })
}
