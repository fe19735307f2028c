//! Amazon Resource Names.
//!
//! ## Format
//!
//! ```text
//! arn:aws:<service>:<region>:<account>:<segment>(:<segment>)*
//! ```
//!
//! The region and account fields may be empty. The resource tail is split
//! on `:` into segments, which may themselves be empty. The resource is kept
//! as raw text; service-specific resource grammars are not interpreted.
//!
//! Examples:
//! - `arn:aws:s3:::my-bucket`
//! - `arn:aws:ec2:us-east-1:123456789012:instance:i-1234567890`
//! - `arn:aws:sqs:custom:localhost:4566:000000000000:queue`

use crate::{AccountId, AwsType, Cursor, ParseError, Region, ServiceNamespace};

/// Literal every ARN starts with.
const ARN_PREFIX: &str = "arn:aws";

/// Separator between ARN fields and resource segments.
const SEPARATOR: char = ':';

/// A parsed Amazon Resource Name.
///
/// Values can only be built by parsing or through [`Arn::new`], both of
/// which guarantee that the resource has at least one segment and that no
/// segment contains `:`. Serializing and parsing are therefore exact
/// inverses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arn {
    service: ServiceNamespace,
    region: Option<Region>,
    account: Option<AccountId>,
    resource: Vec<String>,
}

impl Arn {
    /// Creates an ARN from its parts.
    ///
    /// Fails if `resource` is empty or if any segment contains `:`.
    pub fn new<I, S>(
        service: ServiceNamespace,
        region: Option<Region>,
        account: Option<AccountId>,
        resource: I,
    ) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resource: Vec<String> = resource.into_iter().map(Into::into).collect();

        if resource.is_empty() {
            return Err(ParseError::invalid(
                Self::NAME,
                "resource must have at least one segment",
            ));
        }
        if let Some(segment) = resource.iter().find(|s| s.contains(SEPARATOR)) {
            return Err(ParseError::invalid(
                Self::NAME,
                format!("resource segment '{}' contains ':'", segment),
            ));
        }

        Ok(Self {
            service,
            region,
            account,
            resource,
        })
    }

    /// Returns the service namespace.
    #[must_use]
    pub fn service(&self) -> ServiceNamespace {
        self.service
    }

    /// Returns the region, if the ARN names one.
    #[must_use]
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Returns the account ID, if the ARN names one.
    #[must_use]
    pub fn account(&self) -> Option<&AccountId> {
        self.account.as_ref()
    }

    /// Returns the resource segments. Never empty.
    #[must_use]
    pub fn resource(&self) -> &[String] {
        &self.resource
    }

    /// Returns the resource segments joined with `:`.
    #[must_use]
    pub fn resource_path(&self) -> String {
        self.resource.join(":")
    }

    /// Returns a copy of this ARN with the region replaced.
    #[must_use]
    pub fn with_region(&self, region: Option<Region>) -> Self {
        Self {
            region,
            ..self.clone()
        }
    }

    /// Returns a copy of this ARN with the account replaced.
    #[must_use]
    pub fn with_account(&self, account: Option<AccountId>) -> Self {
        Self {
            account,
            ..self.clone()
        }
    }

    fn parse_fields(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        if !cursor.eat_literal(ARN_PREFIX) {
            return Err(ParseError::invalid(
                Self::NAME,
                format!("expected '{}' prefix", ARN_PREFIX),
            ));
        }

        cursor.expect_char(SEPARATOR, Self::NAME)?;
        let service = ServiceNamespace::parse_prefix(cursor)?;

        cursor.expect_char(SEPARATOR, Self::NAME)?;
        let region = cursor.attempt(Region::parse_prefix).ok();

        cursor.expect_char(SEPARATOR, Self::NAME)?;
        let account = cursor.attempt(AccountId::parse_prefix).ok();

        cursor.expect_char(SEPARATOR, Self::NAME)?;
        let mut resource = vec![cursor.take_while(|c| c != SEPARATOR).to_string()];
        while cursor.eat_char(SEPARATOR) {
            resource.push(cursor.take_while(|c| c != SEPARATOR).to_string());
        }

        Ok(Self {
            service,
            region,
            account,
            resource,
        })
    }
}

impl AwsType for Arn {
    const NAME: &'static str = "ARN";

    fn write_text(&self, out: &mut String) {
        out.push_str(ARN_PREFIX);
        out.push(SEPARATOR);
        self.service.write_text(out);
        out.push(SEPARATOR);
        if let Some(region) = &self.region {
            region.write_text(out);
        }
        out.push(SEPARATOR);
        if let Some(account) = &self.account {
            account.write_text(out);
        }
        for segment in &self.resource {
            out.push(SEPARATOR);
            out.push_str(segment);
        }
    }

    fn parse_prefix(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        cursor.attempt(Self::parse_fields)
    }
}

crate::impl_text_traits!(Arn);
