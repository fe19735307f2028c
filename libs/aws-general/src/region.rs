//! AWS regions.
//!
//! A [`Region`] is either one of the nine named regions or a custom endpoint
//! written `custom:<host>:<port>`, used to point clients at non-production
//! services.

use std::hash::{Hash, Hasher};

use crate::{define_enum, AwsType, Cursor, ParseError};

define_enum! {
    /// A named AWS region.
    NamedRegion, "Region" {
        ApNortheast1 => "ap-northeast-1",
        ApSoutheast1 => "ap-southeast-1",
        ApSoutheast2 => "ap-southeast-2",
        EuCentral1 => "eu-central-1",
        EuWest1 => "eu-west-1",
        SaEast1 => "sa-east-1",
        UsEast1 => "us-east-1",
        UsWest1 => "us-west-1",
        UsWest2 => "us-west-2",
    }
}

/// Literal introducing a custom endpoint.
const CUSTOM_PREFIX: &str = "custom:";

/// Hash tag of the custom variant; named regions use their index plus one.
const CUSTOM_HASH_TAG: usize = 10;

const LABEL: &str = "Region";

/// A caller-supplied `host:port` endpoint.
///
/// The host never contains `:`; the only way to build one is
/// [`CustomEndpoint::new`] or parsing. Endpoints order by host, then port.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomEndpoint {
    host: String,
    port: u16,
}

impl CustomEndpoint {
    /// Creates a custom endpoint.
    ///
    /// Fails if `host` contains `:`, which would make the text form
    /// ambiguous. The host may be empty.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ParseError> {
        let host = host.into();
        if host.contains(':') {
            return Err(ParseError::invalid(
                LABEL,
                format!("custom host '{}' contains ':'", host),
            ));
        }
        Ok(Self { host, port })
    }

    /// Returns the host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

/// An AWS region or a custom host/port endpoint.
///
/// Named regions order before custom endpoints.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Region {
    /// One of the fixed AWS regions.
    Named(NamedRegion),

    /// A caller-supplied endpoint.
    Custom(CustomEndpoint),
}

impl Region {
    pub const AP_NORTHEAST_1: Region = Region::Named(NamedRegion::ApNortheast1);
    pub const AP_SOUTHEAST_1: Region = Region::Named(NamedRegion::ApSoutheast1);
    pub const AP_SOUTHEAST_2: Region = Region::Named(NamedRegion::ApSoutheast2);
    pub const EU_CENTRAL_1: Region = Region::Named(NamedRegion::EuCentral1);
    pub const EU_WEST_1: Region = Region::Named(NamedRegion::EuWest1);
    pub const SA_EAST_1: Region = Region::Named(NamedRegion::SaEast1);
    pub const US_EAST_1: Region = Region::Named(NamedRegion::UsEast1);
    pub const US_WEST_1: Region = Region::Named(NamedRegion::UsWest1);
    pub const US_WEST_2: Region = Region::Named(NamedRegion::UsWest2);

    /// Creates a custom endpoint region, see [`CustomEndpoint::new`].
    pub fn custom(host: impl Into<String>, port: u16) -> Result<Self, ParseError> {
        CustomEndpoint::new(host, port).map(Region::Custom)
    }

    /// Returns the named region, if this is not a custom endpoint.
    #[must_use]
    pub fn named(&self) -> Option<NamedRegion> {
        match self {
            Region::Named(named) => Some(*named),
            Region::Custom(_) => None,
        }
    }

    /// Returns the custom endpoint, if this is one.
    #[must_use]
    pub fn endpoint(&self) -> Option<&CustomEndpoint> {
        match self {
            Region::Named(_) => None,
            Region::Custom(endpoint) => Some(endpoint),
        }
    }

    /// Returns true if this is a custom endpoint.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Region::Custom(_))
    }

    fn parse_custom(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        if !cursor.eat_literal(CUSTOM_PREFIX) {
            return Err(ParseError::unexpected(LABEL, cursor.rest()));
        }

        let host = cursor.take_while(|c| c != ':');
        cursor.expect_char(':', LABEL)?;

        let digits = cursor.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Err(if cursor.is_empty() {
                ParseError::incomplete(LABEL)
            } else {
                ParseError::unexpected(LABEL, cursor.rest())
            });
        }

        let port = digits
            .parse::<u16>()
            .map_err(|e| ParseError::invalid(LABEL, format!("port '{}': {}", digits, e)))?;

        Ok(Region::Custom(CustomEndpoint {
            host: host.to_string(),
            port,
        }))
    }
}

impl From<NamedRegion> for Region {
    fn from(named: NamedRegion) -> Self {
        Region::Named(named)
    }
}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Region::Named(named) => (*named as usize + 1).hash(state),
            Region::Custom(endpoint) => {
                CUSTOM_HASH_TAG.hash(state);
                endpoint.host.hash(state);
                endpoint.port.hash(state);
            }
        }
    }
}

impl AwsType for Region {
    const NAME: &'static str = LABEL;

    fn write_text(&self, out: &mut String) {
        match self {
            Region::Named(named) => out.push_str(named.as_str()),
            Region::Custom(endpoint) => {
                out.push_str(CUSTOM_PREFIX);
                out.push_str(&endpoint.host);
                out.push(':');
                out.push_str(&endpoint.port.to_string());
            }
        }
    }

    fn parse_prefix(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        if let Ok(named) = NamedRegion::parse_prefix(cursor) {
            return Ok(Region::Named(named));
        }
        cursor.attempt(Self::parse_custom)
    }
}

crate::impl_text_traits!(Region);
