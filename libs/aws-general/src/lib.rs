//! # aws-general
//!
//! Typed AWS identifiers with exact text codecs.
//!
//! ## Design Principles
//!
//! - Every identifier has one canonical text form, matching the AWS wire format
//! - Parsing and formatting are exact inverses: `from_text(to_text(v)) == v`
//! - Embedded identifiers are parsed by the same codec as standalone ones
//! - Values that would break the round trip cannot be constructed
//!
//! ## Types
//!
//! | Type | Example |
//! |---|---|
//! | [`GeneralVersion`] | `1.0` |
//! | [`SignatureVersion`] | `4` |
//! | [`SignatureMethod`] | `HmacSHA256` |
//! | [`Region`] | `us-east-1`, `custom:localhost:4566` |
//! | [`AccountId`] | `123456789012` |
//! | [`CanonicalUserId`] | `79a59df900b949e5...` |
//! | [`ServiceNamespace`] | `s3`, `aws-marketplace-management` |
//! | [`Arn`] | `arn:aws:ec2:us-east-1:123456789012:instance:i-1234567890` |
//!
//! All types implement [`AwsType`], `Display`, `FromStr` and serde through
//! their text form.
//!
//! ```
//! use aws_general::{Arn, AwsType, ServiceNamespace};
//!
//! let arn = Arn::from_text("arn:aws:s3:::my-bucket")?;
//! assert_eq!(arn.service(), ServiceNamespace::S3);
//! assert_eq!(arn.to_text(), "arn:aws:s3:::my-bucket");
//! # Ok::<(), aws_general::ParseError>(())
//! ```

mod macros;

mod account;
mod arn;
mod aws_type;
mod cursor;
mod error;
mod region;
mod service;
mod version;

#[cfg(any(test, feature = "proptest"))]
pub mod strategies;

pub use account::{AccountId, CanonicalUserId};
pub use arn::Arn;
pub use aws_type::AwsType;
pub use cursor::{Checkpoint, Cursor};
pub use error::ParseError;
pub use region::{CustomEndpoint, NamedRegion, Region};
pub use service::ServiceNamespace;
pub use version::{GeneralVersion, SignatureMethod, SignatureVersion};
