//! Proptest strategies for every identifier type.
//!
//! Generated values always satisfy the type's invariants, so they are valid
//! round-trip inputs: account IDs are 12 digits, canonical user IDs are
//! 32–128 lowercase hex digits, custom region hosts and ARN resource
//! segments never contain `:`.

use proptest::prelude::*;
use proptest::sample::select;

use crate::{
    AccountId, Arn, CanonicalUserId, GeneralVersion, NamedRegion, Region, ServiceNamespace,
    SignatureMethod, SignatureVersion,
};

/// Strategy for [`GeneralVersion`].
pub fn general_version() -> impl Strategy<Value = GeneralVersion> {
    select(GeneralVersion::ALL)
}

/// Strategy for [`SignatureVersion`].
pub fn signature_version() -> impl Strategy<Value = SignatureVersion> {
    select(SignatureVersion::ALL)
}

/// Strategy for [`SignatureMethod`].
pub fn signature_method() -> impl Strategy<Value = SignatureMethod> {
    select(SignatureMethod::ALL)
}

/// Strategy for [`ServiceNamespace`].
pub fn service_namespace() -> impl Strategy<Value = ServiceNamespace> {
    select(ServiceNamespace::ALL)
}

/// Strategy for [`NamedRegion`].
pub fn named_region() -> impl Strategy<Value = NamedRegion> {
    select(NamedRegion::ALL)
}

/// Strategy for [`Region`], mixing named regions and custom endpoints.
pub fn region() -> impl Strategy<Value = Region> {
    prop_oneof![
        3 => named_region().prop_map(Region::Named),
        1 => ("[^:]{0,24}", any::<u16>())
            .prop_filter_map("custom host must be colon-free", |(host, port)| {
                Region::custom(host, port).ok()
            }),
    ]
}

/// Strategy for [`AccountId`].
pub fn account_id() -> impl Strategy<Value = AccountId> {
    "[0-9]{12}".prop_filter_map("account ID must be 12 digits", |s| AccountId::new(s).ok())
}

/// Strategy for [`CanonicalUserId`].
pub fn canonical_user_id() -> impl Strategy<Value = CanonicalUserId> {
    "[0-9a-f]{32,128}".prop_filter_map("canonical user ID must be hex", |s| {
        CanonicalUserId::new(s).ok()
    })
}

/// Strategy for a single colon-free ARN resource segment.
pub fn resource_segment() -> impl Strategy<Value = String> {
    "[^:]{0,16}"
}

/// Strategy for [`Arn`].
pub fn arn() -> impl Strategy<Value = Arn> {
    (
        service_namespace(),
        proptest::option::of(region()),
        proptest::option::of(account_id()),
        proptest::collection::vec(resource_segment(), 1..5),
    )
        .prop_filter_map("ARN parts must be valid", |(service, region, account, resource)| {
            Arn::new(service, region, account, resource).ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AwsType;

    proptest! {
        #[test]
        fn prop_general_version_roundtrip(v in general_version()) {
            prop_assert_eq!(GeneralVersion::from_text(&v.to_text()), Ok(v));
        }

        #[test]
        fn prop_signature_version_roundtrip(v in signature_version()) {
            prop_assert_eq!(SignatureVersion::from_text(&v.to_text()), Ok(v));
        }

        #[test]
        fn prop_signature_method_roundtrip(m in signature_method()) {
            prop_assert_eq!(SignatureMethod::from_text(&m.to_text()), Ok(m));
        }

        #[test]
        fn prop_service_namespace_roundtrip(ns in service_namespace()) {
            prop_assert_eq!(ServiceNamespace::from_text(&ns.to_text()), Ok(ns));
        }

        #[test]
        fn prop_generated_values_respect_invariants(
            id in account_id(),
            user in canonical_user_id(),
            generated in arn()
        ) {
            prop_assert_eq!(id.as_str().len(), 12);
            prop_assert!((32..=128).contains(&user.as_str().len()));
            prop_assert!(!generated.resource().is_empty());
            prop_assert!(generated.resource().iter().all(|s| !s.contains(':')));
        }
    }
}
