//! AWS service namespaces.
//!
//! The namespace is the short token that names a service in ARNs and IAM
//! policies, e.g. `s3` in `arn:aws:s3:::my-bucket`.

use crate::define_enum;

define_enum! {
    /// Namespace of an AWS service.
    ServiceNamespace, "ServiceNamespace" {
        AwsPortal => "aws-portal",
        Autoscaling => "autoscaling",
        AwsMarketplaceManagement => "aws-marketplace-management",
        Cloudformation => "cloudformation",
        Cloudfront => "cloudfront",
        Cloudsearch => "cloudsearch",
        Cloudwatch => "cloudwatch",
        Dynamodb => "dynamodb",
        Ec2 => "ec2",
        Elasticache => "elasticache",
        Elasticbeanstalk => "elasticbeanstalk",
        Elasticloadbalancing => "elasticloadbalancing",
        Elasticmapreduce => "elasticmapreduce",
        Glacier => "glacier",
        Iam => "iam",
        Kinesis => "kinesis",
        Rds => "rds",
        Redshift => "redshift",
        Route53 => "route53",
        S3 => "s3",
        Sdb => "sdb",
        Ses => "ses",
        Sns => "sns",
        Sqs => "sqs",
        Storagegateway => "storagegateway",
        Sts => "sts",
        Support => "support",
        Swf => "swf",
        /// Not a real service; used for local test endpoints.
        Host => "host",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AwsType, Cursor};

    #[test]
    fn test_namespace_count() {
        assert_eq!(ServiceNamespace::ALL.len(), 29);
    }

    #[test]
    fn test_every_literal_parses_to_itself() {
        for &ns in ServiceNamespace::ALL {
            assert_eq!(ServiceNamespace::from_text(ns.as_str()), Ok(ns));
            assert_eq!(ServiceNamespace::from_literal(ns.as_str()), Some(ns));
        }
    }

    #[test]
    fn test_no_literal_is_prefix_of_another() {
        for &a in ServiceNamespace::ALL {
            for &b in ServiceNamespace::ALL {
                if a != b {
                    assert!(
                        !b.as_str().starts_with(a.as_str()),
                        "'{}' is a prefix of '{}'",
                        a.as_str(),
                        b.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_literals_unique() {
        let literals: std::collections::HashSet<_> =
            ServiceNamespace::ALL.iter().map(|ns| ns.as_str()).collect();
        assert_eq!(literals.len(), ServiceNamespace::ALL.len());
    }

    #[test]
    fn test_literals_are_lowercase_tokens() {
        for &ns in ServiceNamespace::ALL {
            assert!(ns
                .as_str()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_prefix_parse_stops_at_colon() {
        let mut cur = Cursor::new("s3:::bucket");
        assert_eq!(ServiceNamespace::parse_prefix(&mut cur), Ok(ServiceNamespace::S3));
        assert_eq!(cur.rest(), ":::bucket");
    }

    #[test]
    fn test_unknown_namespace() {
        let err = ServiceNamespace::from_text("lambda").unwrap_err();
        assert_eq!(err.expected(), "ServiceNamespace");
    }

    #[test]
    fn test_unknown_namespace_excerpt_is_truncated() {
        let long = format!("lambda{}", "x".repeat(64));
        let err = ServiceNamespace::from_text(&long).unwrap_err();
        let crate::ParseError::UnexpectedInput { found, .. } = err else {
            panic!("wrong variant: {err:?}");
        };
        assert!(found.ends_with("..."));
        assert_eq!(found, crate::error::excerpt(&long));
    }

    #[test]
    fn test_canonical_order_is_declaration_order() {
        assert!(ServiceNamespace::AwsPortal < ServiceNamespace::Host);
        assert_eq!(ServiceNamespace::ALL[0], ServiceNamespace::AwsPortal);
        assert_eq!(ServiceNamespace::ALL[28], ServiceNamespace::Host);
    }
}
