//! End-to-end checks of the documented identifier examples through the
//! public API.

use std::collections::HashMap;

use aws_general::{
    AccountId, Arn, AwsType, CanonicalUserId, CustomEndpoint, GeneralVersion, NamedRegion,
    ParseError, Region, ServiceNamespace, SignatureMethod, SignatureVersion,
};

#[test]
fn account_id_examples() {
    assert!(AccountId::from_text("123456789012").is_ok());
    assert!(AccountId::from_text("12345").is_err());
    assert!(AccountId::from_text("12345678901a").is_err());
}

#[test]
fn region_examples() {
    assert_eq!(
        Region::from_text("custom:example.com:8080"),
        Ok(Region::Custom(CustomEndpoint::new("example.com", 8080).unwrap()))
    );
    assert!(matches!(
        Region::from_text("custom:example.com"),
        Err(ParseError::IncompleteInput { .. })
    ));
    assert!(matches!(
        Region::from_text("u"),
        Err(ParseError::UnexpectedInput { .. })
    ));
    assert!(matches!(
        Region::from_text("eu-west-1 "),
        Err(ParseError::TrailingInput { .. })
    ));
}

#[test]
fn arn_examples() {
    let text = "arn:aws:s3:::my-bucket";
    let arn = Arn::from_text(text).unwrap();
    assert_eq!(
        arn,
        Arn::new(ServiceNamespace::S3, None, None, ["my-bucket"]).unwrap()
    );
    assert_eq!(arn.to_text(), text);

    let arn = Arn::from_text("arn:aws:ec2:us-east-1:123456789012:instance:i-1234567890").unwrap();
    assert_eq!(
        arn,
        Arn::new(
            ServiceNamespace::Ec2,
            Some(NamedRegion::UsEast1.into()),
            Some(AccountId::new("123456789012").unwrap()),
            ["instance", "i-1234567890"],
        )
        .unwrap()
    );
}

#[test]
fn wire_literals() {
    assert_eq!(GeneralVersion::V1_0.to_text(), "1.0");
    assert_eq!(SignatureVersion::V2.to_text(), "2");
    assert_eq!(SignatureVersion::V4.to_text(), "4");
    assert_eq!(SignatureMethod::HmacSha1.to_text(), "HmacSHA1");
    assert_eq!(SignatureMethod::HmacSha256.to_text(), "HmacSHA256");

    let regions: Vec<_> = NamedRegion::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(
        regions,
        [
            "ap-northeast-1",
            "ap-southeast-1",
            "ap-southeast-2",
            "eu-central-1",
            "eu-west-1",
            "sa-east-1",
            "us-east-1",
            "us-west-1",
            "us-west-2",
        ]
    );

    assert_eq!(
        ServiceNamespace::AwsMarketplaceManagement.to_text(),
        "aws-marketplace-management"
    );
    assert_eq!(ServiceNamespace::Host.to_text(), "host");
}

#[test]
fn from_str_matches_from_text() {
    let id: CanonicalUserId = "0123456789abcdef0123456789abcdef".parse().unwrap();
    assert_eq!(id, CanonicalUserId::from_text(id.as_str()).unwrap());
}

#[test]
fn identifiers_as_map_keys() {
    let mut endpoints: HashMap<Region, &str> = HashMap::new();
    endpoints.insert(Region::US_EAST_1, "https://s3.amazonaws.com");
    endpoints.insert(
        Region::custom("localhost", 4566).unwrap(),
        "http://localhost:4566",
    );

    let lookup = Region::from_text("custom:localhost:4566").unwrap();
    assert_eq!(endpoints.get(&lookup), Some(&"http://localhost:4566"));
    assert_eq!(endpoints.get(&Region::US_WEST_1), None);
}

#[test]
fn arn_in_json_document() {
    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Grant {
        resource: Arn,
        region: Region,
    }

    let json = r#"{"resource":"arn:aws:sns:sa-east-1:123456789012:alerts","region":"sa-east-1"}"#;
    let grant: Grant = serde_json::from_str(json).unwrap();
    assert_eq!(grant.region, Region::SA_EAST_1);
    assert_eq!(grant.resource.service(), ServiceNamespace::Sns);
    assert_eq!(serde_json::to_string(&grant).unwrap(), json);

    let bad = r#"{"resource":"arn:aws:nope:::x","region":"sa-east-1"}"#;
    assert!(serde_json::from_str::<Grant>(bad).is_err());
}
