//! API version and request-signature parameters.

use crate::define_enum;

define_enum! {
    /// General version of the AWS API conventions modelled by this crate.
    GeneralVersion, "GeneralVersion" {
        V1_0 => "1.0",
    }
}

define_enum! {
    /// Version of the request-signing algorithm.
    SignatureVersion, "SignatureVersion" {
        V2 => "2",
        V4 => "4",
    }
}

define_enum! {
    /// Hash algorithm used to compute a request signature.
    SignatureMethod, "SignatureMethod" {
        HmacSha1 => "HmacSHA1",
        HmacSha256 => "HmacSHA256",
    }
}
