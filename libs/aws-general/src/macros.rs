//! Macros for defining identifier types.

/// Implements `Display`, `FromStr`, `Serialize` and `Deserialize` for a type
/// in terms of its [`AwsType`](crate::AwsType) text form.
///
/// Deserialization applies `from_text` and reports a parse failure as a
/// format error of the surrounding serializer.
#[macro_export]
macro_rules! impl_text_traits {
    ($name:ty) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::AwsType::to_text(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::AwsType>::from_text(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&$crate::AwsType::to_text(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <Self as $crate::AwsType>::from_text(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Macro to define a closed enumeration with one fixed literal per variant.
///
/// This generates a `Copy` enum with:
/// - An `ALL` constant listing every variant in declaration order
/// - `as_str()` returning the variant's literal
/// - `from_literal()` for exact-match lookup
/// - An [`AwsType`](crate::AwsType) implementation
/// - `Display`, `FromStr`, `Serialize` and `Deserialize` implementations
///
/// Prefix parsing picks the longest literal the input starts with, so the
/// declaration order never affects which variant is chosen.
///
/// # Example
///
/// ```ignore
/// define_enum! {
///     /// Signature version.
///     SignatureVersion, "SignatureVersion" {
///         V2 => "2",
///         V4 => "4",
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in canonical order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Returns the wire literal of this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }

            /// Looks up the variant whose literal is exactly `s`.
            #[must_use]
            pub fn from_literal(s: &str) -> Option<Self> {
                match s {
                    $( $lit => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl $crate::AwsType for $name {
            const NAME: &'static str = $label;

            fn write_text(&self, out: &mut String) {
                out.push_str(self.as_str());
            }

            fn parse_prefix(
                cursor: &mut $crate::Cursor<'_>,
            ) -> Result<Self, $crate::ParseError> {
                let rest = cursor.rest();
                let found = Self::ALL
                    .iter()
                    .copied()
                    .filter(|v| rest.starts_with(v.as_str()))
                    .max_by_key(|v| v.as_str().len());

                match found {
                    Some(value) => {
                        cursor.eat_literal(value.as_str());
                        Ok(value)
                    }
                    None => Err($crate::ParseError::unexpected($label, rest)),
                }
            }
        }

        $crate::impl_text_traits!($name);
    };
}
