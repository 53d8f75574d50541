//! Macros for defining typed semantic IDs.

/// Defines a typed ID over `i64` that is written as a semantic ID with a
/// fixed prefix.
///
/// This generates a newtype with:
/// - A `PREFIX` constant holding the prefix components
/// - `codec()` returning the shared codec for that prefix
/// - `parse()` to decode from a string
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations using the encoded form
/// - `Ord`, `Hash`, and other standard traits
///
/// Empty prefix components are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// define_semantic_id!(AccountId, "billing", "account");
///
/// let id = AccountId::new(1);
/// assert_eq!(id.to_string(), "billing-account-1");
/// let parsed: AccountId = "BILLING-ACCOUNT-1".parse()?;
/// ```
#[macro_export]
macro_rules! define_semantic_id {
    ($name:ident $(, $component:literal)* $(,)?) => {
        /// A typed semantic ID.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        $(const _: () = assert!(!$component.is_empty(), "prefix components must not be empty");)*

        impl $name {
            /// The prefix components for this ID type.
            pub const PREFIX: &'static [&'static str] = &[$($component),*];

            /// Wraps a raw integer ID.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the underlying integer.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the codec shared by all IDs of this type.
            pub fn codec() -> &'static $crate::SemanticIdCodec {
                static CODEC: ::std::sync::LazyLock<$crate::SemanticIdCodec> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::SemanticIdCodec::__from_checked_names(
                            $name::PREFIX.iter().map(|name| name.to_string()).collect(),
                        )
                    });
                &CODEC
            }

            /// Parses an ID from its encoded form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                Self::codec().decode_long(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&Self::codec().encode_long(self.0))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
