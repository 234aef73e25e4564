//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are never nil: "not yet assigned" is modelled as
//! `Option<Id>::None` on the entity, not as an empty UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ErrorKey, Rule};

/// Key reported when a nil UUID is offered as an identifier.
pub const ID_IS_DEFAULT_OR_EMPTY: ErrorKey = ErrorKey::new("Id", Rule::IsDefaultOrEmpty);

/// Identifier of an aggregate root.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct AggregateId(Uuid);

/// Generates a non-nil UUID newtype.
///
/// The type must be a single-field tuple struct over [`Uuid`] deriving
/// `Copy`, `Eq` and `Hash`; pair it with
/// `#[serde(try_from = "Uuid", into = "Uuid")]` so deserialization goes
/// through the nil check too.
#[macro_export]
macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self($crate::__private::Uuid::now_v7())
            }

            /// Wrap an existing UUID, rejecting the nil value.
            pub fn try_from_uuid(
                uuid: $crate::__private::Uuid,
            ) -> ::core::result::Result<Self, $crate::ErrorKey> {
                if uuid.is_nil() {
                    Err($crate::id::ID_IS_DEFAULT_OR_EMPTY)
                } else {
                    Ok(Self(uuid))
                }
            }

            pub fn as_uuid(&self) -> &$crate::__private::Uuid {
                &self.0
            }
        }

        impl ::core::default::Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::TryFrom<$crate::__private::Uuid> for $t {
            type Error = $crate::ErrorKey;

            fn try_from(value: $crate::__private::Uuid) -> ::core::result::Result<Self, Self::Error> {
                Self::try_from_uuid(value)
            }
        }

        impl ::core::convert::From<$t> for $crate::__private::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let uuid = <$crate::__private::Uuid as ::core::str::FromStr>::from_str(s)
                    .map_err(|e| $crate::DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::try_from_uuid(uuid)
                    .map_err(|key| $crate::DomainError::invalid_id(format!("{}: {}", $name, key)))
            }
        }
    };
}

impl_uuid_newtype!(AggregateId, "AggregateId");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use core::str::FromStr;

    #[test]
    fn new_ids_are_never_nil() {
        assert!(!AggregateId::new().as_uuid().is_nil());
    }

    #[test]
    fn nil_uuid_is_rejected() {
        assert_eq!(AggregateId::try_from_uuid(Uuid::nil()), Err(ID_IS_DEFAULT_OR_EMPTY));
        assert_eq!(ID_IS_DEFAULT_OR_EMPTY.to_string(), "IdIsDefaultOrEmpty");
    }

    #[test]
    fn parses_from_string() {
        let id = AggregateId::new();
        let parsed = AggregateId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parsing_nil_or_garbage_fails_with_invalid_id() {
        let nil = AggregateId::from_str("00000000-0000-0000-0000-000000000000").unwrap_err();
        assert!(matches!(nil, DomainError::InvalidId(msg) if msg.contains("IdIsDefaultOrEmpty")));

        let garbage = AggregateId::from_str("not-a-uuid").unwrap_err();
        assert!(matches!(garbage, DomainError::InvalidId(msg) if msg.starts_with("AggregateId")));
    }

    #[test]
    fn deserializing_nil_fails() {
        let json = r#""00000000-0000-0000-0000-000000000000""#;
        assert!(serde_json::from_str::<AggregateId>(json).is_err());

        let id = AggregateId::new();
        let round = serde_json::from_str::<AggregateId>(&serde_json::to_string(&id).unwrap()).unwrap();
        assert_eq!(round, id);
    }
}
