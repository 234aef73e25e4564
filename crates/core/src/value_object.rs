//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKey, Rule};
use crate::validation::check;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; construction is where validation happens, so an existing
/// value object is always valid.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
pub trait ValueObject: Clone + Eq + core::fmt::Debug {}

/// Implements the string plumbing shared by the text value objects.
macro_rules! impl_text_value_object {
    ($t:ident, $default_field:literal) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $t {
            type Error = ErrorKey;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse($default_field, value)
            }
        }

        impl TryFrom<String> for $t {
            type Error = ErrorKey;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse($default_field, &value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

/// Business code, e.g. `WH-01.A`.
///
/// Trimmed, upper-cased, 1..=32 characters from `[A-Z0-9._-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    pub const MAX_LEN: usize = 32;

    /// Validate `raw`, reporting failures against `field`.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ErrorKey> {
        let value = check::not_blank(field, raw)?;
        let value = check::max_len(field, value, Self::MAX_LEN)?;
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(ErrorKey::new(field, Rule::InvalidFormat));
        }
        Ok(Self(value.to_ascii_uppercase()))
    }
}

impl_text_value_object!(Code, "Code");

/// Display name. Trimmed, 1..=128 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 128;

    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ErrorKey> {
        let value = check::not_blank(field, raw)?;
        let value = check::max_len(field, value, Self::MAX_LEN)?;
        Ok(Self(value.to_owned()))
    }
}

impl_text_value_object!(Name, "Name");

/// Free-text description. Trimmed, 1..=256 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortDescription(String);

impl ShortDescription {
    pub const MAX_LEN: usize = 256;

    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ErrorKey> {
        let value = check::not_blank(field, raw)?;
        let value = check::max_len(field, value, Self::MAX_LEN)?;
        Ok(Self(value.to_owned()))
    }
}

impl_text_value_object!(ShortDescription, "Description");
