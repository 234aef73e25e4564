//! Domain error model.
//!
//! Validation failures are identified by stable [`ErrorKey`]s rather than free
//! text, so callers (and tests) can branch on them.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// The rule a value broke. Closed set; combined with a field name it forms an
/// [`ErrorKey`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    IsNull,
    IsEmpty,
    TooLong,
    InvalidFormat,
    IsDefaultOrEmpty,
    CreatesCycle,
    IsDuplicate,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::IsNull => "IsNull",
            Rule::IsEmpty => "IsEmpty",
            Rule::TooLong => "TooLong",
            Rule::InvalidFormat => "InvalidFormat",
            Rule::IsDefaultOrEmpty => "IsDefaultOrEmpty",
            Rule::CreatesCycle => "CreatesCycle",
            Rule::IsDuplicate => "IsDuplicate",
        }
    }
}

/// Named validation failure, e.g. `BusinessCodeIsNull`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ErrorKey {
    field: &'static str,
    rule: Rule,
}

impl ErrorKey {
    pub const fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }
}

impl core::fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.field, self.rule.as_str())
    }
}

impl Serialize for ErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One or more validation failures collected by a factory.
///
/// Never empty; keys keep the order in which the checks were declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ErrorKey>);

impl ValidationErrors {
    pub fn single(key: ErrorKey) -> Self {
        Self(vec![key])
    }

    /// Returns `None` when `keys` is empty (nothing failed).
    pub fn from_keys(keys: Vec<ErrorKey>) -> Option<Self> {
        if keys.is_empty() { None } else { Some(Self(keys)) }
    }

    /// Caller guarantees at least one key.
    pub(crate) fn from_failed(keys: Vec<ErrorKey>) -> Self {
        debug_assert!(!keys.is_empty());
        Self(keys)
    }

    pub fn first(&self) -> ErrorKey {
        self.0[0]
    }

    pub fn keys(&self) -> &[ErrorKey] {
        &self.0
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.0.contains(&key)
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            core::fmt::Display::fmt(key, f)?;
        }
        Ok(())
    }
}

impl From<ErrorKey> for ValidationErrors {
    fn from(key: ErrorKey) -> Self {
        Self::single(key)
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed identifiers). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A factory rejected its input; every failing key is listed.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A single argument was rejected; nothing was changed.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorKey),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(key: ErrorKey) -> Self {
        Self::InvalidArgument(key)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The key behind a validation-style failure, if any.
    pub fn key(&self) -> Option<ErrorKey> {
        match self {
            DomainError::Validation(errors) => Some(errors.first()),
            DomainError::InvalidArgument(key) => Some(*key),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
