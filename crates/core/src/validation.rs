//! Two-tier argument validation.
//!
//! - [`check`]: non-throwing checks returning `Result<_, ErrorKey>`. Factories
//!   run every check and merge the outcomes with [`combine`], so all
//!   violations are reported together.
//! - [`ensure`]: converts a single check into a [`DomainResult`] that aborts
//!   the calling mutator before it touches any field.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult, ErrorKey, Rule, ValidationErrors};

pub mod check {
    use super::*;

    /// The value must be supplied.
    pub fn present<T>(field: &'static str, value: Option<T>) -> Result<T, ErrorKey> {
        value.ok_or(ErrorKey::new(field, Rule::IsNull))
    }

    /// The text must contain something besides whitespace. Returns it trimmed.
    pub fn not_blank<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, ErrorKey> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(ErrorKey::new(field, Rule::IsEmpty))
        } else {
            Ok(trimmed)
        }
    }

    /// At most `max` characters (not bytes).
    pub fn max_len<'a>(field: &'static str, value: &'a str, max: usize) -> Result<&'a str, ErrorKey> {
        if value.chars().count() > max {
            Err(ErrorKey::new(field, Rule::TooLong))
        } else {
            Ok(value)
        }
    }

    /// The UUID must be assigned (non-nil) and convertible into `I`.
    pub fn identifier<I>(raw: Uuid) -> Result<I, ErrorKey>
    where
        I: TryFrom<Uuid, Error = ErrorKey>,
    {
        I::try_from(raw)
    }

    /// Optional text: absent stays absent, present must parse.
    pub fn optional<T>(
        raw: Option<&str>,
        parse: impl FnOnce(&str) -> Result<T, ErrorKey>,
    ) -> Result<Option<T>, ErrorKey> {
        raw.map(parse).transpose()
    }
}

pub mod ensure {
    use super::*;

    /// Abort with [`DomainError::InvalidArgument`] if the check failed.
    pub fn valid<T>(outcome: Result<T, ErrorKey>) -> DomainResult<T> {
        outcome.map_err(|key| {
            tracing::debug!(error_key = %key, "argument rejected");
            DomainError::invalid_argument(key)
        })
    }

    /// Abort with `{field}IsNull` if the value is missing.
    pub fn present<T>(field: &'static str, value: Option<T>) -> DomainResult<T> {
        valid(check::present(field, value))
    }
}

/// A set of check outcomes that can be merged into one.
///
/// Implemented for tuples of up to eight `Result<_, ErrorKey>`.
pub trait Combine {
    type Output;

    fn combine(self) -> Result<Self::Output, ValidationErrors>;
}

macro_rules! impl_combine {
    ($($t:ident $v:ident),+) => {
        impl<$($t),+> Combine for ($(Result<$t, ErrorKey>,)+) {
            type Output = ($($t,)+);

            fn combine(self) -> Result<Self::Output, ValidationErrors> {
                match self {
                    ($(Ok($v),)+) => Ok(($($v,)+)),
                    ($($v,)+) => {
                        let mut keys = Vec::new();
                        $(
                            if let Err(key) = $v {
                                keys.push(key);
                            }
                        )+
                        Err(ValidationErrors::from_failed(keys))
                    }
                }
            }
        }
    };
}

impl_combine!(A a);
impl_combine!(A a, B b);
impl_combine!(A a, B b, C c);
impl_combine!(A a, B b, C c, D d);
impl_combine!(A a, B b, C c, D d, E e);
impl_combine!(A a, B b, C c, D d, E e, F f);
impl_combine!(A a, B b, C c, D d, E e, F f, G g);
impl_combine!(A a, B b, C c, D d, E e, F f, G g, H h);

/// Succeeds with every value only if every check succeeded; otherwise fails
/// with all failing keys, in argument order.
pub fn combine<C: Combine>(checks: C) -> Result<C::Output, ValidationErrors> {
    checks.combine()
}

/// [`combine`] for a homogeneous list of unit checks.
pub fn combine_all<I>(checks: I) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = Result<(), ErrorKey>>,
{
    let keys: Vec<ErrorKey> = checks.into_iter().filter_map(Result::err).collect();
    match ValidationErrors::from_keys(keys) {
        Some(errors) => Err(errors),
        None => Ok(()),
    }
}
