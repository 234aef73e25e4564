//! Entity trait: identity + continuity across state changes.
//!
//! Two entities are the same entity iff they are of the same concrete type and
//! carry the same *assigned* identifier. An entity without an identifier is
//! transient (not yet persisted) and is only ever equal to itself.

use core::any::{Any, TypeId};
use core::hash::{Hash, Hasher};

/// Hash fed into the hasher for transient entities.
const TRANSIENT_HASH_SENTINEL: u64 = 0x7472_616e_7369_656e;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Hash + core::fmt::Debug + 'static;

    /// Returns the entity identifier, or `None` while the entity is transient.
    fn id(&self) -> Option<&Self::Id>;

    fn is_transient(&self) -> bool {
        self.id().is_none()
    }

    fn is_persistent(&self) -> bool {
        !self.is_transient()
    }

    /// Identity comparison: both identifiers assigned and equal.
    fn same_identity_as(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Feeds the identity into `state`. Equal entities hash equally; all
    /// transient entities share one sentinel.
    fn identity_hash<H: Hasher>(&self, state: &mut H) {
        match self.id() {
            Some(id) => id.hash(state),
            None => TRANSIENT_HASH_SENTINEL.hash(state),
        }
    }
}

/// Compare entities that may be of different concrete types.
///
/// Different types are never equal, whatever their identifiers.
pub fn entity_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + 'static,
    B: Entity + 'static,
{
    if TypeId::of::<A>() != TypeId::of::<B>() {
        return false;
    }
    match (a.id(), b.id()) {
        (Some(a_id), Some(b_id)) => (b_id as &dyn Any)
            .downcast_ref::<A::Id>()
            .is_some_and(|b_id| a_id == b_id),
        _ => false,
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` for an [`Entity`] by identity.
///
/// The same instance always equals itself (pointer identity), so `Eq`'s
/// reflexivity holds for transient entities too.
#[macro_export]
macro_rules! impl_entity_identity {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                ::core::ptr::eq(self, other) || $crate::Entity::same_identity_as(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::Entity::identity_hash(self, state)
            }
        }
    };
}
