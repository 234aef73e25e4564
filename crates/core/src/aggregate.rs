//! Aggregate root marker.

use crate::entity::Entity;

/// Aggregate root: an [`Entity`] that is the sole mutation entry point for
/// everything it owns.
///
/// Owned children are only reachable through the root's own methods, so each
/// root can enforce its invariants in one place. Instances are not shared
/// across units of work; callers serialize access to a given instance.
pub trait AggregateRoot: Entity {
    /// Short, stable name used in logs (e.g. `"location"`).
    const KIND: &'static str;
}
