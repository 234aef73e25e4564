//! Locations domain module.
//!
//! Hierarchical storage locations (site, warehouse, zone, ... bin) as a single
//! aggregate that owns its sub-locations. Pure domain logic: no IO, no storage.

pub mod location;

pub use location::{Location, LocationId, LocationState, LocationType, NewLocation, keys};
