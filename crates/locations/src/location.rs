use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use depot_core::{
    AggregateRoot, Code, DomainError, DomainResult, Entity, ErrorKey, Name, Rule,
    ShortDescription, ValidationErrors, check, combine, ensure, impl_entity_identity,
    impl_uuid_newtype,
};

/// Location identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct LocationId(Uuid);

impl_uuid_newtype!(LocationId, "LocationId");

const BUSINESS_CODE: &str = "BusinessCode";
const NAME: &str = "Name";
const DESCRIPTION: &str = "Description";
const LOCATION_STATE: &str = "LocationState";
const PARENT: &str = "Parent";
const SUB_LOCATION: &str = "SubLocation";

/// Error keys reported by [`Location`].
pub mod keys {
    use super::*;

    pub const ID_IS_DEFAULT_OR_EMPTY: ErrorKey = depot_core::id::ID_IS_DEFAULT_OR_EMPTY;
    pub const BUSINESS_CODE_IS_NULL: ErrorKey = ErrorKey::new(BUSINESS_CODE, Rule::IsNull);
    pub const BUSINESS_CODE_IS_EMPTY: ErrorKey = ErrorKey::new(BUSINESS_CODE, Rule::IsEmpty);
    pub const BUSINESS_CODE_TOO_LONG: ErrorKey = ErrorKey::new(BUSINESS_CODE, Rule::TooLong);
    pub const BUSINESS_CODE_INVALID_FORMAT: ErrorKey =
        ErrorKey::new(BUSINESS_CODE, Rule::InvalidFormat);
    pub const NAME_IS_NULL: ErrorKey = ErrorKey::new(NAME, Rule::IsNull);
    pub const NAME_IS_EMPTY: ErrorKey = ErrorKey::new(NAME, Rule::IsEmpty);
    pub const NAME_TOO_LONG: ErrorKey = ErrorKey::new(NAME, Rule::TooLong);
    pub const DESCRIPTION_IS_EMPTY: ErrorKey = ErrorKey::new(DESCRIPTION, Rule::IsEmpty);
    pub const DESCRIPTION_TOO_LONG: ErrorKey = ErrorKey::new(DESCRIPTION, Rule::TooLong);
    pub const LOCATION_STATE_IS_NULL: ErrorKey = ErrorKey::new(LOCATION_STATE, Rule::IsNull);
    pub const PARENT_CREATES_CYCLE: ErrorKey = ErrorKey::new(PARENT, Rule::CreatesCycle);
    pub const SUB_LOCATION_CREATES_CYCLE: ErrorKey =
        ErrorKey::new(SUB_LOCATION, Rule::CreatesCycle);
    pub const SUB_LOCATION_IS_DUPLICATE: ErrorKey = ErrorKey::new(SUB_LOCATION, Rule::IsDuplicate);
}

/// Location lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationState {
    Created,
    Active,
    Inactive,
    Archived,
}

/// Kind of physical place a location stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    #[default]
    NotSet,
    Site,
    Warehouse,
    Zone,
    Aisle,
    Rack,
    Shelf,
    Bin,
}

/// Command: create a location from raw, possibly incomplete input.
///
/// Missing fields are reported as `...IsNull` keys rather than rejected by
/// deserialization, so an API layer can surface every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewLocation {
    /// `None` assigns a fresh identifier.
    pub id: Option<Uuid>,
    pub business_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub state: Option<LocationState>,
    /// `None` means [`LocationType::NotSet`].
    pub location_type: Option<LocationType>,
}

/// Aggregate root: Location.
///
/// Owns its sub-locations exclusively. The parent is held as a snapshot; adding
/// a sub-location does not set that sub-location's parent (callers do both
/// sides when they need them).
#[derive(Debug, Clone)]
pub struct Location {
    id: LocationId,
    business_code: Code,
    name: Name,
    description: Option<ShortDescription>,
    state: LocationState,
    location_type: LocationType,
    parent: Option<Box<Location>>,
    sub_locations: Vec<Location>,
}

impl_entity_identity!(Location);

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}

impl AggregateRoot for Location {
    const KIND: &'static str = "location";
}

impl Location {
    /// New location in the `Created` state with a fresh identifier.
    pub fn create(business_code: &str, name: &str) -> Result<Self, ValidationErrors> {
        Self::create_from(NewLocation {
            business_code: Some(business_code.to_owned()),
            name: Some(name.to_owned()),
            state: Some(LocationState::Created),
            ..NewLocation::default()
        })
    }

    /// Validate every field of `cmd` and build the location, or report all
    /// failing keys without building anything.
    pub fn create_from(cmd: NewLocation) -> Result<Self, ValidationErrors> {
        let id = match cmd.id {
            Some(raw) => check::identifier::<LocationId>(raw),
            None => Ok(LocationId::new()),
        };
        let business_code = check::present(BUSINESS_CODE, cmd.business_code.as_deref())
            .and_then(|raw| Code::parse(BUSINESS_CODE, raw));
        let name = check::present(NAME, cmd.name.as_deref()).and_then(|raw| Name::parse(NAME, raw));
        let description = check::optional(cmd.description.as_deref(), |raw| {
            ShortDescription::parse(DESCRIPTION, raw)
        });
        let state = check::present(LOCATION_STATE, cmd.state);

        let (id, business_code, name, description, state) =
            combine((id, business_code, name, description, state)).inspect_err(|errors| {
                tracing::debug!(kind = Self::KIND, %errors, "create rejected");
            })?;

        Ok(Self {
            id,
            business_code,
            name,
            description,
            state,
            location_type: cmd.location_type.unwrap_or_default(),
            parent: None,
            sub_locations: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> LocationId {
        self.id
    }

    pub fn business_code(&self) -> &Code {
        &self.business_code
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> Option<&ShortDescription> {
        self.description.as_ref()
    }

    pub fn state(&self) -> LocationState {
        self.state
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn parent(&self) -> Option<&Location> {
        self.parent.as_deref()
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Direct sub-locations, in insertion order.
    pub fn sub_locations(&self) -> &[Location] {
        &self.sub_locations
    }

    pub fn has_sub_locations(&self) -> bool {
        !self.sub_locations.is_empty()
    }

    /// Depth-first search of the whole subtree (excluding `self`).
    pub fn find_sub_location(&self, id: &LocationId) -> Option<&Location> {
        self.sub_locations.iter().find_map(|child| {
            if child.id == *id {
                Some(child)
            } else {
                child.find_sub_location(id)
            }
        })
    }

    /// Number of locations below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.sub_locations
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    pub fn change_business_code(&mut self, raw: &str) -> DomainResult<()> {
        self.business_code = ensure::valid(Code::parse(BUSINESS_CODE, raw))?;
        Ok(())
    }

    pub fn change_name(&mut self, raw: &str) -> DomainResult<()> {
        self.name = ensure::valid(Name::parse(NAME, raw))?;
        Ok(())
    }

    pub fn change_description(&mut self, raw: &str) -> DomainResult<()> {
        self.description = Some(ensure::valid(ShortDescription::parse(DESCRIPTION, raw))?);
        Ok(())
    }

    pub fn clear_description(&mut self) {
        self.description = None;
    }

    pub fn change_state(&mut self, state: LocationState) {
        self.state = state;
    }

    pub fn change_type(&mut self, location_type: LocationType) {
        self.location_type = location_type;
    }

    /// Set the parent. Rejected if `parent` or any of its ancestors is this
    /// location or lies in its subtree. Moving under an existing ancestor is
    /// allowed.
    pub fn change_parent(&mut self, parent: Location) -> DomainResult<()> {
        let below: HashSet<&LocationId> = self.subtree_ids().into_iter().collect();
        if parent.lineage_ids().any(|id| below.contains(id)) {
            return Err(Self::reject_hierarchy_change(keys::PARENT_CREATES_CYCLE));
        }

        tracing::trace!(location_id = %self.id, parent_id = %parent.id, "parent changed");
        self.parent = Some(Box::new(parent));
        Ok(())
    }

    pub fn remove_parent(&mut self) {
        if let Some(parent) = self.parent.take() {
            tracing::trace!(location_id = %self.id, parent_id = %parent.id, "parent removed");
        }
    }

    /// Append `child` to the owned sub-locations.
    ///
    /// Rejected with `SubLocationCreatesCycle` if `child` or anything below it
    /// is this location or one of its ancestors, and with
    /// `SubLocationIsDuplicate` if any of them is already in this subtree.
    pub fn add_sub_location(&mut self, child: Location) -> DomainResult<()> {
        let incoming = child.subtree_ids();

        let above: HashSet<&LocationId> = self.lineage_ids().collect();
        if incoming.iter().any(|id| above.contains(id)) {
            return Err(Self::reject_hierarchy_change(keys::SUB_LOCATION_CREATES_CYCLE));
        }

        let below: HashSet<&LocationId> = self.subtree_ids().into_iter().collect();
        if incoming.iter().any(|id| below.contains(id)) {
            return Err(Self::reject_hierarchy_change(keys::SUB_LOCATION_IS_DUPLICATE));
        }

        tracing::trace!(location_id = %self.id, child_id = %child.id, "sub-location added");
        self.sub_locations.push(child);
        Ok(())
    }

    /// Detach a direct sub-location, returning it.
    pub fn remove_sub_location(&mut self, id: &LocationId) -> Option<Location> {
        let index = self.sub_locations.iter().position(|child| child.id == *id)?;
        tracing::trace!(location_id = %self.id, child_id = %id, "sub-location removed");
        Some(self.sub_locations.remove(index))
    }

    pub fn clear_sub_locations(&mut self) {
        self.sub_locations.clear();
    }

    /// This location followed by its ancestors, nearest first.
    fn lineage_ids(&self) -> impl Iterator<Item = &LocationId> {
        core::iter::successors(Some(self), |loc| loc.parent.as_deref()).map(|loc| &loc.id)
    }

    /// This location and everything below it.
    fn subtree_ids(&self) -> Vec<&LocationId> {
        let mut ids = vec![&self.id];
        let mut stack: Vec<&Location> = self.sub_locations.iter().collect();
        while let Some(loc) = stack.pop() {
            ids.push(&loc.id);
            stack.extend(loc.sub_locations.iter());
        }
        ids
    }

    fn reject_hierarchy_change(key: ErrorKey) -> DomainError {
        tracing::debug!(kind = Self::KIND, error_key = %key, "hierarchy change rejected");
        DomainError::invalid_argument(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(code: &str) -> Location {
        Location::create(code, &format!("Location {code}")).unwrap()
    }

    fn new_location() -> NewLocation {
        NewLocation {
            id: Some(Uuid::now_v7()),
            business_code: Some("WH-01".to_string()),
            name: Some("Main warehouse".to_string()),
            description: Some("Ground floor".to_string()),
            state: Some(LocationState::Active),
            location_type: Some(LocationType::Warehouse),
        }
    }

    #[test]
    fn create_starts_without_hierarchy() {
        let loc = Location::create("WH-01", "Main warehouse").unwrap();

        assert_eq!(loc.business_code().as_str(), "WH-01");
        assert_eq!(loc.name().as_str(), "Main warehouse");
        assert_eq!(loc.state(), LocationState::Created);
        assert_eq!(loc.location_type(), LocationType::NotSet);
        assert!(loc.description().is_none());
        assert!(!loc.has_sub_locations());
        assert!(loc.sub_locations().is_empty());
        assert!(!loc.has_parent());
        assert!(loc.is_persistent());
    }

    #[test]
    fn create_from_uses_supplied_values() {
        let cmd = new_location();
        let raw_id = cmd.id.unwrap();
        let loc = Location::create_from(cmd).unwrap();

        assert_eq!(*loc.id_typed().as_uuid(), raw_id);
        assert_eq!(loc.state(), LocationState::Active);
        assert_eq!(loc.location_type(), LocationType::Warehouse);
        assert_eq!(loc.description().unwrap().as_str(), "Ground floor");
    }

    #[test]
    fn create_from_rejects_nil_id() {
        let cmd = NewLocation {
            id: Some(Uuid::nil()),
            ..new_location()
        };

        let errors = Location::create_from(cmd).unwrap_err();
        assert_eq!(errors.keys(), &[keys::ID_IS_DEFAULT_OR_EMPTY]);
        assert_eq!(errors.first().to_string(), "IdIsDefaultOrEmpty");
    }

    #[test]
    fn create_from_reports_every_missing_field() {
        let errors = Location::create_from(NewLocation::default()).unwrap_err();

        assert_eq!(
            errors.keys(),
            &[
                keys::BUSINESS_CODE_IS_NULL,
                keys::NAME_IS_NULL,
                keys::LOCATION_STATE_IS_NULL
            ]
        );
    }

    #[test]
    fn create_from_reports_malformed_values() {
        let cmd = NewLocation {
            business_code: Some("WH 01".to_string()),
            name: Some("   ".to_string()),
            description: Some("x".repeat(ShortDescription::MAX_LEN + 1)),
            ..new_location()
        };

        let errors = Location::create_from(cmd).unwrap_err();
        assert_eq!(
            errors.keys(),
            &[
                keys::BUSINESS_CODE_INVALID_FORMAT,
                keys::NAME_IS_EMPTY,
                keys::DESCRIPTION_TOO_LONG
            ]
        );
    }

    #[test]
    fn new_location_deserializes_with_missing_fields() {
        let cmd: NewLocation = serde_json::from_str(r#"{"business_code":"A1"}"#).unwrap();
        let errors = Location::create_from(cmd).unwrap_err();

        assert_eq!(errors.keys(), &[keys::NAME_IS_NULL, keys::LOCATION_STATE_IS_NULL]);
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"["NameIsNull","LocationStateIsNull"]"#
        );
    }

    #[test]
    fn add_sub_location_keeps_insertion_order() {
        let mut root = location("SITE");
        let first = location("A");
        let second = location("B");

        root.add_sub_location(first.clone()).unwrap();
        root.add_sub_location(second.clone()).unwrap();

        assert!(root.has_sub_locations());
        assert_eq!(root.sub_locations(), &[first.clone(), second]);
        // No symmetric update.
        assert!(!root.sub_locations()[0].has_parent());
        assert!(!first.has_parent());
    }

    #[test]
    fn clear_sub_locations_empties_the_list() {
        let mut root = location("SITE");
        root.add_sub_location(location("A")).unwrap();

        root.clear_sub_locations();

        assert!(!root.has_sub_locations());
        assert!(root.sub_locations().is_empty());
    }

    #[test]
    fn remove_sub_location_detaches_direct_child_only() {
        let mut root = location("SITE");
        let mut zone = location("ZONE");
        let bin = location("BIN");
        zone.add_sub_location(bin.clone()).unwrap();
        root.add_sub_location(zone.clone()).unwrap();

        assert!(root.remove_sub_location(&bin.id_typed()).is_none());
        assert_eq!(root.remove_sub_location(&zone.id_typed()), Some(zone));
        assert!(!root.has_sub_locations());
    }

    #[test]
    fn find_and_count_walk_the_whole_subtree() {
        let mut root = location("SITE");
        let mut zone = location("ZONE");
        let bin = location("BIN");
        zone.add_sub_location(bin.clone()).unwrap();
        zone.add_sub_location(location("BIN2")).unwrap();
        root.add_sub_location(zone).unwrap();

        assert_eq!(root.descendant_count(), 3);
        assert_eq!(root.find_sub_location(&bin.id_typed()), Some(&bin));
        assert!(root.find_sub_location(&root.id_typed()).is_none());
    }

    #[test]
    fn change_and_remove_parent() {
        let site = location("SITE");
        let mut zone = location("ZONE");

        zone.change_parent(site.clone()).unwrap();
        assert_eq!(zone.parent(), Some(&site));
        assert!(zone.has_parent());

        zone.remove_parent();
        assert!(zone.parent().is_none());
    }

    #[test]
    fn location_cannot_contain_itself() {
        let mut root = location("SITE");
        let copy = root.clone();

        let err = root.add_sub_location(copy).unwrap_err();
        assert_eq!(err, DomainError::InvalidArgument(keys::SUB_LOCATION_CREATES_CYCLE));
        assert!(!root.has_sub_locations());
    }

    #[test]
    fn adding_the_same_sub_location_twice_is_rejected() {
        let mut root = location("SITE");
        let zone = location("ZONE");
        root.add_sub_location(zone.clone()).unwrap();

        let err = root.add_sub_location(zone.clone()).unwrap_err();
        assert_eq!(err, DomainError::InvalidArgument(keys::SUB_LOCATION_IS_DUPLICATE));
        assert_eq!(err.key().unwrap().to_string(), "SubLocationIsDuplicate");
        assert_eq!(root.sub_locations(), &[zone]);
    }

    #[test]
    fn sub_location_already_deeper_in_the_tree_is_rejected() {
        let mut root = location("SITE");
        let mut zone = location("ZONE");
        let bin = location("BIN");
        zone.add_sub_location(bin.clone()).unwrap();
        root.add_sub_location(zone).unwrap();

        // Directly, and carried inside another subtree.
        assert_eq!(
            root.add_sub_location(bin.clone()).unwrap_err().key(),
            Some(keys::SUB_LOCATION_IS_DUPLICATE)
        );
        let mut rack = location("RACK");
        rack.add_sub_location(bin).unwrap();
        assert_eq!(
            root.add_sub_location(rack).unwrap_err().key(),
            Some(keys::SUB_LOCATION_IS_DUPLICATE)
        );
        assert_eq!(root.descendant_count(), 2);
    }

    #[test]
    fn removed_sub_location_can_be_added_again() {
        let mut root = location("SITE");
        let zone = location("ZONE");
        root.add_sub_location(zone.clone()).unwrap();
        root.remove_sub_location(&zone.id_typed()).unwrap();

        root.add_sub_location(zone).unwrap();
        assert_eq!(root.descendant_count(), 1);
    }

    #[test]
    fn moving_under_an_existing_ancestor_is_allowed() {
        let site = location("SITE");
        let mut zone = location("ZONE");
        zone.change_parent(site.clone()).unwrap();
        let mut bin = location("BIN");
        bin.change_parent(zone).unwrap();

        bin.change_parent(site.clone()).unwrap();
        assert_eq!(bin.parent(), Some(&site));
    }

    #[test]
    fn state_and_type_share_the_snake_case_wire_format() {
        assert_eq!(serde_json::to_string(&LocationState::Inactive).unwrap(), r#""inactive""#);
        assert_eq!(serde_json::to_string(&LocationType::NotSet).unwrap(), r#""not_set""#);

        let cmd: NewLocation = serde_json::from_str(
            r#"{"business_code":"A1","name":"Aisle 1","state":"active","location_type":"aisle"}"#,
        )
        .unwrap();
        let loc = Location::create_from(cmd).unwrap();
        assert_eq!(loc.state(), LocationState::Active);
        assert_eq!(loc.location_type(), LocationType::Aisle);
    }

    #[test]
    fn ancestor_cannot_become_sub_location() {
        let site = location("SITE");
        let mut zone = location("ZONE");
        zone.change_parent(site.clone()).unwrap();

        let err = zone.add_sub_location(site).unwrap_err();
        assert_eq!(err.key(), Some(keys::SUB_LOCATION_CREATES_CYCLE));
    }

    #[test]
    fn sub_location_containing_self_is_rejected() {
        let mut zone = location("ZONE");
        let mut rack = location("RACK");
        rack.add_sub_location(zone.clone()).unwrap();

        let err = zone.add_sub_location(rack).unwrap_err();
        assert_eq!(err.key(), Some(keys::SUB_LOCATION_CREATES_CYCLE));
    }

    #[test]
    fn descendant_cannot_become_parent() {
        let mut site = location("SITE");
        let mut zone = location("ZONE");
        let bin = location("BIN");
        zone.add_sub_location(bin.clone()).unwrap();
        site.add_sub_location(zone).unwrap();

        assert_eq!(
            site.change_parent(bin).unwrap_err(),
            DomainError::InvalidArgument(keys::PARENT_CREATES_CYCLE)
        );
        assert_eq!(
            site.change_parent(site.clone()).unwrap_err().key(),
            Some(keys::PARENT_CREATES_CYCLE)
        );
        assert!(!site.has_parent());
    }

    #[test]
    fn parent_whose_ancestry_contains_self_is_rejected() {
        let mut site = location("SITE");
        let mut zone = location("ZONE");
        zone.change_parent(site.clone()).unwrap();

        let err = site.change_parent(zone).unwrap_err();
        assert_eq!(err.key(), Some(keys::PARENT_CREATES_CYCLE));
    }

    #[test]
    fn failed_mutators_leave_state_unchanged() {
        let mut loc = location("WH-01");
        loc.change_description("Ground floor").unwrap();

        assert_eq!(
            loc.change_business_code("").unwrap_err(),
            DomainError::InvalidArgument(keys::BUSINESS_CODE_IS_EMPTY)
        );
        assert_eq!(
            loc.change_name(&"n".repeat(Name::MAX_LEN + 1)).unwrap_err(),
            DomainError::InvalidArgument(keys::NAME_TOO_LONG)
        );
        assert_eq!(
            loc.change_description(" ").unwrap_err(),
            DomainError::InvalidArgument(keys::DESCRIPTION_IS_EMPTY)
        );

        assert_eq!(loc.business_code().as_str(), "WH-01");
        assert_eq!(loc.name().as_str(), "Location WH-01");
        assert_eq!(loc.description().unwrap().as_str(), "Ground floor");
    }

    #[test]
    fn mutators_apply_valid_values() {
        let mut loc = location("WH-01");

        loc.change_business_code("wh-02").unwrap();
        loc.change_name("Overflow").unwrap();
        loc.change_state(LocationState::Inactive);
        loc.change_type(LocationType::Zone);
        loc.change_description("Temporary").unwrap();
        loc.clear_description();

        assert_eq!(loc.business_code().as_str(), "WH-02");
        assert_eq!(loc.name().as_str(), "Overflow");
        assert_eq!(loc.state(), LocationState::Inactive);
        assert_eq!(loc.location_type(), LocationType::Zone);
        assert!(loc.description().is_none());
    }

    #[test]
    fn equality_is_by_identity() {
        let loc = location("WH-01");
        let mut renamed = loc.clone();
        renamed.change_name("Renamed").unwrap();

        assert_eq!(loc, renamed);
        assert_ne!(loc, location("WH-01"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: sub-locations come back exactly as added, in order.
            #[test]
            fn sub_locations_preserve_insertion_order(codes in proptest::collection::vec("[A-Z][A-Z0-9]{0,7}", 0..12)) {
                let mut root = location("ROOT");
                let children: Vec<Location> = codes.iter().map(|c| location(c)).collect();
                for child in &children {
                    root.add_sub_location(child.clone()).unwrap();
                }

                prop_assert_eq!(root.has_sub_locations(), !children.is_empty());
                prop_assert_eq!(root.sub_locations(), children.as_slice());
                prop_assert_eq!(root.descendant_count(), children.len());
            }

            /// Property: any valid code and name produce a location.
            #[test]
            fn valid_input_always_creates(code in "[A-Za-z0-9._-]{1,32}", name in "[A-Za-z][A-Za-z0-9 ]{0,99}") {
                let loc = Location::create(&code, &name).unwrap();
                prop_assert_eq!(loc.business_code().as_str(), code.to_ascii_uppercase());
                prop_assert_eq!(loc.name().as_str(), name.trim());
            }
        }
    }
}
