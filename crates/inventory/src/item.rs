use serde::{Deserialize, Serialize};
use uuid::Uuid;

use depot_core::{
    AggregateRoot, Code, DomainResult, Entity, ErrorKey, Name, Rule, ShortDescription,
    ValidationErrors, check, combine, ensure, impl_entity_identity, impl_uuid_newtype,
};

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ItemId(Uuid);

impl_uuid_newtype!(ItemId, "ItemId");

const CODE: &str = "Code";
const NAME: &str = "Name";
const DESCRIPTION: &str = "Description";

/// Error keys reported by [`Item`].
pub mod keys {
    use super::*;

    pub const ID_IS_DEFAULT_OR_EMPTY: ErrorKey = depot_core::id::ID_IS_DEFAULT_OR_EMPTY;
    pub const CODE_IS_NULL: ErrorKey = ErrorKey::new(CODE, Rule::IsNull);
    pub const CODE_IS_EMPTY: ErrorKey = ErrorKey::new(CODE, Rule::IsEmpty);
    pub const CODE_TOO_LONG: ErrorKey = ErrorKey::new(CODE, Rule::TooLong);
    pub const CODE_INVALID_FORMAT: ErrorKey = ErrorKey::new(CODE, Rule::InvalidFormat);
    pub const NAME_IS_NULL: ErrorKey = ErrorKey::new(NAME, Rule::IsNull);
    pub const NAME_IS_EMPTY: ErrorKey = ErrorKey::new(NAME, Rule::IsEmpty);
    pub const NAME_TOO_LONG: ErrorKey = ErrorKey::new(NAME, Rule::TooLong);
    pub const DESCRIPTION_IS_EMPTY: ErrorKey = ErrorKey::new(DESCRIPTION, Rule::IsEmpty);
    pub const DESCRIPTION_TOO_LONG: ErrorKey = ErrorKey::new(DESCRIPTION, Rule::TooLong);
}

/// Command: create an item from raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewItem {
    /// `None` assigns a fresh identifier; a nil UUID is rejected.
    pub id: Option<Uuid>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Aggregate root: Item.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    code: Code,
    name: Name,
    description: Option<ShortDescription>,
}

impl_entity_identity!(Item);

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}

impl AggregateRoot for Item {
    const KIND: &'static str = "item";
}

impl Item {
    /// Fail-fast constructor: the first invalid field aborts, no item is built.
    pub fn new(cmd: NewItem) -> DomainResult<Self> {
        let id = match cmd.id {
            Some(raw) => ensure::valid(check::identifier::<ItemId>(raw))?,
            None => ItemId::new(),
        };
        let code = ensure::present(CODE, cmd.code.as_deref())?;
        let code = ensure::valid(Code::parse(CODE, code))?;
        let name = ensure::present(NAME, cmd.name.as_deref())?;
        let name = ensure::valid(Name::parse(NAME, name))?;
        let description = ensure::valid(check::optional(cmd.description.as_deref(), |raw| {
            ShortDescription::parse(DESCRIPTION, raw)
        }))?;

        Ok(Self {
            id,
            code,
            name,
            description,
        })
    }

    /// Collecting factory: runs every check and reports all failing keys.
    pub fn create(cmd: NewItem) -> Result<Self, ValidationErrors> {
        let id = match cmd.id {
            Some(raw) => check::identifier::<ItemId>(raw),
            None => Ok(ItemId::new()),
        };
        let code =
            check::present(CODE, cmd.code.as_deref()).and_then(|raw| Code::parse(CODE, raw));
        let name = check::present(NAME, cmd.name.as_deref()).and_then(|raw| Name::parse(NAME, raw));
        let description = check::optional(cmd.description.as_deref(), |raw| {
            ShortDescription::parse(DESCRIPTION, raw)
        });

        let (id, code, name, description) = combine((id, code, name, description))
            .inspect_err(|errors| tracing::debug!(kind = Self::KIND, %errors, "create rejected"))?;

        Ok(Self {
            id,
            code,
            name,
            description,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> Option<&ShortDescription> {
        self.description.as_ref()
    }

    pub fn change_code(&mut self, raw: &str) -> DomainResult<()> {
        self.code = ensure::valid(Code::parse(CODE, raw))?;
        Ok(())
    }

    pub fn change_name(&mut self, raw: &str) -> DomainResult<()> {
        self.name = ensure::valid(Name::parse(NAME, raw))?;
        Ok(())
    }

    /// Accepts a missing name so callers can forward optional input as-is;
    /// `None` is rejected with `NameIsNull`.
    pub fn change_name_opt(&mut self, raw: Option<&str>) -> DomainResult<()> {
        let raw = ensure::present(NAME, raw)?;
        self.change_name(raw)
    }

    pub fn change_description(&mut self, raw: &str) -> DomainResult<()> {
        self.description = Some(ensure::valid(ShortDescription::parse(DESCRIPTION, raw))?);
        Ok(())
    }

    pub fn clear_description(&mut self) {
        self.description = None;
    }
}
