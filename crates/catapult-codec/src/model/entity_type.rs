//! Entity type discriminators.
//!
//! An entity type selects the wire layout of a transaction body and the
//! codec and schema registered for it.

use std::fmt;

/// A 16-bit transaction kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityType(pub u16);

impl EntityType {
    /// Account properties transaction over addresses.
    pub const ACCOUNT_PROPERTIES_ADDRESS: EntityType = EntityType(0x4150);
    /// Account properties transaction over mosaic ids.
    pub const ACCOUNT_PROPERTIES_MOSAIC: EntityType = EntityType(0x4250);
    /// Account properties transaction over entity types.
    pub const ACCOUNT_PROPERTIES_ENTITY_TYPE: EntityType = EntityType(0x4350);

    /// Returns the canonical schema name for well-known entity types.
    pub fn name(self) -> Option<&'static str> {
        match self {
            EntityType::ACCOUNT_PROPERTIES_ADDRESS => Some("accountPropertiesAddress"),
            EntityType::ACCOUNT_PROPERTIES_MOSAIC => Some("accountPropertiesMosaic"),
            EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE => Some("accountPropertiesEntityType"),
            _ => None,
        }
    }
}

impl From<u16> for EntityType {
    fn from(value: u16) -> Self {
        EntityType(value)
    }
}

impl From<EntityType> for u16 {
    fn from(entity_type: EntityType) -> Self {
        entity_type.0
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:04X})", name, self.0),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_names() {
        assert_eq!(
            EntityType::ACCOUNT_PROPERTIES_ADDRESS.name(),
            Some("accountPropertiesAddress")
        );
        assert_eq!(
            EntityType::ACCOUNT_PROPERTIES_MOSAIC.name(),
            Some("accountPropertiesMosaic")
        );
        assert_eq!(
            EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE.name(),
            Some("accountPropertiesEntityType")
        );
        assert_eq!(EntityType(0x1234).name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EntityType(0x1234).to_string(), "0x1234");
        assert_eq!(
            EntityType::ACCOUNT_PROPERTIES_MOSAIC.to_string(),
            "accountPropertiesMosaic (0x4250)"
        );
    }
}
