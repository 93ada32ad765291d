//! Account properties transactions.
//!
//! An account properties transaction adds or removes entries from one of an
//! account's allow/block lists. The list family (address, mosaic or entity
//! type) is fixed by the transaction's entity type, so every modification
//! value in a transaction has the same shape.

use crate::limits::ADDRESS_DECODED_SIZE;

/// A decoded (raw) account address.
pub type Address = [u8; ADDRESS_DECODED_SIZE];

/// Property family and allow/block flavor of an account properties transaction.
///
/// Allow variants use the base value, block variants set the high bit.
/// Values outside the known families are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyType(pub u8);

impl PropertyType {
    /// Address property family.
    pub const ADDRESS: u8 = 0x01;
    /// Mosaic property family.
    pub const MOSAIC: u8 = 0x02;
    /// Entity type property family.
    pub const ENTITY_TYPE: u8 = 0x04;
    /// Offset added to a family base value to form its block variant.
    pub const BLOCK_OFFSET: u8 = 0x80;

    /// Allow-list variant of the given family.
    pub const fn allow(base: u8) -> Self {
        PropertyType(base & !Self::BLOCK_OFFSET)
    }

    /// Block-list variant of the given family.
    pub const fn block(base: u8) -> Self {
        PropertyType(base | Self::BLOCK_OFFSET)
    }

    /// Returns true for block-list variants.
    pub const fn is_block(self) -> bool {
        self.0 & Self::BLOCK_OFFSET != 0
    }

    /// Returns the family base value with the block flag cleared.
    pub const fn base(self) -> u8 {
        self.0 & !Self::BLOCK_OFFSET
    }
}

impl From<u8> for PropertyType {
    fn from(value: u8) -> Self {
        PropertyType(value)
    }
}

/// Whether a modification adds or removes a list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModificationType(pub u8);

impl ModificationType {
    pub const ADD: ModificationType = ModificationType(0x00);
    pub const DEL: ModificationType = ModificationType(0x01);
}

impl From<u8> for ModificationType {
    fn from(value: u8) -> Self {
        ModificationType(value)
    }
}

/// A 64-bit mosaic identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MosaicId(pub u64);

impl MosaicId {
    /// Builds an id from its low and high 32-bit words.
    pub const fn from_parts(low: u32, high: u32) -> Self {
        MosaicId(((high as u64) << 32) | low as u64)
    }

    /// Splits the id into `[low, high]` 32-bit words.
    pub const fn to_parts(self) -> [u32; 2] {
        [self.0 as u32, (self.0 >> 32) as u32]
    }
}

/// One entry of a transaction's modification list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyModification<V> {
    pub modification_type: ModificationType,
    pub value: V,
}

impl<V> PropertyModification<V> {
    pub fn new(modification_type: ModificationType, value: V) -> Self {
        Self {
            modification_type,
            value,
        }
    }
}

/// Account properties transaction body.
///
/// Modification order is preserved exactly on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPropertiesTransaction<V> {
    pub property_type: PropertyType,
    pub modifications: Vec<PropertyModification<V>>,
}

impl<V> AccountPropertiesTransaction<V> {
    /// Creates a transaction with no modifications.
    pub fn new(property_type: PropertyType) -> Self {
        Self {
            property_type,
            modifications: Vec::new(),
        }
    }

    /// Appends a modification.
    pub fn with_modification(mut self, modification_type: ModificationType, value: V) -> Self {
        self.modifications
            .push(PropertyModification::new(modification_type, value));
        self
    }
}
