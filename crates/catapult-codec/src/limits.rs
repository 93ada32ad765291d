//! Fixed widths and ceilings of the Catapult wire format.

/// Size of a decoded (raw) account address in bytes.
pub const ADDRESS_DECODED_SIZE: usize = 25;

/// Size of a mosaic id on the wire.
pub const MOSAIC_ID_SIZE: usize = 8;

/// Size of an entity type on the wire.
pub const ENTITY_TYPE_SIZE: usize = 2;

/// Maximum number of modifications in one account properties transaction.
///
/// The count is carried in a single byte.
pub const MAX_PROPERTY_MODIFICATIONS: usize = u8::MAX as usize;

/// Size of a Merkle tree node hash.
pub const HASH256_SIZE: usize = 32;
