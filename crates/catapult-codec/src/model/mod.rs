//! Data model types for Catapult transactions.
//!
//! - Entity type discriminators
//! - Account properties values and modifications
//! - The transaction record handed to and produced by codecs

pub mod account_properties;
pub mod entity_type;
pub mod transaction;

pub use account_properties::{
    AccountPropertiesTransaction, Address, ModificationType, MosaicId, PropertyModification,
    PropertyType,
};
pub use entity_type::EntityType;
pub use transaction::Transaction;
