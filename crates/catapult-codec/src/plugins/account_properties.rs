//! Account properties plugin.
//!
//! Registers one codec per property family (address, mosaic, entity type)
//! and the schemas describing the transactions and the account state they
//! modify.

use crate::codec::{AddressPropertiesCodec, CodecRegistry, EntityTypePropertiesCodec, MosaicPropertiesCodec};
use crate::error::RegistryError;
use crate::model::EntityType;
use crate::plugins::CatapultPlugin;
use crate::schema::{schema, ModelSchemaBuilder, ModelType};

/// Schema of one modification entry.
pub const MODIFICATION_SCHEMA: &str = "accountProperties.modificationType";
/// Schema of an account's full property state.
pub const ACCOUNT_PROPERTIES_SCHEMA: &str = "accountProperties.accountProperties";
/// Schema of one property list within an account's state.
pub const ACCOUNT_PROPERTY_SCHEMA: &str = "accountProperties.accountProperty";

const TRANSACTION_TYPES: [EntityType; 3] = [
    EntityType::ACCOUNT_PROPERTIES_ADDRESS,
    EntityType::ACCOUNT_PROPERTIES_MOSAIC,
    EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE,
];

/// Plugin for the account properties transaction family.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountPropertiesPlugin;

impl CatapultPlugin for AccountPropertiesPlugin {
    fn register_schema(&self, builder: &mut ModelSchemaBuilder) -> Result<(), RegistryError> {
        for entity_type in TRANSACTION_TYPES {
            builder.add_transaction_support(
                entity_type,
                schema([
                    ("propertyType", ModelType::Uint64),
                    ("modifications", ModelType::array(MODIFICATION_SCHEMA)),
                ]),
            )?;
        }

        builder.add_schema(
            MODIFICATION_SCHEMA,
            schema([
                ("modificationType", ModelType::Uint64),
                ("value", ModelType::Binary),
            ]),
        )?;
        builder.add_schema(
            ACCOUNT_PROPERTIES_SCHEMA,
            schema([
                ("address", ModelType::Binary),
                ("properties", ModelType::array(ACCOUNT_PROPERTY_SCHEMA)),
            ]),
        )?;
        builder.add_schema(
            ACCOUNT_PROPERTY_SCHEMA,
            schema([
                ("propertyType", ModelType::Uint64),
                ("values", ModelType::Binary),
            ]),
        )
    }

    fn register_codecs(&self, registry: &mut CodecRegistry) -> Result<(), RegistryError> {
        registry.register(EntityType::ACCOUNT_PROPERTIES_ADDRESS, AddressPropertiesCodec::new())?;
        registry.register(EntityType::ACCOUNT_PROPERTIES_MOSAIC, MosaicPropertiesCodec::new())?;
        registry.register(
            EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE,
            EntityTypePropertiesCodec::new(),
        )
    }
}
