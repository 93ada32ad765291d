//! Model schema registry.
//!
//! Describes the JSON shape of transactions and their nested objects for
//! external validators and documentation generators. Schemas carry no
//! binary layout knowledge; field presence and count are checked by the
//! consumers of a built [`ModelSchema`].

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::RegistryError;
use crate::model::EntityType;

/// Name of the base schema every transaction schema extends.
pub const TRANSACTION_SCHEMA: &str = "transaction";

/// Type tag of one schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModelType {
    Uint64,
    Binary,
    /// Variable-length sequence of objects of another schema.
    #[serde(rename_all = "camelCase")]
    Array { schema_name: String },
}

impl ModelType {
    pub fn array(schema_name: impl Into<String>) -> Self {
        ModelType::Array {
            schema_name: schema_name.into(),
        }
    }

    /// Returns the referenced schema name for array types.
    pub fn schema_name(&self) -> Option<&str> {
        match self {
            ModelType::Array { schema_name } => Some(schema_name.as_str()),
            _ => None,
        }
    }
}

/// Field descriptors of one schema, keyed by field name.
pub type Schema = BTreeMap<String, ModelType>;

/// Builds a schema from `(field, type)` pairs.
pub fn schema<'a>(fields: impl IntoIterator<Item = (&'a str, ModelType)>) -> Schema {
    fields
        .into_iter()
        .map(|(name, model_type)| (name.to_string(), model_type))
        .collect()
}

/// Immutable set of named schemas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelSchema {
    schemas: BTreeMap<String, Schema>,
}

impl ModelSchema {
    /// Returns the schema registered under a name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Returns true if a schema is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if there are no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterates schema names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Returns composite fields that reference a schema which is not registered.
    ///
    /// Each entry is `(schema, field, missing_schema)`.
    pub fn unresolved_references(&self) -> Vec<(&str, &str, &str)> {
        let mut unresolved = Vec::new();
        for (schema_name, fields) in &self.schemas {
            for (field_name, model_type) in fields {
                if let Some(target) = model_type.schema_name() {
                    if !self.schemas.contains_key(target) {
                        unresolved.push((schema_name.as_str(), field_name.as_str(), target));
                    }
                }
            }
        }
        unresolved
    }
}

/// Collects schemas during startup.
#[derive(Debug, Clone)]
pub struct ModelSchemaBuilder {
    schemas: BTreeMap<String, Schema>,
}

impl ModelSchemaBuilder {
    /// Creates a builder holding the base schemas.
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();
        schemas.insert(
            TRANSACTION_SCHEMA.to_string(),
            schema([
                ("signature", ModelType::Binary),
                ("signer", ModelType::Binary),
                ("version", ModelType::Uint64),
                ("type", ModelType::Uint64),
                ("fee", ModelType::Uint64),
                ("deadline", ModelType::Uint64),
            ]),
        );
        schemas.insert(
            "merkleProofInfo".to_string(),
            schema([("payload", ModelType::array("merkleProofInfoPathNode"))]),
        );
        schemas.insert(
            "merkleProofInfoPathNode".to_string(),
            schema([("hash", ModelType::Binary), ("position", ModelType::Uint64)]),
        );
        Self { schemas }
    }

    /// Registers a named schema.
    pub fn add_schema(&mut self, name: &str, fields: Schema) -> Result<(), RegistryError> {
        if self.schemas.contains_key(name) {
            return Err(RegistryError::DuplicateSchema {
                name: name.to_string(),
            });
        }
        debug!(schema = name, fields = fields.len(), "registered schema");
        self.schemas.insert(name.to_string(), fields);
        Ok(())
    }

    /// Registers the schema of a transaction kind.
    ///
    /// The schema is named after the entity type and extends the base
    /// transaction schema with the given fields.
    pub fn add_transaction_support(
        &mut self,
        entity_type: EntityType,
        fields: Schema,
    ) -> Result<(), RegistryError> {
        let name = entity_type
            .name()
            .ok_or(RegistryError::UnnamedEntityType { entity_type })?;

        let mut merged = self
            .schemas
            .get(TRANSACTION_SCHEMA)
            .cloned()
            .unwrap_or_default();
        merged.extend(fields);
        self.add_schema(name, merged)
    }

    /// Freezes the collected schemas.
    pub fn build(self) -> ModelSchema {
        ModelSchema {
            schemas: self.schemas,
        }
    }
}

impl Default for ModelSchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_schemas() {
        let model_schema = ModelSchemaBuilder::new().build();

        assert_eq!(model_schema.len(), 3);
        assert_eq!(model_schema.get(TRANSACTION_SCHEMA).unwrap().len(), 6);
        assert!(model_schema.contains("merkleProofInfo"));
        assert!(model_schema.unresolved_references().is_empty());
    }

    #[test]
    fn test_duplicate_schema() {
        let mut builder = ModelSchemaBuilder::new();
        builder
            .add_schema("mosaicDefinition", schema([("id", ModelType::Uint64)]))
            .unwrap();

        let result = builder.add_schema("mosaicDefinition", schema([("supply", ModelType::Uint64)]));
        assert_eq!(
            result,
            Err(RegistryError::DuplicateSchema {
                name: "mosaicDefinition".to_string()
            })
        );

        let model_schema = builder.build();
        assert!(model_schema.get("mosaicDefinition").unwrap().contains_key("id"));
    }

    #[test]
    fn test_transaction_support_merges_base_fields() {
        let mut builder = ModelSchemaBuilder::new();
        builder
            .add_transaction_support(
                EntityType::ACCOUNT_PROPERTIES_MOSAIC,
                schema([("propertyType", ModelType::Uint64)]),
            )
            .unwrap();

        let model_schema = builder.build();
        let transaction = model_schema.get(TRANSACTION_SCHEMA).unwrap();
        let mosaic = model_schema.get("accountPropertiesMosaic").unwrap();

        assert_eq!(mosaic.len(), transaction.len() + 1);
        assert_eq!(mosaic.get("fee"), Some(&ModelType::Uint64));
        assert_eq!(mosaic.get("propertyType"), Some(&ModelType::Uint64));
    }

    #[test]
    fn test_transaction_support_requires_name() {
        let mut builder = ModelSchemaBuilder::new();
        let result = builder.add_transaction_support(EntityType(0x9999), Schema::new());
        assert_eq!(
            result,
            Err(RegistryError::UnnamedEntityType {
                entity_type: EntityType(0x9999)
            })
        );
    }

    #[test]
    fn test_unresolved_references() {
        let mut builder = ModelSchemaBuilder::new();
        builder
            .add_schema("holder", schema([("items", ModelType::array("missing"))]))
            .unwrap();

        let model_schema = builder.build();
        assert_eq!(
            model_schema.unresolved_references(),
            vec![("holder", "items", "missing")]
        );
    }

    #[test]
    fn test_descriptor_json_shape() {
        let json = serde_json::to_value(ModelType::array("accountProperties.accountProperty")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "array", "schemaName": "accountProperties.accountProperty" })
        );

        let json = serde_json::to_value(ModelType::Uint64).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "uint64" }));

        let model_schema = ModelSchemaBuilder::new().build();
        let json = serde_json::to_value(&model_schema).unwrap();
        assert_eq!(json["merkleProofInfoPathNode"]["hash"], serde_json::json!({ "type": "binary" }));
    }
}
