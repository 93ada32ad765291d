//! Transaction plugins.
//!
//! A plugin contributes the codecs and schemas of one transaction family.
//! Registration happens once at startup; the resulting registries are
//! read-only afterwards.

pub mod account_properties;

use lazy_static::lazy_static;

use crate::codec::CodecRegistry;
use crate::error::RegistryError;
use crate::schema::{ModelSchema, ModelSchemaBuilder};

pub use account_properties::AccountPropertiesPlugin;

/// Registration hooks of a transaction family.
pub trait CatapultPlugin {
    /// Adds the family's schemas.
    fn register_schema(&self, builder: &mut ModelSchemaBuilder) -> Result<(), RegistryError>;

    /// Adds the family's codecs.
    fn register_codecs(&self, registry: &mut CodecRegistry) -> Result<(), RegistryError>;
}

/// A boxed plugin.
pub type BoxedPlugin = Box<dyn CatapultPlugin + Send + Sync>;

/// Returns every built-in plugin.
pub fn builtin_plugins() -> Vec<BoxedPlugin> {
    vec![Box::new(AccountPropertiesPlugin)]
}

/// Applies plugins to fresh registries.
pub fn register_plugins(plugins: &[BoxedPlugin]) -> Result<(CodecRegistry, ModelSchema), RegistryError> {
    let mut codecs = CodecRegistry::new();
    let mut schema_builder = ModelSchemaBuilder::new();
    for plugin in plugins {
        plugin.register_codecs(&mut codecs)?;
        plugin.register_schema(&mut schema_builder)?;
    }
    Ok((codecs, schema_builder.build()))
}

/// Applies every built-in plugin to fresh registries.
pub fn register_all() -> Result<(CodecRegistry, ModelSchema), RegistryError> {
    register_plugins(&builtin_plugins())
}

lazy_static! {
    static ref DEFAULT_REGISTRIES: Result<(CodecRegistry, ModelSchema), RegistryError> = register_all();
}

/// Process-wide codec registry holding every built-in plugin.
pub fn default_codecs() -> Result<&'static CodecRegistry, RegistryError> {
    match &*DEFAULT_REGISTRIES {
        Ok((codecs, _)) => Ok(codecs),
        Err(err) => Err(err.clone()),
    }
}

/// Process-wide model schema holding every built-in plugin.
pub fn default_schema() -> Result<&'static ModelSchema, RegistryError> {
    match &*DEFAULT_REGISTRIES {
        Ok((_, schema)) => Ok(schema),
        Err(err) => Err(err.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityType;

    #[test]
    fn test_default_registries() {
        let codecs = default_codecs().unwrap();
        assert_eq!(codecs.len(), 3);
        assert!(codecs.contains(EntityType::ACCOUNT_PROPERTIES_ADDRESS));
        assert!(codecs.contains(EntityType::ACCOUNT_PROPERTIES_MOSAIC));
        assert!(codecs.contains(EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE));

        let schema = default_schema().unwrap();
        assert!(schema.contains("accountPropertiesAddress"));
        assert!(schema.unresolved_references().is_empty());
    }

    #[test]
    fn test_registering_plugin_twice_fails() {
        let plugins: Vec<BoxedPlugin> = vec![
            Box::new(AccountPropertiesPlugin),
            Box::new(AccountPropertiesPlugin),
        ];
        let result = register_plugins(&plugins);
        assert!(matches!(result, Err(RegistryError::DuplicateRegistration { .. })));
    }
}
