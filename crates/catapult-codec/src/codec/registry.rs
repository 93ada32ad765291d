//! Transaction codec registry.
//!
//! Maps an entity type to the codec that reads and writes its body. The
//! registry is populated once at startup and only read afterwards; sharing
//! it behind `&` or `Arc` is enough for concurrent decoding.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError, RegistryError};
use crate::model::{EntityType, Transaction};

/// A transaction body codec.
///
/// Implementations hold no state between calls; the only side effect is
/// cursor advancement.
pub trait TransactionCodec: Send + Sync {
    /// Reads one transaction body from the reader.
    fn deserialize(&self, reader: &mut Reader<'_>) -> Result<Transaction, DecodeError>;

    /// Writes the transaction body to the writer.
    fn serialize(&self, transaction: &Transaction, writer: &mut Writer) -> Result<(), EncodeError>;
}

/// Registry of codecs keyed by entity type.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: FxHashMap<EntityType, Box<dyn TransactionCodec>>,
}

impl CodecRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a codec to an entity type.
    ///
    /// Fails if the entity type already has a codec; the existing binding is
    /// left in place.
    pub fn register<C>(&mut self, entity_type: EntityType, codec: C) -> Result<(), RegistryError>
    where
        C: TransactionCodec + 'static,
    {
        if self.codecs.contains_key(&entity_type) {
            return Err(RegistryError::DuplicateRegistration { entity_type });
        }
        self.codecs.insert(entity_type, Box::new(codec));
        debug!(%entity_type, "registered transaction codec");
        Ok(())
    }

    /// Returns the codec bound to an entity type.
    pub fn lookup(&self, entity_type: EntityType) -> Result<&dyn TransactionCodec, RegistryError> {
        self.codecs
            .get(&entity_type)
            .map(|codec| codec.as_ref())
            .ok_or(RegistryError::UnknownEntityType { entity_type })
    }

    /// Returns true if a codec is bound to the entity type.
    pub fn contains(&self, entity_type: EntityType) -> bool {
        self.codecs.contains_key(&entity_type)
    }

    /// Returns the number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Returns true if no codec is registered.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Returns the registered entity types in ascending order.
    pub fn entity_types(&self) -> Vec<EntityType> {
        let mut types: Vec<_> = self.codecs.keys().copied().collect();
        types.sort_unstable();
        types
    }

    /// Decodes a complete transaction body.
    ///
    /// The whole input must be consumed.
    pub fn decode(&self, entity_type: EntityType, input: &[u8]) -> Result<Transaction, DecodeError> {
        let codec = self
            .lookup(entity_type)
            .map_err(|_| DecodeError::UnknownEntityType { entity_type })?;

        let mut reader = Reader::new(input);
        let transaction = codec.deserialize(&mut reader)?;
        if !reader.is_empty() {
            return Err(DecodeError::TrailingBytes {
                count: reader.remaining_len(),
            });
        }
        Ok(transaction)
    }

    /// Encodes a transaction body with the codec bound to its entity type.
    pub fn encode(&self, transaction: &Transaction) -> Result<Vec<u8>, EncodeError> {
        let entity_type = transaction.entity_type();
        let codec = self
            .lookup(entity_type)
            .map_err(|_| EncodeError::UnknownEntityType { entity_type })?;

        let mut writer = Writer::new();
        codec.serialize(transaction, &mut writer)?;
        Ok(writer.into_bytes())
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("entity_types", &self.entity_types())
            .finish()
    }
}
