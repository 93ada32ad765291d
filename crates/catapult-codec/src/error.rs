//! Error types for codec registration, binary encoding/decoding and Merkle proofs.

use thiserror::Error;

use crate::model::EntityType;

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("no codec registered for entity type {entity_type}")]
    UnknownEntityType { entity_type: EntityType },

    #[error("{count} trailing bytes after transaction body")]
    TrailingBytes { count: usize },
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("no codec registered for entity type {entity_type}")]
    UnknownEntityType { entity_type: EntityType },

    #[error("codec for {expected} cannot serialize a {found} transaction")]
    TransactionKindMismatch {
        expected: EntityType,
        found: EntityType,
    },
}

/// Error while populating the codec or schema registries.
///
/// These are startup errors: initialization must abort instead of
/// overwriting an existing binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("codec for entity type {entity_type} is already registered")]
    DuplicateRegistration { entity_type: EntityType },

    #[error("schema {name:?} is already registered")]
    DuplicateSchema { name: String },

    #[error("no codec registered for entity type {entity_type}")]
    UnknownEntityType { entity_type: EntityType },

    #[error("entity type {entity_type} has no canonical schema name")]
    UnnamedEntityType { entity_type: EntityType },
}

/// Error while building a Merkle audit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("merkle tree has no transactions")]
    InvalidTree,

    #[error("hash not found in merkle tree leaves")]
    HashNotFound,

    #[error("merkle node index {index} out of bounds (nodes: {len})")]
    NodeOutOfBounds { index: usize, len: usize },
}
