//! Catapult binary protocol core.
//!
//! This crate converts between Catapult wire bytes and transaction records,
//! and builds Merkle audit proofs showing a transaction is part of a block.
//!
//! # Quick Start
//!
//! ```rust
//! use catapult_codec::{default_codecs, EntityType, Transaction};
//! use catapult_codec::model::{AccountPropertiesTransaction, ModificationType, MosaicId, PropertyType};
//!
//! let codecs = default_codecs().unwrap();
//!
//! let transaction: Transaction = AccountPropertiesTransaction::new(PropertyType(PropertyType::MOSAIC))
//!     .with_modification(ModificationType::ADD, MosaicId(0x92B2_8340_066C_26F2))
//!     .into();
//!
//! let bytes = codecs.encode(&transaction).unwrap();
//! assert_eq!(bytes[..3], [0x02, 0x01, 0x00]);
//!
//! let decoded = codecs.decode(EntityType::ACCOUNT_PROPERTIES_MOSAIC, &bytes).unwrap();
//! assert_eq!(decoded, transaction);
//! ```
//!
//! ```rust
//! use catapult_codec::crypto::{build_audit_path, verify_audit_path, MerkleHashBuilder, Sha3_256Hasher};
//!
//! let leaves = [[1u8; 32], [2u8; 32], [3u8; 32]];
//! let tree = leaves.iter().copied().collect::<MerkleHashBuilder>().build();
//!
//! let path = build_audit_path(&leaves[2], &tree).unwrap();
//! assert!(verify_audit_path::<Sha3_256Hasher>(&leaves[2], &path, tree.root().unwrap()));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Transaction records and discriminators
//! - [`codec`]: Byte cursor, codec registry and account properties codecs
//! - [`schema`]: JSON shape descriptors for external validators
//! - [`plugins`]: Registration of transaction families
//! - [`crypto`]: Merkle trees and audit proofs
//! - [`error`]: Error types
//! - [`limits`]: Wire format widths and ceilings

pub mod codec;
pub mod crypto;
pub mod error;
pub mod limits;
pub mod model;
pub mod plugins;
pub mod schema;

// Re-export commonly used types at crate root
pub use codec::{CodecRegistry, Reader, TransactionCodec, Writer};
pub use crypto::{build_audit_path, evenify, AuditPathEntry, MerkleTree, NodePosition};
pub use error::{DecodeError, EncodeError, ProofError, RegistryError};
pub use model::{EntityType, Transaction};
pub use plugins::{default_codecs, default_schema, register_all, CatapultPlugin};
pub use schema::{ModelSchema, ModelSchemaBuilder, ModelType};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
