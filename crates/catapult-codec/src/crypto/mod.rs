//! Merkle tree construction and audit proofs.

pub mod hasher;
pub mod merkle_audit_proof;
pub mod merkle_tree;

pub use hasher::{NodeHasher, Sha256Hasher, Sha3_256Hasher};
pub use merkle_audit_proof::{
    build_audit_path, evenify, index_of_leaf_with_hash, sibling_of, verify_audit_path,
    AuditPathEntry, NodePosition, Sibling,
};
pub use merkle_tree::{Hash256, MerkleHashBuilder, MerkleTree};
