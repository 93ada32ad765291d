//! Node hashing for Merkle trees.

use sha2::Sha256;
use sha3::{Digest, Sha3_256};

use crate::crypto::Hash256;
use crate::limits::HASH256_SIZE;

/// Combines two child hashes into their parent hash.
pub trait NodeHasher {
    fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256;
}

/// SHA3-256 node hasher, used by Catapult block transaction trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256Hasher;

impl NodeHasher for Sha3_256Hasher {
    fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
        let mut hasher = Sha3_256::new();
        hasher.update(left);
        hasher.update(right);
        let hash = hasher.finalize();

        let mut out = [0u8; HASH256_SIZE];
        out.copy_from_slice(&hash);
        out
    }
}

/// SHA-256 node hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl NodeHasher for Sha256Hasher {
    fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        let hash = hasher.finalize();

        let mut out = [0u8; HASH256_SIZE];
        out.copy_from_slice(&hash);
        out
    }
}
