//! Flattened Merkle trees.
//!
//! All layers are stored bottom-to-top in one contiguous array. A layer
//! with an odd node count is padded with a copy of its last node, so layer
//! sizes are `evenify(n), evenify(n / 2), ..., 1`.

use std::marker::PhantomData;

use crate::crypto::{NodeHasher, Sha3_256Hasher};
use crate::limits::HASH256_SIZE;

/// A 256-bit hash.
pub type Hash256 = [u8; HASH256_SIZE];

/// A Merkle tree in flattened layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerkleTree {
    /// Number of leaf (transaction) hashes.
    pub number_of_transactions: usize,
    /// Node hashes of all layers, leaf layer first, root last.
    pub nodes: Vec<Hash256>,
}

impl MerkleTree {
    pub fn new(number_of_transactions: usize, nodes: Vec<Hash256>) -> Self {
        Self {
            number_of_transactions,
            nodes,
        }
    }

    /// Returns the root hash, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Hash256> {
        self.nodes.last()
    }
}

/// Builds a [`MerkleTree`] from leaf hashes.
#[derive(Debug, Clone)]
pub struct MerkleHashBuilder<H = Sha3_256Hasher> {
    leaves: Vec<Hash256>,
    _hasher: PhantomData<H>,
}

impl<H: NodeHasher> MerkleHashBuilder<H> {
    pub fn new() -> Self {
        Self {
            leaves: Vec::new(),
            _hasher: PhantomData,
        }
    }

    /// Appends a leaf hash.
    pub fn update(&mut self, leaf: Hash256) {
        self.leaves.push(leaf);
    }

    /// Hashes all layers and returns the flattened tree.
    pub fn build(self) -> MerkleTree {
        let number_of_transactions = self.leaves.len();
        let mut nodes = Vec::with_capacity(2 * number_of_transactions + 1);
        let mut layer = self.leaves;

        while let Some(&last) = layer.last() {
            if layer.len() == 1 {
                nodes.push(last);
                break;
            }
            if layer.len() % 2 == 1 {
                layer.push(last);
            }
            nodes.extend_from_slice(&layer);
            layer = layer
                .chunks_exact(2)
                .map(|pair| H::hash_pair(&pair[0], &pair[1]))
                .collect();
        }

        MerkleTree {
            number_of_transactions,
            nodes,
        }
    }
}

impl<H: NodeHasher> Default for MerkleHashBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: NodeHasher> FromIterator<Hash256> for MerkleHashBuilder<H> {
    fn from_iter<I: IntoIterator<Item = Hash256>>(iter: I) -> Self {
        Self {
            leaves: iter.into_iter().collect(),
            _hasher: PhantomData,
        }
    }
}
