//! Merkle audit proofs.
//!
//! An audit path lists, from the leaf layer up, the sibling hash needed at
//! each layer to recompute the parent. Combining a leaf with every entry in
//! order, on the side given by the entry's position, yields the root.

use serde::Serialize;
use tracing::trace;

use crate::crypto::{Hash256, MerkleTree, NodeHasher};
use crate::error::ProofError;

/// Side on which a sibling sits relative to the node being hashed upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NodePosition {
    Left = 1,
    Right = 2,
}

/// Sibling location within the flattened node array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibling {
    pub position: NodePosition,
    pub index: usize,
}

/// One step of an audit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditPathEntry {
    pub hash: Hash256,
    pub position: NodePosition,
}

/// Rounds an odd node count up to the next even number.
#[inline]
pub const fn evenify(n: usize) -> usize {
    n + (n & 1)
}

/// Returns the index of the first leaf equal to `hash`.
///
/// Only the (padded) leaf layer is searched, so internal nodes never match.
/// The search never reaches past the end of `nodes`.
pub fn index_of_leaf_with_hash(hash: &Hash256, tree: &MerkleTree) -> Option<usize> {
    let leaf_count = tree.number_of_transactions.min(tree.nodes.len());
    tree.nodes
        .iter()
        .take(evenify(leaf_count))
        .position(|node| node == hash)
}

/// Returns the sibling of a node.
///
/// Left children sit at even indexes, right children at odd indexes.
#[inline]
pub const fn sibling_of(index: usize) -> Sibling {
    if index % 2 == 1 {
        Sibling {
            position: NodePosition::Left,
            index: index - 1,
        }
    } else {
        Sibling {
            position: NodePosition::Right,
            index: index + 1,
        }
    }
}

/// Builds the audit path proving `hash` is a leaf of `tree`.
///
/// Entries are ordered root-ward: the leaf's sibling first. A single-leaf
/// tree yields an empty path.
pub fn build_audit_path(hash: &Hash256, tree: &MerkleTree) -> Result<Vec<AuditPathEntry>, ProofError> {
    // Every leaf occupies a node, so a larger count cannot describe this array
    if tree.number_of_transactions == 0 || tree.number_of_transactions > tree.nodes.len() {
        return Err(ProofError::InvalidTree);
    }

    let mut layer_subindex = index_of_leaf_with_hash(hash, tree).ok_or(ProofError::HashNotFound)?;
    let mut layer_start = 0;
    let mut layer_count = tree.number_of_transactions;

    let mut audit_path = Vec::new();
    while layer_count != 1 {
        layer_count = evenify(layer_count);

        let sibling = sibling_of(layer_start + layer_subindex);
        let sibling_hash = tree.nodes.get(sibling.index).ok_or(ProofError::NodeOutOfBounds {
            index: sibling.index,
            len: tree.nodes.len(),
        })?;
        trace!(
            layer_start,
            layer_count,
            sibling = sibling.index,
            position = ?sibling.position,
            "audit path step"
        );
        audit_path.push(AuditPathEntry {
            hash: *sibling_hash,
            position: sibling.position,
        });

        layer_start += layer_count;
        layer_count /= 2;
        layer_subindex /= 2;
    }

    Ok(audit_path)
}

/// Recomputes the root from a leaf and its audit path and compares it to `root`.
pub fn verify_audit_path<H: NodeHasher>(leaf: &Hash256, path: &[AuditPathEntry], root: &Hash256) -> bool {
    let computed = path.iter().fold(*leaf, |current, entry| match entry.position {
        NodePosition::Left => H::hash_pair(&entry.hash, &current),
        NodePosition::Right => H::hash_pair(&current, &entry.hash),
    });
    computed == *root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{MerkleHashBuilder, Sha256Hasher, Sha3_256Hasher};
    use proptest::prelude::*;

    fn leaf(n: u8) -> Hash256 {
        [n; 32]
    }

    fn build(count: u8) -> MerkleTree {
        (1..=count).map(leaf).collect::<MerkleHashBuilder>().build()
    }

    #[test]
    fn test_evenify() {
        assert_eq!(evenify(0), 0);
        assert_eq!(evenify(1), 2);
        assert_eq!(evenify(2), 2);
        assert_eq!(evenify(7), 8);
        assert_eq!(evenify(100), 100);
    }

    #[test]
    fn test_sibling_of() {
        assert_eq!(
            sibling_of(0),
            Sibling {
                position: NodePosition::Right,
                index: 1
            }
        );
        assert_eq!(
            sibling_of(1),
            Sibling {
                position: NodePosition::Left,
                index: 0
            }
        );
        assert_eq!(
            sibling_of(6),
            Sibling {
                position: NodePosition::Right,
                index: 7
            }
        );
        assert_eq!(
            sibling_of(9),
            Sibling {
                position: NodePosition::Left,
                index: 8
            }
        );
    }

    #[test]
    fn test_index_of_leaf_only_searches_leaves() {
        let tree = build(4);
        assert_eq!(index_of_leaf_with_hash(&leaf(3), &tree), Some(2));

        // Parent and root hashes are present in nodes but are not leaves
        assert_eq!(index_of_leaf_with_hash(&tree.nodes[4], &tree), None);
        assert_eq!(index_of_leaf_with_hash(&tree.nodes[6], &tree), None);
    }

    #[test]
    fn test_index_of_leaf_includes_padding() {
        let tree = build(3);
        assert_eq!(index_of_leaf_with_hash(&leaf(3), &tree), Some(2));
    }

    #[test]
    fn test_empty_tree_is_invalid() {
        let tree = MerkleTree::new(0, vec![]);
        assert_eq!(build_audit_path(&leaf(1), &tree), Err(ProofError::InvalidTree));

        // Queried hash present in nodes
        let tree = MerkleTree::new(0, vec![leaf(1), leaf(2)]);
        assert_eq!(build_audit_path(&leaf(1), &tree), Err(ProofError::InvalidTree));
    }

    #[test]
    fn test_leaf_count_exceeding_nodes_is_invalid() {
        let tree = MerkleTree::new(usize::MAX, vec![leaf(1)]);
        assert_eq!(build_audit_path(&leaf(1), &tree), Err(ProofError::InvalidTree));
        assert_eq!(index_of_leaf_with_hash(&leaf(1), &tree), Some(0));

        let tree = MerkleTree::new(5, vec![leaf(1), leaf(2), leaf(3), leaf(4)]);
        assert_eq!(build_audit_path(&leaf(4), &tree), Err(ProofError::InvalidTree));
    }

    #[test]
    fn test_hash_not_found() {
        let tree = build(4);
        assert_eq!(build_audit_path(&leaf(9), &tree), Err(ProofError::HashNotFound));
        assert_eq!(build_audit_path(&tree.nodes[4], &tree), Err(ProofError::HashNotFound));
    }

    #[test]
    fn test_single_leaf_has_empty_path() {
        let tree = build(1);
        let path = build_audit_path(&leaf(1), &tree).unwrap();
        assert!(path.is_empty());
        assert!(verify_audit_path::<Sha3_256Hasher>(&leaf(1), &path, tree.root().unwrap()));
    }

    #[test]
    fn test_four_leaf_tree() {
        let tree = build(4);

        let path = build_audit_path(&leaf(1), &tree).unwrap();
        assert_eq!(
            path,
            vec![
                AuditPathEntry {
                    hash: leaf(2),
                    position: NodePosition::Right
                },
                AuditPathEntry {
                    hash: tree.nodes[5],
                    position: NodePosition::Right
                },
            ]
        );

        let path = build_audit_path(&leaf(3), &tree).unwrap();
        assert_eq!(
            path,
            vec![
                AuditPathEntry {
                    hash: leaf(4),
                    position: NodePosition::Right
                },
                AuditPathEntry {
                    hash: tree.nodes[4],
                    position: NodePosition::Left
                },
            ]
        );

        let path = build_audit_path(&leaf(2), &tree).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].position, NodePosition::Left);
        assert_eq!(path[1].position, NodePosition::Right);

        for n in 1..=4 {
            let path = build_audit_path(&leaf(n), &tree).unwrap();
            assert_eq!(path.len(), 2);
            assert!(verify_audit_path::<Sha3_256Hasher>(&leaf(n), &path, tree.root().unwrap()));
        }
    }

    #[test]
    fn test_padded_leaf_pairs_with_itself() {
        let tree = build(5);
        let path = build_audit_path(&leaf(5), &tree).unwrap();

        assert_eq!(
            path[0],
            AuditPathEntry {
                hash: leaf(5),
                position: NodePosition::Right
            }
        );
        assert!(verify_audit_path::<Sha3_256Hasher>(&leaf(5), &path, tree.root().unwrap()));
    }

    #[test]
    fn test_truncated_nodes() {
        let mut tree = build(4);
        tree.nodes.truncate(5);
        assert_eq!(
            build_audit_path(&leaf(1), &tree),
            Err(ProofError::NodeOutOfBounds { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_tampered_path_fails_verification() {
        let tree = build(6);
        let mut path = build_audit_path(&leaf(2), &tree).unwrap();
        let root = *tree.root().unwrap();
        assert!(verify_audit_path::<Sha3_256Hasher>(&leaf(2), &path, &root));
        assert!(!verify_audit_path::<Sha256Hasher>(&leaf(2), &path, &root));

        path[1].position = match path[1].position {
            NodePosition::Left => NodePosition::Right,
            NodePosition::Right => NodePosition::Left,
        };
        assert!(!verify_audit_path::<Sha3_256Hasher>(&leaf(2), &path, &root));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = AuditPathEntry {
            hash: leaf(0xAB),
            position: NodePosition::Left,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["position"], "left");
        assert_eq!(json["hash"].as_array().unwrap().len(), 32);
        assert_eq!(NodePosition::Right as u8, 2);
    }

    proptest! {
        #[test]
        fn zero_transactions_is_invalid_for_any_nodes(
            nodes in prop::collection::vec(any::<[u8; 32]>(), 0..16),
            pick in any::<prop::sample::Index>()
        ) {
            let query = if nodes.is_empty() { leaf(1) } else { nodes[pick.index(nodes.len())] };
            let tree = MerkleTree::new(0, nodes);
            prop_assert_eq!(build_audit_path(&query, &tree), Err(ProofError::InvalidTree));
        }

        #[test]
        fn every_leaf_proves_inclusion(
            leaves in prop::collection::hash_set(any::<[u8; 32]>(), 1..64)
        ) {
            let leaves: Vec<Hash256> = leaves.into_iter().collect();
            let tree = leaves.iter().copied().collect::<MerkleHashBuilder>().build();
            let root = *tree.root().unwrap();

            let mut expected_depth = 0;
            let mut layer = leaves.len();
            while layer != 1 {
                layer = evenify(layer) / 2;
                expected_depth += 1;
            }

            for leaf in &leaves {
                let path = build_audit_path(leaf, &tree).unwrap();
                prop_assert_eq!(path.len(), expected_depth);
                prop_assert!(verify_audit_path::<Sha3_256Hasher>(leaf, &path, &root));
            }
        }
    }
}
