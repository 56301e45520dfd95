use itertools::Itertools;
use std::fmt;

use crate::domain::hash::HashAlgorithm;

/// Which side the sibling sits on relative to the node being combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// One step of an authentication path.
/// `Side::Left` means the order is `(sibling, current)`.
/// `Side::Right` means the order is `(current, sibling)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProofSegment {
    pub hash: String,
    pub side: Side,
}

impl ProofSegment {
    pub fn new(hash: impl Into<String>, side: Side) -> Self {
        Self {
            hash: hash.into(),
            side,
        }
    }

    pub fn left(hash: impl Into<String>) -> Self {
        Self::new(hash, Side::Left)
    }

    pub fn right(hash: impl Into<String>) -> Self {
        Self::new(hash, Side::Right)
    }
}

impl fmt::Display for ProofSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Left => write!(f, "L:{}", self.hash),
            Side::Right => write!(f, "R:{}", self.hash),
        }
    }
}

/// An authentication path, ordered from the leaf's sibling up to the root's children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MerkleProof {
    pub segments: Vec<ProofSegment>,
    pub algorithm: HashAlgorithm,
}

impl MerkleProof {
    pub fn new(segments: Vec<ProofSegment>) -> Self {
        Self::with_algorithm(segments, HashAlgorithm::default())
    }

    pub fn with_algorithm(segments: Vec<ProofSegment>, algorithm: HashAlgorithm) -> Self {
        Self {
            segments,
            algorithm,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sibling hashes only, in path order.
    pub fn proof_hashes(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.hash.as_str()).collect()
    }

    /// Compute the root by folding the segments over `leaf_hash`.
    pub fn root(&self, leaf_hash: &str) -> String {
        self.segments
            .iter()
            .fold(leaf_hash.to_string(), |current, segment| match segment.side {
                Side::Left => self.algorithm.hash_nodes(&segment.hash, &current),
                Side::Right => self.algorithm.hash_nodes(&current, &segment.hash),
            })
    }

    /// Verify a proof by comparing the recomputed root with `root`.
    pub fn verify(&self, root: &str, leaf_hash: &str) -> bool {
        self.root(leaf_hash) == root
    }
}

impl fmt::Display for MerkleProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.segments.iter().join(", "))
    }
}

/// Check `proof` for `leaf_hash` against `expected_root`. No tree is needed.
pub fn verify(leaf_hash: &str, proof: &MerkleProof, expected_root: &str) -> bool {
    proof.verify(expected_root, leaf_hash)
}

/// Like [`verify`], but replays the path with `algorithm` regardless of the
/// algorithm recorded on the proof.
pub fn verify_with(
    algorithm: HashAlgorithm,
    leaf_hash: &str,
    proof: &MerkleProof,
    expected_root: &str,
) -> bool {
    let replayed = MerkleProof::with_algorithm(proof.segments.clone(), algorithm);
    replayed.verify(expected_root, leaf_hash)
}
