use rayon::prelude::*;

use crate::domain::hash::HashAlgorithm;
use crate::domain::node::{Node, NodeId};
use crate::domain::options::TreeOptions;
use crate::domain::proof::{MerkleProof, ProofSegment};
use crate::error::{MerkleError, Result};

pub mod builder;

use builder::{build_layers, BuiltTree};

/// Outcome of looking up the authentication path of a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofLookup {
    Path(MerkleProof),
    /// The leaf is the whole tree, so the path is empty.
    IsRoot,
    NotFound,
    /// No root is available: nothing appended, or appended since the last build.
    Unbuilt,
}

impl ProofLookup {
    /// Collapse into a proof, empty whenever there is no path.
    pub fn into_proof(self, algorithm: HashAlgorithm) -> MerkleProof {
        match self {
            ProofLookup::Path(proof) => proof,
            _ => MerkleProof::with_algorithm(Vec::new(), algorithm),
        }
    }

    pub fn into_result(self, leaf_hash: &str, algorithm: HashAlgorithm) -> Result<MerkleProof> {
        match self {
            ProofLookup::Path(proof) => Ok(proof),
            ProofLookup::IsRoot => Ok(MerkleProof::with_algorithm(Vec::new(), algorithm)),
            ProofLookup::NotFound => Err(MerkleError::LeafNotFound(leaf_hash.to_string())),
            ProofLookup::Unbuilt => Err(MerkleError::EmptyTree),
        }
    }
}

/// A binary hash tree over an ordered list of data blocks.
///
/// Blocks are hashed as they are appended; `build` assembles the tree.
/// Appending after a build drops the built tree until `build` runs again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MerkleTree {
    leaves: Vec<String>,
    built: Option<BuiltTree>,
    options: TreeOptions,
}

impl MerkleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            leaves: Vec::new(),
            built: None,
            options,
        }
    }

    /// Hash `blocks` as leaves and build the tree.
    pub fn from_blocks<B>(blocks: &[B]) -> Self
    where
        B: AsRef<[u8]> + Sync,
    {
        let mut tree = Self::new();
        tree.append_blocks(blocks);
        tree.build();
        tree
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.options.algorithm
    }

    /// Hash raw data the way this tree hashes its leaves.
    pub fn hash(&self, data: &[u8]) -> String {
        self.options.algorithm.hash_leaf(data)
    }

    /// Append one block and return its leaf hash.
    pub fn append_block(&mut self, block: impl AsRef<[u8]>) -> String {
        let hash = self.hash(block.as_ref());
        self.leaves.push(hash.clone());
        self.built = None;
        hash
    }

    pub fn append_blocks<B>(&mut self, blocks: &[B])
    where
        B: AsRef<[u8]> + Sync,
    {
        let algorithm = self.options.algorithm;
        let hashed: Vec<String> = blocks
            .par_iter()
            .map(|block| algorithm.hash_leaf(block.as_ref()))
            .collect();
        self.leaves.extend(hashed);
        self.built = None;
    }

    /// Rebuild the whole tree from the current leaves. No-op with no leaves.
    pub fn build(&mut self) {
        self.built = build_layers(&self.leaves, self.options.algorithm);
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// Leaf hashes in insertion order.
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    pub fn root_node(&self) -> Option<&Node> {
        self.built.as_ref().map(|built| &built.nodes[built.root.0])
    }

    pub fn root_hash(&self) -> Option<&str> {
        self.root_node().map(Node::hash)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.built.as_ref().and_then(|built| built.nodes.get(id.0))
    }

    /// Index of the first leaf equal to `leaf_hash`.
    pub fn get_index_by_hash(&self, leaf_hash: &str) -> Option<usize> {
        self.leaves.iter().position(|h| h == leaf_hash)
    }

    /// Authentication path of `leaf_hash`, empty when the leaf is missing or is the root.
    pub fn create_proof(&self, leaf_hash: &str) -> MerkleProof {
        self.lookup_proof(leaf_hash)
            .into_proof(self.options.algorithm)
    }

    /// Same as [`MerkleTree::create_proof`] for the hash of raw `data`.
    pub fn proof_for_block(&self, data: &[u8]) -> MerkleProof {
        self.create_proof(&self.hash(data))
    }

    /// Strict variant of [`MerkleTree::create_proof`].
    pub fn try_create_proof(&self, leaf_hash: &str) -> Result<MerkleProof> {
        self.lookup_proof(leaf_hash)
            .into_result(leaf_hash, self.options.algorithm)
    }

    pub fn lookup_proof(&self, leaf_hash: &str) -> ProofLookup {
        let Some(built) = self.built.as_ref() else {
            return ProofLookup::Unbuilt;
        };
        let Some(index) = self.get_index_by_hash(leaf_hash) else {
            return ProofLookup::NotFound;
        };

        // Leaves occupy the first arena slots in insertion order
        let leaf = NodeId(index);
        if leaf == built.root {
            return ProofLookup::IsRoot;
        }

        let mut segments = Vec::new();
        let mut child = leaf;
        let mut current = built.nodes[leaf.0].parent();

        while let Some(parent) = current {
            let Some((left, right)) = built.nodes[parent.0].children() else {
                break;
            };

            let child_hash = built.nodes[child.0].hash();
            if built.nodes[left.0].hash() == child_hash {
                segments.push(ProofSegment::right(built.nodes[right.0].hash()));
            } else {
                segments.push(ProofSegment::left(built.nodes[left.0].hash()));
            }

            child = parent;
            current = built.nodes[parent.0].parent();
        }

        ProofLookup::Path(MerkleProof::with_algorithm(
            segments,
            self.options.algorithm,
        ))
    }

    /// Check a proof against this tree's own root. False while unbuilt.
    pub fn verify_tree(&self, leaf_hash: &str, proof: &MerkleProof) -> bool {
        self.root_hash()
            .is_some_and(|root| proof.verify(root, leaf_hash))
    }
}
