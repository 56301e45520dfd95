#![deny(clippy::all)]
//! Binary hash tree over ordered data blocks, with authentication paths that
//! can be checked against a root hash without the tree.

mod domain;
mod error;

pub use domain::hash::{hash_sha256, HashAlgorithm, HashMethod};
pub use domain::node::{Node, NodeId};
pub use domain::options::TreeOptions;
pub use domain::proof::{verify, verify_with, MerkleProof, ProofSegment, Side};
pub use domain::tree::{MerkleTree, ProofLookup};
pub use error::{MerkleError, Result};

pub mod sha256 {
    pub use crate::domain::hash::sha256::{Sha256Hex, Sha512_256Hex};
}
