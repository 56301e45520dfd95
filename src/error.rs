//! Error types for the hash tree

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// No root exists: nothing was appended, or blocks were appended since the last build
    #[error("Merkle root not generated")]
    EmptyTree,

    #[error("Hash not found in the Merkle tree: {0}")]
    LeafNotFound(String),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, MerkleError>;
