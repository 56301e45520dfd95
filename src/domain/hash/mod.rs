use std::fmt;
use std::str::FromStr;

use crate::error::MerkleError;

pub mod sha256;

use sha256::{Sha256Hex, Sha512_256Hex};

pub trait HashMethod {
    /// Hash a leaf's raw data into a full-width lowercase hex digest.
    fn hash_leaf(data: &[u8]) -> String;

    /// Hash two hex digests concatenated as text, left first.
    fn hash_nodes(left: &str, right: &str) -> String;
}

/// Hash `data` with SHA-256 and render it as 64 lowercase hex characters.
pub fn hash_sha256(data: &[u8]) -> String {
    Sha256Hex::hash_leaf(data)
}

/// The 256-bit digests a tree can be built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512_256,
}

impl HashAlgorithm {
    pub fn hash_leaf(&self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha256 => Sha256Hex::hash_leaf(data),
            HashAlgorithm::Sha512_256 => Sha512_256Hex::hash_leaf(data),
        }
    }

    pub fn hash_nodes(&self, left: &str, right: &str) -> String {
        match self {
            HashAlgorithm::Sha256 => Sha256Hex::hash_nodes(left, right),
            HashAlgorithm::Sha512_256 => Sha512_256Hex::hash_nodes(left, right),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = MerkleError;

    /// Accepts `SHA-256`, `sha256`, `SHA-512/256`, `sha512_256` and similar
    /// spellings; case and `-`, `_`, `/` separators are ignored.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '/'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sha256" | "sha2256" => Ok(HashAlgorithm::Sha256),
            "sha512256" | "sha2512256" => Ok(HashAlgorithm::Sha512_256),
            _ => Err(MerkleError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => f.write_str("SHA-256"),
            HashAlgorithm::Sha512_256 => f.write_str("SHA-512/256"),
        }
    }
}
