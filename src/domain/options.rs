use crate::domain::hash::HashAlgorithm;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeOptions {
    pub algorithm: HashAlgorithm,
}

impl TreeOptions {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Select the digest by name, e.g. `"SHA-256"` or `"SHA-512/256"`.
    pub fn from_algorithm_name(name: &str) -> Result<Self> {
        Ok(Self {
            algorithm: name.parse()?,
        })
    }
}
