use super::HashMethod;
use sha2::{digest::FixedOutput, Digest, Sha256, Sha512_256};

pub struct Sha256Hex;
impl HashMethod for Sha256Hex {
    fn hash_leaf(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hex::encode(hasher.finalize_fixed())
    }

    fn hash_nodes(left: &str, right: &str) -> String {
        // Plain text concatenation, no delimiter
        let mut hasher = Sha256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        hex::encode(hasher.finalize_fixed())
    }
}

pub struct Sha512_256Hex;
impl HashMethod for Sha512_256Hex {
    fn hash_leaf(data: &[u8]) -> String {
        let mut hasher = Sha512_256::new();
        hasher.update(data);
        hex::encode(hasher.finalize_fixed())
    }

    fn hash_nodes(left: &str, right: &str) -> String {
        let mut hasher = Sha512_256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        hex::encode(hasher.finalize_fixed())
    }
}
