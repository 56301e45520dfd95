pub mod hash;
pub mod node;
pub mod options;
pub mod proof;
pub mod tree;
