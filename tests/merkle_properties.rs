use anyhow::{ensure, Context, Result};
use rust_merkle_proof::{
    hash_sha256, verify, HashAlgorithm, MerkleProof, MerkleTree, ProofSegment, TreeOptions,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn blocks(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("block-{}", i)).collect()
}

fn root_of(tree: &MerkleTree) -> Result<String> {
    tree.root_hash()
        .map(str::to_string)
        .context("tree has no root")
}

#[test]
fn build_is_deterministic() -> Result<()> {
    init_logger();
    let data = blocks(11);
    let first = MerkleTree::from_blocks(&data);
    let second = MerkleTree::from_blocks(&data);
    ensure!(root_of(&first)? == root_of(&second)?);
    Ok(())
}

#[test]
fn single_block_root_is_block_hash() -> Result<()> {
    let tree = MerkleTree::from_blocks(&["test"]);
    ensure!(root_of(&tree)? == hash_sha256(b"test"));

    let leaf = hash_sha256(b"test");
    let proof = tree.create_proof(&leaf);
    ensure!(proof.is_empty());
    ensure!(verify(&leaf, &proof, &root_of(&tree)?));
    Ok(())
}

#[test]
fn two_block_root() -> Result<()> {
    let tree = MerkleTree::from_blocks(&["hello", "my"]);
    let joined = format!("{}{}", hash_sha256(b"hello"), hash_sha256(b"my"));
    ensure!(root_of(&tree)? == hash_sha256(joined.as_bytes()));
    Ok(())
}

#[test]
fn odd_layer_pairs_last_node_with_itself() -> Result<()> {
    let tree = MerkleTree::from_blocks(&["a", "b", "c"]);
    let (a, b, c) = (hash_sha256(b"a"), hash_sha256(b"b"), hash_sha256(b"c"));

    let left = hash_sha256(format!("{}{}", a, b).as_bytes());
    let right = hash_sha256(format!("{}{}", c, c).as_bytes());
    let root = hash_sha256(format!("{}{}", left, right).as_bytes());
    ensure!(root_of(&tree)? == root);

    // The duplicated leaf is its own sibling
    let proof = tree.create_proof(&c);
    ensure!(proof.segments[0] == ProofSegment::right(c.clone()));
    ensure!(proof.segments[1] == ProofSegment::left(left));
    Ok(())
}

#[test]
fn proof_length_is_tree_depth() -> Result<()> {
    for k in 1..=6u32 {
        let data = blocks(1 << k);
        let tree = MerkleTree::from_blocks(&data);
        for leaf in tree.leaves() {
            let proof = tree.create_proof(leaf);
            ensure!(
                proof.len() == k as usize,
                "expected {} segments for {} leaves, got {}",
                k,
                data.len(),
                proof.len()
            );
        }
    }
    Ok(())
}

#[test]
fn every_leaf_round_trips() -> Result<()> {
    init_logger();
    for count in 1..=40 {
        let tree = MerkleTree::from_blocks(&blocks(count));
        let root = root_of(&tree)?;
        for leaf in tree.leaves() {
            let proof = tree.create_proof(leaf);
            ensure!(
                verify(leaf, &proof, &root),
                "leaf {} of {} failed to verify",
                leaf,
                count
            );
        }
    }
    Ok(())
}

#[test]
fn proof_verifies_against_identical_tree() -> Result<()> {
    let data = ["hello", "my", "name", "is", "tyler"];
    let first = MerkleTree::from_blocks(&data);
    let second = MerkleTree::from_blocks(&data);

    let leaf = hash_sha256(b"name");
    let proof = first.create_proof(&leaf);
    ensure!(second.verify_tree(&leaf, &proof));
    Ok(())
}

#[test]
fn proof_rejected_by_diverging_tree() -> Result<()> {
    let first = MerkleTree::from_blocks(&["hello", "my", "name", "is", "tyler"]);
    let second = MerkleTree::from_blocks(&["hello", "my", "name", "is", "tyler", "faulkner"]);

    let leaf = hash_sha256(b"name");
    let proof = first.create_proof(&leaf);
    ensure!(first.verify_tree(&leaf, &proof));
    ensure!(!second.verify_tree(&leaf, &proof));
    Ok(())
}

#[test]
fn single_bit_flip_is_detected() -> Result<()> {
    let tree = MerkleTree::from_blocks(&blocks(9));
    let root = root_of(&tree)?;
    let leaf = tree.leaves()[4].clone();
    let proof = tree.create_proof(&leaf);
    ensure!(verify(&leaf, &proof, &root));

    for (i, segment) in proof.segments.iter().enumerate() {
        let bytes = hex::decode(&segment.hash).context("segment is not hex")?;
        for bit in 0..bytes.len() * 8 {
            let mut flipped = bytes.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);

            let mut tampered = proof.segments.clone();
            tampered[i].hash = hex::encode(flipped);
            let tampered = MerkleProof::with_algorithm(tampered, proof.algorithm);

            ensure!(
                !verify(&leaf, &tampered, &root),
                "flipping bit {} of segment {} went unnoticed",
                bit,
                i
            );
        }
    }
    Ok(())
}

#[test]
fn rebuild_after_append_matches_fresh_tree() -> Result<()> {
    let mut tree = MerkleTree::new();
    tree.append_blocks(&blocks(4));
    tree.build();
    let before = root_of(&tree)?;

    tree.append_block("block-4");
    ensure!(tree.root_hash().is_none());

    tree.build();
    let after = root_of(&tree)?;
    ensure!(before != after);
    ensure!(after == root_of(&MerkleTree::from_blocks(&blocks(5)))?);
    Ok(())
}

#[test]
fn tree_configured_by_algorithm_name() -> Result<()> {
    let options = TreeOptions::from_algorithm_name("SHA-512/256")?;
    let mut tree = MerkleTree::with_options(options);
    tree.append_blocks(&blocks(6));
    tree.build();

    let leaf = HashAlgorithm::Sha512_256.hash_leaf(b"block-2");
    let proof = tree.create_proof(&leaf);
    ensure!(proof.len() == 3);
    ensure!(verify(&leaf, &proof, &root_of(&tree)?));

    ensure!(TreeOptions::from_algorithm_name("whirlpool").is_err());
    Ok(())
}
