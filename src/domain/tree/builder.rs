use log::{debug, info};
use std::time::Instant;

use crate::domain::hash::HashAlgorithm;
use crate::domain::node::{Node, NodeId};

/// A fully built arena together with the handle of its root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltTree {
    pub nodes: Vec<Node>,
    pub root: NodeId,
}

/// Build the tree bottom-up from ordered leaf hashes.
///
/// Each layer is paired left to right. When a layer has an odd count, its
/// last node is paired with itself so every internal node has two child
/// slots. Returns `None` when there are no leaves.
pub fn build_layers(leaves: &[String], algorithm: HashAlgorithm) -> Option<BuiltTree> {
    if leaves.is_empty() {
        return None;
    }

    let total_start = Instant::now();
    let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaves.len());
    nodes.extend(leaves.iter().cloned().map(Node::leaf));

    let mut layer: Vec<NodeId> = (0..leaves.len()).map(NodeId).collect();
    let mut depth = 0usize;

    while layer.len() > 1 {
        debug!("Layer {} has {} nodes", depth, layer.len());

        let mut next = Vec::with_capacity(layer.len().div_ceil(2));
        for pair in layer.chunks(2) {
            // A trailing single node is its own right sibling
            let (left, right) = (pair[0], pair[pair.len() - 1]);

            let hash = algorithm.hash_nodes(nodes[left.0].hash(), nodes[right.0].hash());
            let parent = NodeId(nodes.len());
            nodes.push(Node::internal(hash, left, right));

            nodes[left.0].set_parent(parent);
            if right != left {
                nodes[right.0].set_parent(parent);
            }
            next.push(parent);
        }

        layer = next;
        depth += 1;
    }

    let root = layer[0];
    info!(
        "Built tree of {} leaves ({} nodes, depth {}) in {:?}",
        leaves.len(),
        nodes.len(),
        depth,
        total_start.elapsed()
    );

    Some(BuiltTree { nodes, root })
}
