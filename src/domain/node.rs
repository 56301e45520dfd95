/// Handle of a node inside a tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node of the arena. Leaves occupy the first slots in insertion order,
/// internal nodes follow layer by layer, so the root is always the last slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf {
        hash: String,
        parent: Option<NodeId>,
    },
    /// `left` and `right` are equal when an odd layer paired its last node with itself.
    Internal {
        hash: String,
        left: NodeId,
        right: NodeId,
        parent: Option<NodeId>,
    },
}

impl Node {
    pub fn leaf(hash: String) -> Self {
        Node::Leaf { hash, parent: None }
    }

    pub fn internal(hash: String, left: NodeId, right: NodeId) -> Self {
        Node::Internal {
            hash,
            left,
            right,
            parent: None,
        }
    }

    pub fn hash(&self) -> &str {
        match self {
            Node::Leaf { hash, .. } | Node::Internal { hash, .. } => hash,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Leaf { parent, .. } | Node::Internal { parent, .. } => *parent,
        }
    }

    pub(crate) fn set_parent(&mut self, id: NodeId) {
        match self {
            Node::Leaf { parent, .. } | Node::Internal { parent, .. } => *parent = Some(id),
        }
    }

    /// `(left, right)` for an internal node, `None` for a leaf.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((*left, *right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
