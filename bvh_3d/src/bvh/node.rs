/// Tree nodes and the aggregates they hold.

use crate::shape::Volume;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A stored `(volume, data)` pair.
///
/// `data` is opaque to the tree; it is typically an entity key or handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<V, D> {
    /// Bounding volume of the stored object
    pub volume: V,
    /// User payload
    pub data: D,
}

impl<V, D> Aggregate<V, D> {
    pub fn new(volume: V, data: D) -> Self {
        Self { volume, data }
    }
}

/// Role of a node: a leaf owns an aggregate, an internal node owns two children.
#[derive(Debug, Clone)]
pub(crate) enum NodeKind<V, D> {
    /// The leaf's bounds are the aggregate's own volume.
    Leaf(Aggregate<V, D>),
    Internal {
        /// Union of both children's bounds
        bounds: V,
        left: NodeId,
        right: NodeId,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Node<V, D> {
    /// Non-owning back link (None for the root)
    pub(crate) parent: Option<NodeId>,
    /// Number of aggregates in this subtree
    pub(crate) child_count: u32,
    pub(crate) kind: NodeKind<V, D>,
}

impl<V: Volume, D> Node<V, D> {
    pub(crate) fn leaf(aggregate: Aggregate<V, D>, parent: Option<NodeId>) -> Self {
        Self {
            parent,
            child_count: 1,
            kind: NodeKind::Leaf(aggregate),
        }
    }

    /// Volume enclosing the whole subtree
    #[inline]
    pub(crate) fn bounds(&self) -> &V {
        match &self.kind {
            NodeKind::Leaf(aggregate) => &aggregate.volume,
            NodeKind::Internal { bounds, .. } => bounds,
        }
    }

    #[inline]
    pub(crate) fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { left, right, .. } => Some((left, right)),
        }
    }

    #[inline]
    pub(crate) fn aggregate(&self) -> Option<&Aggregate<V, D>> {
        match &self.kind {
            NodeKind::Leaf(aggregate) => Some(aggregate),
            NodeKind::Internal { .. } => None,
        }
    }
}
