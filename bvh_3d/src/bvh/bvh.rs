/// Bvh: dynamic binary bounding volume hierarchy.
///
/// Every leaf holds one `(volume, data)` aggregate; every internal node
/// holds exactly two children and caches a volume enclosing its subtree.
/// Nodes live in a flat arena and link to each other by `NodeId`, parent
/// links included, so there is no shared ownership anywhere in the tree.
///
/// Updates are incremental and local:
/// - insert descends along the cheapest child (bounding-radius growth)
///   and pairs the new leaf with the leaf it lands on
/// - remove splices the leaf's parent out and promotes the sibling
/// - queries prune every subtree whose cached bounds miss the query shape
///
/// No balancing is performed. Moving an object is `remove` + `insert`.

use crate::error::{Error, Result};
use crate::shape::{QueryShape, Volume};
use crate::utils::SlotAllocator;
use super::config::{BvhConfig, MAX_NODES};
use super::node::{Aggregate, Node, NodeId, NodeKind};

const SOURCE: &str = "bvh3d::Bvh";

/// Dynamic bounding volume hierarchy storing `D` payloads keyed by `V` volumes.
///
/// # Example
///
/// ```
/// use bvh_3d::bvh3d::{Bvh, BoundingSphere, Aabb};
/// use bvh_3d::glam::Vec3;
///
/// let mut bvh = Bvh::new();
/// bvh.insert(BoundingSphere::new(Vec3::ZERO, 1.0), "a")?;
/// bvh.insert(BoundingSphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0), "b")?;
///
/// let mut hits = Vec::new();
/// bvh.get(&Aabb::new(Vec3::splat(-2.0), Vec3::splat(2.0)), &mut hits);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].data, "a");
///
/// assert_eq!(bvh.remove(&BoundingSphere::new(Vec3::ZERO, 1.0), &"a"), 1);
/// # Ok::<(), bvh_3d::bvh3d::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bvh<V, D> {
    /// Node arena, indexed by `NodeId` (None = free slot)
    pub(super) nodes: Vec<Option<Node<V, D>>>,
    /// Recycles arena slots
    pub(super) slots: SlotAllocator,
    pub(super) root: Option<NodeId>,
    pub(super) config: BvhConfig,
}

impl<V: Volume, D> Default for Bvh<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Volume, D> Bvh<V, D> {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            slots: SlotAllocator::new(),
            root: None,
            config: BvhConfig::default(),
        }
    }

    /// Create an empty tree with a custom configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configuration is rejected
    /// - `OutOfMemory` if `initial_capacity` nodes cannot be reserved
    pub fn with_config(config: BvhConfig) -> Result<Self> {
        config.validate()?;

        let mut nodes = Vec::new();
        nodes
            .try_reserve(config.initial_capacity)
            .map_err(|_| crate::bvh_err!(SOURCE, Error::OutOfMemory))?;

        Ok(Self {
            nodes,
            slots: SlotAllocator::new(),
            root: None,
            config,
        })
    }

    pub fn config(&self) -> &BvhConfig {
        &self.config
    }

    /// Number of stored aggregates
    pub fn len(&self) -> usize {
        self.root.map_or(0, |root| self.node(root).child_count as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of live nodes (leaves + internal nodes)
    pub fn node_count(&self) -> usize {
        self.slots.len() as usize
    }

    /// Volume enclosing everything in the tree
    pub fn root_bounds(&self) -> Option<&V> {
        self.root.map(|root| self.node(root).bounds())
    }

    /// Number of levels (0 when empty, 1 for a single leaf)
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut max_depth = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some((left, right)) = self.node(id).children() {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }

    /// All stored aggregates, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Aggregate<V, D>> + '_ {
        self.nodes.iter().flatten().filter_map(Node::aggregate)
    }

    // ===== INSERT =====

    /// Insert an aggregate.
    ///
    /// Walks down to the cheapest leaf, pairs it with the new leaf under a
    /// fresh branch node, then refits every ancestor (bounds and
    /// aggregate count) on the way back to the root.
    ///
    /// Duplicates are not merged: inserting the same pair twice stores
    /// two aggregates.
    ///
    /// # Errors
    ///
    /// `OutOfMemory` if the arena cannot grow. The tree is untouched in
    /// that case.
    pub fn insert(&mut self, volume: V, data: D) -> Result<()> {
        let needed = if self.root.is_some() { 2 } else { 1 };
        self.reserve_nodes(needed)?;

        let Some(root) = self.root else {
            let id = self.alloc_node(Node::leaf(Aggregate::new(volume, data), None));
            self.root = Some(id);
            crate::bvh_trace!(SOURCE, "insert: leaf {} is the new root", id.0);
            return Ok(());
        };

        let sibling = self.choose_leaf(root, &volume);
        let parent = self.node(sibling).parent;
        let bounds = self.node(sibling).bounds().merged(&volume);

        // The new branch takes the sibling's place under `parent`
        let leaf = self.alloc_node(Node::leaf(Aggregate::new(volume, data), None));
        let branch = self.alloc_node(Node {
            parent,
            child_count: 2,
            kind: NodeKind::Internal { bounds, left: sibling, right: leaf },
        });
        self.node_mut(sibling).parent = Some(branch);
        self.node_mut(leaf).parent = Some(branch);

        match parent {
            Some(parent) => {
                self.replace_child(parent, sibling, branch);
                self.refit_upwards(parent);
            }
            None => self.root = Some(branch),
        }

        crate::bvh_trace!(
            SOURCE,
            "insert: leaf {} paired with leaf {} under branch {}",
            leaf.0, sibling.0, branch.0
        );
        Ok(())
    }

    /// Descend from `start` to the leaf the new volume should be paired with.
    fn choose_leaf(&self, start: NodeId, volume: &V) -> NodeId {
        let mut current = start;
        while let Some((left, right)) = self.node(current).children() {
            current = self.cheaper_child(left, right, volume);
        }
        current
    }

    /// Pick the child whose bounds grow least when `volume` is merged in.
    ///
    /// Ties go to the smaller subtree, then to the left child.
    fn cheaper_child(&self, left: NodeId, right: NodeId, volume: &V) -> NodeId {
        let left_cost = self.rate_node(left, volume);
        let right_cost = self.rate_node(right, volume);

        if left_cost < right_cost {
            left
        } else if right_cost < left_cost {
            right
        } else if self.node(right).child_count < self.node(left).child_count {
            right
        } else {
            left
        }
    }

    /// Insertion cost of `volume` into the subtree at `id`: growth of the
    /// bounding radius. O(1), no look-ahead.
    fn rate_node(&self, id: NodeId, volume: &V) -> V::Scalar {
        let bounds = self.node(id).bounds();
        bounds.merged(volume).bounding_radius() - bounds.bounding_radius()
    }

    // ===== QUERY =====

    /// Append every aggregate relevant to `query` to `results`.
    ///
    /// Subtrees whose cached bounds don't overlap `query` are skipped.
    /// A leaf is reported if `query` overlaps its volume or contains its
    /// center. `results` is not cleared first; order is unspecified.
    pub fn get<'a, Q>(&'a self, query: &Q, results: &mut Vec<&'a Aggregate<V, D>>)
    where
        Q: QueryShape<V> + ?Sized,
    {
        let Some(root) = self.root else {
            return;
        };

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            match &node.kind {
                NodeKind::Leaf(aggregate) => {
                    if query.overlaps(&aggregate.volume)
                        || query.encloses_point(&aggregate.volume.center())
                    {
                        results.push(aggregate);
                    }
                }
                NodeKind::Internal { bounds, left, right } => {
                    if query.overlaps(bounds) {
                        stack.push(*right);
                        stack.push(*left);
                    }
                }
            }
        }
    }

    // ===== CLEAR =====

    /// Free every node and leave the tree empty.
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        // Post-order: children are freed before their parent
        let mut freed = 0usize;
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                self.free_node(id);
                freed += 1;
                continue;
            }
            stack.push((id, true));
            if let Some((left, right)) = self.node(id).children() {
                stack.push((right, false));
                stack.push((left, false));
            }
        }

        self.reset_arena();
        crate::bvh_debug!(SOURCE, "clear: freed {} nodes", freed);
    }

    // ===== ARENA =====

    #[inline]
    pub(super) fn node(&self, id: NodeId) -> &Node<V, D> {
        match &self.nodes[id.index()] {
            Some(node) => node,
            None => unreachable!("dangling node id {}", id.0),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<V, D> {
        match &mut self.nodes[id.index()] {
            Some(node) => node,
            None => unreachable!("dangling node id {}", id.0),
        }
    }

    /// Make sure the next `count` node allocations cannot fail.
    fn reserve_nodes(&mut self, count: usize) -> Result<()> {
        let fresh = self.slots.fresh_slots_needed(count);
        if fresh == 0 {
            return Ok(());
        }
        if self.slots.high_water_mark() as usize + fresh > MAX_NODES {
            return Err(crate::bvh_err!(SOURCE, Error::OutOfMemory));
        }
        self.nodes
            .try_reserve(fresh)
            .map_err(|_| crate::bvh_err!(SOURCE, Error::OutOfMemory))
    }

    /// Store `node` in a free slot (capacity must have been reserved).
    fn alloc_node(&mut self, node: Node<V, D>) -> NodeId {
        let id = NodeId(self.slots.alloc());
        if id.index() == self.nodes.len() {
            self.nodes.push(Some(node));
        } else {
            self.nodes[id.index()] = Some(node);
        }
        id
    }

    fn free_node(&mut self, id: NodeId) -> Option<Node<V, D>> {
        let node = self.nodes[id.index()].take();
        if node.is_some() {
            self.slots.free(id.0);
        }
        node
    }

    /// Drop all slots; only valid once every node has been freed.
    fn reset_arena(&mut self) {
        self.nodes.clear();
        self.slots.reset();
    }

    /// Point `parent` at `new_child` where it used to point at `old_child`.
    fn replace_child(&mut self, parent: NodeId, old_child: NodeId, new_child: NodeId) {
        if let NodeKind::Internal { left, right, .. } = &mut self.node_mut(parent).kind {
            if *left == old_child {
                *left = new_child;
            } else {
                debug_assert_eq!(*right, old_child);
                *right = new_child;
            }
        }
    }
}

// ===== REMOVE =====

impl<V, D> Bvh<V, D>
where
    V: Volume + PartialEq,
    D: PartialEq,
{
    /// Remove one aggregate equal to `(volume, data)`.
    ///
    /// Returns the number of aggregates removed: 1, or 0 if no exact
    /// match exists (the tree is then untouched). If the pair was
    /// inserted several times only one copy goes, and which one is
    /// unspecified.
    pub fn remove(&mut self, volume: &V, data: &D) -> usize {
        let Some(leaf) = self.find_leaf(volume, data) else {
            return 0;
        };
        self.detach_leaf(leaf);
        1
    }

    /// Whether an aggregate equal to `(volume, data)` is stored.
    pub fn contains(&self, volume: &V, data: &D) -> bool {
        self.find_leaf(volume, data).is_some()
    }

    /// Depth-first search for the first leaf matching exactly.
    fn find_leaf(&self, volume: &V, data: &D) -> Option<NodeId> {
        let root = self.root?;
        let prune = self.config.prune_removal_search;

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            match &node.kind {
                NodeKind::Leaf(aggregate) => {
                    if aggregate.volume == *volume && aggregate.data == *data {
                        return Some(id);
                    }
                }
                NodeKind::Internal { bounds, left, right } => {
                    if prune && !bounds.intersects(volume) {
                        continue;
                    }
                    stack.push(*right);
                    stack.push(*left);
                }
            }
        }
        None
    }
}

impl<V: Volume, D> Bvh<V, D> {
    /// Unlink and free `leaf`, splicing its parent out of the tree.
    fn detach_leaf(&mut self, leaf: NodeId) {
        let parent = self.node(leaf).parent;
        self.free_node(leaf);

        let Some(parent) = parent else {
            // The leaf was the root
            self.root = None;
            self.reset_arena();
            crate::bvh_trace!(SOURCE, "remove: leaf {} was the root, tree is empty", leaf.0);
            return;
        };

        let sibling = self.find_replacement(parent, leaf);
        let grandparent = self.node(parent).parent;
        self.free_node(parent);
        self.node_mut(sibling).parent = grandparent;

        match grandparent {
            Some(grandparent) => {
                self.replace_child(grandparent, parent, sibling);
                self.refit_upwards(grandparent);
            }
            None => self.root = Some(sibling),
        }

        crate::bvh_trace!(
            SOURCE,
            "remove: leaf {} detached, node {} takes the place of branch {}",
            leaf.0, sibling.0, parent.0
        );
    }

    /// The node that takes `parent`'s slot once `removed` is gone: the
    /// remaining child, which keeps every internal node at two children.
    fn find_replacement(&self, parent: NodeId, removed: NodeId) -> NodeId {
        match self.node(parent).children() {
            Some((left, right)) => if left == removed { right } else { left },
            None => unreachable!("leaf {} used as a parent", parent.0),
        }
    }

    /// Recompute bounds and counts from `start` up to the root.
    ///
    /// Each ancestor is rebuilt as `left.merged(right)` rather than grown
    /// in place. After a removal bounds can only shrink, which
    /// `resize_include` alone cannot express; after an insertion growing a
    /// sphere by the new volume would enclose the leaves but not
    /// necessarily the child spheres.
    fn refit_upwards(&mut self, start: NodeId) {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let Some((left, right)) = self.node(id).children() else {
                unreachable!("leaf {} on a refit path", id.0);
            };
            let merged = self.node(left).bounds().merged(self.node(right).bounds());
            let count = self.node(left).child_count + self.node(right).child_count;

            let node = self.node_mut(id);
            node.child_count = count;
            if let NodeKind::Internal { bounds, .. } = &mut node.kind {
                *bounds = merged;
            }
            cursor = node.parent;
        }
    }
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;
