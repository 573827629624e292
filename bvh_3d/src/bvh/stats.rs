/// Tree statistics and invariant checking.

use rustc_hash::FxHashSet;
use crate::error::{Error, Result};
use crate::shape::Volume;
use super::bvh::Bvh;
use super::node::NodeId;

/// Shape summary of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BvhStats {
    /// Stored aggregates (= leaves)
    pub aggregates: usize,
    /// Live nodes
    pub nodes: usize,
    pub leaves: usize,
    pub internal: usize,
    /// Levels, 0 when empty
    pub depth: usize,
}

impl<V: Volume, D> Bvh<V, D> {
    /// Walk the tree and summarize its shape.
    pub fn stats(&self) -> BvhStats {
        let mut stats = BvhStats::default();
        let Some(root) = self.root else {
            return stats;
        };

        let mut stack = vec![(root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.depth = stats.depth.max(depth);
            match self.node(id).children() {
                Some((left, right)) => {
                    stats.internal += 1;
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                None => stats.leaves += 1,
            }
        }
        stats.aggregates = stats.leaves;
        stats
    }

    /// Check every structural invariant of the tree.
    ///
    /// - the root has no parent, and an empty tree owns no nodes
    /// - every child links back to its parent
    /// - every internal node's bounds enclose both children's bounds
    /// - every node's `child_count` equals the aggregates below it
    /// - every live arena slot is reachable exactly once from the root
    ///
    /// # Errors
    ///
    /// `CorruptTree` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let Some(root) = self.root else {
            if !self.slots.is_empty() {
                return Err(corrupt(format!(
                    "empty tree still owns {} nodes",
                    self.slots.len()
                )));
            }
            return Ok(());
        };

        if let Some(parent) = self.node(root).parent {
            return Err(corrupt(format!("root {} has parent {}", root.0, parent.0)));
        }

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                return Err(corrupt(format!("node {} reached twice", id.0)));
            }

            let node = self.node(id);
            let Some((left, right)) = node.children() else {
                if node.child_count != 1 {
                    return Err(corrupt(format!(
                        "leaf {} has child_count {}",
                        id.0, node.child_count
                    )));
                }
                continue;
            };

            for child in [left, right] {
                let child_node = self.nodes.get(child.index()).and_then(Option::as_ref);
                let Some(child_node) = child_node else {
                    return Err(corrupt(format!("node {} links to free slot {}", id.0, child.0)));
                };
                if child_node.parent != Some(id) {
                    return Err(corrupt(format!(
                        "node {} does not link back to parent {}",
                        child.0, id.0
                    )));
                }
                if !encloses(node.bounds(), child_node.bounds()) {
                    return Err(corrupt(format!(
                        "bounds of node {} do not enclose child {}",
                        id.0, child.0
                    )));
                }
                stack.push(child);
            }

            let expected = self.node(left).child_count + self.node(right).child_count;
            if node.child_count != expected {
                return Err(corrupt(format!(
                    "node {} has child_count {}, expected {}",
                    id.0, node.child_count, expected
                )));
            }
        }

        let live = self.nodes.iter().filter(|slot| slot.is_some()).count();
        if visited.len() != live || live != self.slots.len() as usize {
            return Err(corrupt(format!(
                "{} nodes reachable, {} live slots, {} allocated",
                visited.len(),
                live,
                self.slots.len()
            )));
        }

        Ok(())
    }
}

fn corrupt(message: String) -> Error {
    crate::bvh_err!("bvh3d::Bvh", Error::CorruptTree(message))
}

/// Per-axis containment, exact.
fn encloses<V: Volume>(outer: &V, inner: &V) -> bool {
    (0..V::DIMENSION).all(|axis| {
        outer.lower(axis) <= inner.lower(axis) && outer.upper(axis) >= inner.upper(axis)
    })
}
