/// BVH configuration.

use crate::error::{Error, Result};

/// Largest number of nodes a tree can address (node ids are `u32`).
pub const MAX_NODES: usize = u32::MAX as usize;

/// Construction-time settings for a [`Bvh`](super::Bvh).
///
/// # Example
///
/// ```
/// use bvh_3d::bvh3d::{Bvh, BvhConfig, Aabb};
///
/// let config = BvhConfig {
///     initial_capacity: 1024,
///     ..Default::default()
/// };
/// let bvh = Bvh::<Aabb, u32>::with_config(config)?;
/// assert!(bvh.is_empty());
/// # Ok::<(), bvh_3d::bvh3d::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BvhConfig {
    /// Number of nodes reserved up front.
    ///
    /// A tree holding `n` aggregates uses `2n - 1` nodes.
    pub initial_capacity: usize,

    /// Skip subtrees whose bounds do not intersect the volume being removed.
    ///
    /// Off by default: removal matches on exact equality, and a cached
    /// bound that rounding left a hair too tight would hide the leaf.
    pub prune_removal_search: bool,
}

impl Default for BvhConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            prune_removal_search: false,
        }
    }
}

impl BvhConfig {
    /// Check the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_NODES {
            return Err(crate::bvh_err!(
                "bvh3d::BvhConfig",
                Error::InvalidConfig(format!(
                    "initial_capacity {} exceeds the node id space ({})",
                    self.initial_capacity, MAX_NODES
                ))
            ));
        }
        Ok(())
    }
}
