/// Culling strategies.
///
/// A Culler decides which stored objects are visible through a frustum.
/// Implementations range from brute-force (return all) to a spatial
/// query on the index.

use crate::bvh::Aggregate;
use crate::shape::{Frustum, QueryShape, Volume};
use super::spatial_index::SpatialIndex;

/// Strategy for determining visible payloads from a frustum.
///
/// Called once per frame. `&mut self` allows stateful implementations
/// (statistics, caching) across frames.
pub trait Culler<V: Volume, D> {
    /// Cull the index against the frustum and return the visible payloads.
    fn cull(&mut self, frustum: &Frustum, index: &dyn SpatialIndex<V, D>) -> Vec<D>;
}

/// Brute-force culler: returns ALL payloads (no actual culling).
///
/// Suitable as a baseline for comparison.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Volume, D: Clone> Culler<V, D> for BruteForceCuller {
    fn cull(&mut self, _frustum: &Frustum, index: &dyn SpatialIndex<V, D>) -> Vec<D> {
        index.aggregates().map(|a| a.data.clone()).collect()
    }
}

/// Frustum culler: spatial query on the index, then an exact per-volume
/// test to drop candidates that were only reported because the frustum
/// contains their center.
#[derive(Debug, Default)]
pub struct FrustumCuller {
    /// Candidates returned by the last index query
    last_candidates: usize,
    /// Payloads kept after the exact test in the last cull
    last_visible: usize,
}

impl FrustumCuller {
    pub fn new() -> Self {
        Self::default()
    }

    /// (candidates, visible) counts from the last call to `cull`
    pub fn last_counts(&self) -> (usize, usize) {
        (self.last_candidates, self.last_visible)
    }
}

impl<V, D> Culler<V, D> for FrustumCuller
where
    V: Volume,
    D: Clone,
    Frustum: QueryShape<V>,
{
    fn cull(&mut self, frustum: &Frustum, index: &dyn SpatialIndex<V, D>) -> Vec<D> {
        let mut candidates: Vec<&Aggregate<V, D>> = Vec::new();
        index.query(frustum, &mut candidates);

        let visible: Vec<D> = candidates
            .iter()
            .filter(|a| frustum.overlaps(&a.volume))
            .map(|a| a.data.clone())
            .collect();

        self.last_candidates = candidates.len();
        self.last_visible = visible.len();
        crate::bvh_trace!(
            "bvh3d::FrustumCuller",
            "cull: {} candidates, {} visible",
            self.last_candidates, self.last_visible
        );
        visible
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
