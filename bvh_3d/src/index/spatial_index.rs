/// Spatial indexing seam.
///
/// A SpatialIndex stores `(volume, data)` aggregates and answers range
/// queries. Culling passes take `&dyn SpatialIndex` so the structure can
/// be swapped (BVH for dynamic scenes, brute force for tiny ones or as a
/// reference in tests).
///
/// Ownership: the caller creates and owns the index.

use crate::error::Result;
use crate::bvh::{Aggregate, Bvh};
use crate::shape::{QueryShape, Volume};

/// Trait for spatial indexing of `(volume, data)` pairs.
pub trait SpatialIndex<V: Volume, D> {
    /// Insert an aggregate. Duplicates are stored separately.
    fn insert(&mut self, volume: V, data: D) -> Result<()>;

    /// Remove one aggregate equal to `(volume, data)`; returns how many were removed (0 or 1).
    fn remove(&mut self, volume: &V, data: &D) -> usize;

    /// Append all aggregates relevant to `query` to `results`.
    fn query<'a>(&'a self, query: &dyn QueryShape<V>, results: &mut Vec<&'a Aggregate<V, D>>);

    /// Every stored aggregate, in unspecified order.
    fn aggregates(&self) -> Box<dyn Iterator<Item = &Aggregate<V, D>> + '_>;

    /// Remove all aggregates from the index.
    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V, D> SpatialIndex<V, D> for Bvh<V, D>
where
    V: Volume + PartialEq,
    D: PartialEq,
{
    fn insert(&mut self, volume: V, data: D) -> Result<()> {
        Bvh::insert(self, volume, data)
    }

    fn remove(&mut self, volume: &V, data: &D) -> usize {
        Bvh::remove(self, volume, data)
    }

    fn query<'a>(&'a self, query: &dyn QueryShape<V>, results: &mut Vec<&'a Aggregate<V, D>>) {
        self.get(query, results);
    }

    fn aggregates(&self) -> Box<dyn Iterator<Item = &Aggregate<V, D>> + '_> {
        Box::new(self.iter())
    }

    fn clear(&mut self) {
        Bvh::clear(self);
    }

    fn len(&self) -> usize {
        Bvh::len(self)
    }
}
