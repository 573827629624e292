/// BruteForceIndex: flat list, linear scan on every query.
///
/// O(n) queries, O(1) insert. Fine for a handful of objects and useful
/// as a reference when checking a hierarchy's results.

use crate::error::{Error, Result};
use crate::bvh::Aggregate;
use crate::shape::{QueryShape, Volume};
use super::spatial_index::SpatialIndex;

#[derive(Debug, Clone)]
pub struct BruteForceIndex<V, D> {
    items: Vec<Aggregate<V, D>>,
}

impl<V, D> BruteForceIndex<V, D> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<V, D> Default for BruteForceIndex<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D> SpatialIndex<V, D> for BruteForceIndex<V, D>
where
    V: Volume + PartialEq,
    D: PartialEq,
{
    fn insert(&mut self, volume: V, data: D) -> Result<()> {
        self.items
            .try_reserve(1)
            .map_err(|_| crate::bvh_err!("bvh3d::BruteForceIndex", Error::OutOfMemory))?;
        self.items.push(Aggregate::new(volume, data));
        Ok(())
    }

    fn remove(&mut self, volume: &V, data: &D) -> usize {
        match self.items.iter().position(|a| a.volume == *volume && a.data == *data) {
            Some(pos) => {
                self.items.swap_remove(pos);
                1
            }
            None => 0,
        }
    }

    fn query<'a>(&'a self, query: &dyn QueryShape<V>, results: &mut Vec<&'a Aggregate<V, D>>) {
        results.extend(self.items.iter().filter(|a| {
            query.overlaps(&a.volume) || query.encloses_point(&a.volume.center())
        }));
    }

    fn aggregates(&self) -> Box<dyn Iterator<Item = &Aggregate<V, D>> + '_> {
        Box::new(self.items.iter())
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
#[path = "brute_force_index_tests.rs"]
mod tests;
