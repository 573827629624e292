//! Index module
//!
//! Provides the spatial index trait, a brute-force reference index, and
//! frustum culling strategies built on top of them.

mod spatial_index;
mod brute_force_index;
mod culler;

pub use spatial_index::SpatialIndex;
pub use brute_force_index::BruteForceIndex;
pub use culler::{Culler, BruteForceCuller, FrustumCuller};
