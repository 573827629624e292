/*!
# BVH 3D

A dynamic bounding volume hierarchy for spatial queries.

The hierarchy is generic over the bounding volume it stores and over the
payload attached to each volume. Any type implementing [`Volume`](bvh3d::Volume)
can be stored, and any type implementing [`QueryShape`](bvh3d::QueryShape)
for that volume can be used to query it.

## Architecture

- **Bvh**: Binary tree of bounding volumes, built incrementally
- **Volume / QueryShape**: Contracts for stored volumes and query regions
- **Aabb / BoundingSphere / Rect / Frustum**: Concrete shapes
- **SpatialIndex**: Seam for swapping the hierarchy with a flat list
- **Culler**: Frustum culling strategies over any SpatialIndex

Logging goes through a process-wide [`Diagnostics`](bvh3d::Diagnostics)
registry that routes to a pluggable [`Logger`](bvh3d::log::Logger).
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod shape;
pub mod bvh;
pub mod index;
pub mod utils;

// Main bvh3d namespace module
pub mod bvh3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Hierarchy
    pub use crate::bvh::{Bvh, BvhConfig, BvhStats, Aggregate, MAX_NODES};

    // Shapes and the volume contract
    pub use crate::shape::{
        Precision, Volume, QueryShape,
        Aabb, BoundingSphere, Rect, Frustum, FrustumTest,
    };

    // Index seam and culling
    pub use crate::index::{SpatialIndex, BruteForceIndex, Culler, BruteForceCuller, FrustumCuller};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
