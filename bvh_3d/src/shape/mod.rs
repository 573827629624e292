//! Shape module: the volume contract and the concrete shapes shipped with it.
//!
//! The BVH is generic over [`Volume`]; queries are generic over
//! [`QueryShape`]. Any shape implementing the contract can be stored,
//! and the same or a compatible shape can be used to search.

mod volume;
mod aabb;
mod sphere;
mod rect;
mod frustum;

pub use volume::{Precision, Volume, QueryShape};
pub use aabb::Aabb;
pub use sphere::BoundingSphere;
pub use rect::Rect;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
