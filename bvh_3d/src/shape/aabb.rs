/// Axis-aligned bounding box.
///
/// The default volume for scene objects: cheap to merge, cheap to test,
/// and the shape the frustum p-vertex test is written against.

use glam::{Mat4, Vec3};
use super::sphere::BoundingSphere;
use super::volume::{QueryShape, Volume};

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from a center and half-extents.
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// A box covering all finite space.
    ///
    /// Meant as a query shape ("give me everything"). Its bounding radius
    /// is not finite, so don't store it in a tree.
    pub fn infinite() -> Self {
        Self {
            min: Vec3::splat(-f32::MAX),
            max: Vec3::splat(f32::MAX),
        }
    }

    /// Size along each axis
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Transform this local-space AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the AABB extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> Aabb {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        Aabb { min: new_min, max: new_max }
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Point of this box closest to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

impl Volume for Aabb {
    type Scalar = f32;
    type Point = Vec3;
    const DIMENSION: usize = 3;

    fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    fn lower(&self, axis: usize) -> f32 {
        self.min[axis]
    }

    fn upper(&self, axis: usize) -> f32 {
        self.max[axis]
    }

    fn contains_point(&self, point: &Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    fn resize_include(&mut self, other: &Aabb) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    fn bounding_radius(&self) -> f32 {
        self.extents().length() * 0.5
    }
}

// ===== CROSS-SHAPE QUERIES =====

impl QueryShape<BoundingSphere> for Aabb {
    fn overlaps(&self, sphere: &BoundingSphere) -> bool {
        let closest = self.closest_point(sphere.center);
        closest.distance_squared(sphere.center) <= sphere.radius * sphere.radius
    }

    fn encloses_point(&self, point: &Vec3) -> bool {
        self.contains_point(point)
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
