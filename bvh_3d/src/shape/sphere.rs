/// Bounding sphere.

use glam::Vec3;
use super::aabb::Aabb;
use super::volume::{QueryShape, Volume};

/// Padding added to merged radii, in units of `f32::EPSILON` relative to
/// the magnitude of the coordinates involved.
const MERGE_SLACK_ULPS: f32 = 8.0;

/// Sphere defined by a center and a radius.
///
/// A zero radius is allowed and describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center of the sphere
    pub center: Vec3,
    /// Radius (>= 0)
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Upper bound on the f32 error of distances measured between points
    /// of `self` and `other`. A merged radius is padded by this much, which
    /// keeps every point of both inputs inside the result.
    fn rounding_slack(&self, other: &BoundingSphere) -> f32 {
        let magnitude = self.center.length() + other.center.length() + self.radius + other.radius;
        magnitude * MERGE_SLACK_ULPS * f32::EPSILON
    }

    /// Smallest box enclosing this sphere
    pub fn to_aabb(&self) -> Aabb {
        Aabb::from_center_extents(self.center, Vec3::splat(self.radius))
    }
}

impl Volume for BoundingSphere {
    type Scalar = f32;
    type Point = Vec3;
    const DIMENSION: usize = 3;

    fn center(&self) -> Vec3 {
        self.center
    }

    fn lower(&self, axis: usize) -> f32 {
        self.center[axis] - self.radius
    }

    fn upper(&self, axis: usize) -> f32 {
        self.center[axis] + self.radius
    }

    fn contains_point(&self, point: &Vec3) -> bool {
        self.center.distance_squared(*point) <= self.radius * self.radius
    }

    fn intersects(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    fn resize_include(&mut self, other: &BoundingSphere) {
        let offset = other.center - self.center;
        let distance = offset.length();
        let slack = self.rounding_slack(other);

        // One sphere already encloses the other, with room for rounding
        if distance + other.radius + slack <= self.radius {
            return;
        }
        if distance + self.radius + slack <= other.radius {
            *self = *other;
            return;
        }

        let (center, radius) = if distance > 0.0 {
            let radius = (distance + self.radius + other.radius) * 0.5;
            (self.center + offset * ((radius - self.radius) / distance), radius)
        } else {
            (self.center, self.radius.max(other.radius))
        };

        // The rounded center can leave either input sticking out by a few ulps
        let reach = (center.distance(self.center) + self.radius)
            .max(center.distance(other.center) + other.radius);
        self.center = center;
        self.radius = radius.max(reach) + slack;
    }

    fn bounding_radius(&self) -> f32 {
        self.radius
    }
}

// ===== CROSS-SHAPE QUERIES =====

impl QueryShape<Aabb> for BoundingSphere {
    fn overlaps(&self, aabb: &Aabb) -> bool {
        let closest = aabb.closest_point(self.center);
        closest.distance_squared(self.center) <= self.radius * self.radius
    }

    fn encloses_point(&self, point: &Vec3) -> bool {
        self.contains_point(point)
    }
}

#[cfg(test)]
#[path = "sphere_tests.rs"]
mod tests;
