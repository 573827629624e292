/// 2D axis-aligned rectangle (double precision).
///
/// Used for screen-space and map-space indexing, where a 3D box would
/// waste a dimension.

use glam::DVec2;
use super::volume::Volume;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (x, y)
    pub min: DVec2,
    /// Maximum corner (x, y)
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from position and size
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self { min: origin, max: origin + size }
    }
}

impl Volume for Rect {
    type Scalar = f64;
    type Point = DVec2;
    const DIMENSION: usize = 2;

    fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    fn lower(&self, axis: usize) -> f64 {
        self.min[axis]
    }

    fn upper(&self, axis: usize) -> f64 {
        self.max[axis]
    }

    fn contains_point(&self, point: &DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    fn resize_include(&mut self, other: &Rect) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    fn bounding_radius(&self) -> f64 {
        (self.max - self.min).length() * 0.5
    }
}
