/// Shape contract consumed by the BVH.
///
/// A `Volume` bounds stored objects and is also the default query shape.
/// The BVH never looks inside a volume: everything it needs goes through
/// this trait. Implementations are responsible for returning well-formed
/// bounds (`lower(axis) <= upper(axis)`); the tree does not check.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Scalar type used for coordinates (`f32`, `f64`).
pub trait Precision:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
}

impl Precision for f32 {}

impl Precision for f64 {}

/// Bounding volume stored in the tree.
pub trait Volume: Clone {
    /// Coordinate precision
    type Scalar: Precision;

    /// Point of the space this volume lives in
    type Point: Copy;

    /// Number of axes
    const DIMENSION: usize;

    /// Center point
    fn center(&self) -> Self::Point;

    /// Lower bound along `axis` (`axis < DIMENSION`)
    fn lower(&self, axis: usize) -> Self::Scalar;

    /// Upper bound along `axis` (`axis < DIMENSION`)
    fn upper(&self, axis: usize) -> Self::Scalar;

    /// Whether `point` lies inside (or on the boundary of) this volume
    fn contains_point(&self, point: &Self::Point) -> bool;

    /// Whether this volume overlaps or touches `other`
    fn intersects(&self, other: &Self) -> bool;

    /// Grow `self` into the smallest volume containing both `self` and `other`.
    ///
    /// Never shrinks. Shapes whose merge rounds (spheres) may return a
    /// slightly larger volume, but the result must contain every point of
    /// both inputs exactly: queries prune on it without any tolerance.
    fn resize_include(&mut self, other: &Self);

    /// Radius of the smallest sphere enclosing this volume
    fn bounding_radius(&self) -> Self::Scalar;

    /// Smallest volume containing both `self` and `other`
    fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.resize_include(other);
        merged
    }
}

/// Shape used to query a tree of `V` volumes.
///
/// Every `Volume` queries trees of its own type; other pairings
/// (box over spheres, frustum over boxes...) are implemented explicitly.
/// May over-approximate, must never under-approximate.
pub trait QueryShape<V: Volume> {
    /// Whether this shape may overlap `volume`
    fn overlaps(&self, volume: &V) -> bool;

    /// Whether this shape contains `point`
    fn encloses_point(&self, point: &V::Point) -> bool;
}

impl<V: Volume> QueryShape<V> for V {
    #[inline]
    fn overlaps(&self, volume: &V) -> bool {
        self.intersects(volume)
    }

    #[inline]
    fn encloses_point(&self, point: &V::Point) -> bool {
        self.contains_point(point)
    }
}
