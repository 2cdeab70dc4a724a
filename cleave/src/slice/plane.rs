use crate::math::*;
use serde::{Deserialize, Serialize};

/// Which side of a plane a point lies on. `Above` is the half-space the normal points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideOfPlane {
    Above,
    Below,
    On,
}

/// Tolerances used when classifying points and intersecting segments.
///
/// `side` is the half-width of the band around the plane in which points count as `On`.
/// `segment` widens the accepted segment parameter range to `[-segment, 1 + segment]`, so that
/// intersections at shared vertices are not lost to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub side: f32,
    pub segment: f32,
}

impl Tolerance {
    pub const DEFAULT_SIDE: f32 = 1e-5;
    pub const DEFAULT_SEGMENT: f32 = 1e-4;

    pub const fn new(side: f32, segment: f32) -> Self {
        Self { side, segment }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { side: Self::DEFAULT_SIDE, segment: Self::DEFAULT_SEGMENT }
    }
}

/// Infinite plane `dot(normal, p) == distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
    tolerance: Tolerance,
}

impl Plane {
    /// Plane through `point` with the given `normal`. The normal is expected to be unit length.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { normal, distance: dot(normal, point), tolerance: Tolerance::default() }
    }

    pub fn from_normal_distance(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance, tolerance: Tolerance::default() }
    }

    pub fn with_tolerance(self, tolerance: Tolerance) -> Self {
        Self { tolerance, ..self }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        dot(self.normal, point) - self.distance
    }

    pub fn classify(&self, point: Vec3) -> SideOfPlane {
        let d = self.signed_distance(point);
        if d > self.tolerance.side {
            SideOfPlane::Above
        } else if d < -self.tolerance.side {
            SideOfPlane::Below
        } else {
            SideOfPlane::On
        }
    }

    /// Intersects segment `a -> b` with the plane, returning the segment parameter and the point.
    /// Segments parallel to the plane never intersect.
    pub fn intersect_segment(&self, a: Vec3, b: Vec3) -> Option<(f32, Vec3)> {
        let ab = b - a;
        let t = (self.distance - dot(self.normal, a)) / dot(self.normal, ab);
        if !t.is_finite() {
            return None;
        }
        let eps = self.tolerance.segment;
        if t >= -eps && t <= 1.0 + eps { Some((t, a + t * ab)) } else { None }
    }

    /// Re-expresses a world-space plane in the local space of an object whose local-to-world
    /// transform is `local_to_world`. Returns None for transforms that collapse a dimension.
    pub fn transformed(&self, local_to_world: &Mat34) -> Option<Plane> {
        let linear = local_to_world.as_mat33();
        if linear.determinant().abs() < 1e-12 {
            return None;
        }
        // n . (L p + t) = d  =>  (L^T n) . p = d - n . t
        let normal = linear.transpose() * self.normal;
        let distance = self.distance - dot(self.normal, local_to_world.translation());
        let len = normal.length();
        if len <= f32::EPSILON || !len.is_finite() {
            return None;
        }
        Some(Plane { normal: normal / len, distance: distance / len, tolerance: self.tolerance })
    }
}

pub fn classify_point(plane: &Plane, point: Vec3) -> SideOfPlane {
    plane.classify(point)
}
