//! Planes and the plane/segment intersection primitive.

use glam::DVec3;

/// A plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Any point lying on the plane.
    pub point: DVec3,
    /// Unit normal.
    pub normal: DVec3,
}

/// Where a line through two points crosses a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    /// Intersection point, `a + t·(b - a)`.
    pub point: DVec3,
    /// Parameter along `a → b`; `[0, 1]` is the segment itself.
    pub t: f64,
}

impl LineHit {
    /// True if the hit lies on the segment, both endpoints included.
    #[inline]
    pub fn within_segment(&self) -> bool {
        (0.0..=1.0).contains(&self.t)
    }
}

impl Plane {
    /// Create a plane from a point and a normal. The normal is normalized.
    pub fn new(point: DVec3, normal: DVec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Build the supporting plane of a triangle.
    ///
    /// The normal is `unit((p1 - p0) × (p2 - p0))`, so winding decides its sign.
    pub fn from_triangle(p0: DVec3, p1: DVec3, p2: DVec3) -> Self {
        Self::new(p0, (p1 - p0).cross(p2 - p0))
    }

    /// Plane offset `d` in `n·x = d`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.normal.dot(self.point)
    }

    /// Signed distance from a point to the plane.
    /// Positive = in front (same side as normal), Negative = behind.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset()
    }

    /// Intersect the infinite line through `a` and `b` with this plane.
    ///
    /// Returns `None` when `|n·(b - a)| < parallel_epsilon`, which also covers
    /// a zero-length segment.
    pub fn intersect_line(&self, a: DVec3, b: DVec3, parallel_epsilon: f64) -> Option<LineHit> {
        let direction = b - a;
        let n_dot_dir = self.normal.dot(direction);
        if n_dot_dir.abs() < parallel_epsilon {
            return None;
        }

        let t = -self.signed_distance(a) / n_dot_dir;
        Some(LineHit {
            point: a + t * direction,
            t,
        })
    }

    /// Intersect the segment `a → b` with this plane.
    ///
    /// Only hits with `0 ≤ t ≤ 1` are reported.
    pub fn intersect_segment(&self, a: DVec3, b: DVec3, parallel_epsilon: f64) -> Option<DVec3> {
        self.intersect_line(a, b, parallel_epsilon)
            .filter(LineHit::within_segment)
            .map(|hit| hit.point)
    }
}
