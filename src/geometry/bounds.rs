//! Axis-aligned bounds over a set of points.

use glam::DVec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create a new AABB.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from a set of points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);

        for p in points {
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Check if a point is inside the AABB grown by `tolerance` on every side.
    pub fn contains_with_tolerance(&self, point: DVec3, tolerance: f64) -> bool {
        let min = self.min - DVec3::splat(tolerance);
        let max = self.max + DVec3::splat(tolerance);
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let aabb = Aabb::from_points([
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, -1.0, 1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(1.0, 1.0, -1.0),
        ]);
        assert_eq!(aabb.min, DVec3::new(1.0, -1.0, -1.0));
        assert_eq!(aabb.max, DVec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_contains_flat_box() {
        let aabb = Aabb::new(DVec3::new(1.0, -1.0, -1.0), DVec3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains_with_tolerance(DVec3::new(1.0, 0.5, -0.5), 0.0));
        assert!(!aabb.contains_with_tolerance(DVec3::new(1.0 + 1e-12, 0.0, 0.0), 0.0));
        assert!(aabb.contains_with_tolerance(DVec3::new(1.0 + 1e-12, 0.0, 0.0), 1e-9));
        assert!(!aabb.contains_with_tolerance(DVec3::new(1.0, 1.5, 0.0), 1e-9));
    }
}
