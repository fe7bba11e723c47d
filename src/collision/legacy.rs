//! Legacy resolver: world-space quads with bounding-box containment.
//!
//! Kept for comparison against [`super::local`]. Containment is tested against
//! the axis-aligned bounds of each quad, which is exact unless the cuboid is
//! rotated about more than one axis. Then the bounds are larger than the quad
//! and a face earlier in priority order may be accepted for a crossing that
//! lies outside it.
//!
//! The corner walk labels the local +Y face "Right" and the -Y face "Left",
//! the mirror of the current resolver; outputs are compared as produced.

use glam::DVec3;

use super::{miss_distance, CollisionResult, Face, Sphere};
use crate::config::CollisionConfig;
use crate::cuboid::Cuboid;
use crate::geometry::{Aabb, Plane};

/// World-space quads for the six faces, in priority order.
///
/// Each quad is walked edge by edge from the previous face's last corner,
/// starting at the front top corner `center + (x + y + z) / 2`.
pub fn legacy_face_quads(cuboid: &Cuboid) -> [[DVec3; 4]; 6] {
    let size = cuboid.half_extents() * 2.0;
    let orientation = cuboid.orientation();
    let x = orientation.axis(0) * size.x;
    let y = orientation.axis(1) * size.y;
    let z = orientation.axis(2) * size.z;

    let start = cuboid.position() + (x + y + z) * 0.5;

    let front = {
        let c1 = start - y;
        let c2 = c1 - z;
        [start, c1, c2, c2 + y]
    };
    let right = {
        let c0 = front[3];
        let c1 = c0 - x;
        let c2 = c1 + z;
        [c0, c1, c2, c2 + x]
    };
    let top = {
        let c0 = right[3];
        let c1 = c0 - x;
        let c2 = c1 - y;
        [c0, c1, c2, c2 + x]
    };
    let left = {
        let c0 = top[3];
        let c1 = c0 - x;
        let c2 = c1 - z;
        [c0, c1, c2, c2 + x]
    };
    let bottom = {
        let c0 = left[3];
        let c1 = c0 - x;
        let c2 = c1 + y;
        [c0, c1, c2, c2 + x]
    };
    let back = {
        let c0 = start - x;
        let c1 = c0 - z;
        let c2 = c1 - y;
        [c0, c1, c2, c2 + z]
    };

    [front, right, top, left, bottom, back]
}

/// Find the first face, in priority order, crossed by the segment from the
/// sphere center to the cuboid center, working directly in world space.
///
/// The point of contact is returned in world space; the configured contact
/// frame does not apply.
pub fn sphere_collision_legacy(
    cuboid: &Cuboid,
    sphere: &Sphere,
    config: &CollisionConfig,
) -> CollisionResult {
    let quads = legacy_face_quads(cuboid);

    for (face, quad) in Face::PRIORITY.into_iter().zip(quads) {
        let plane = Plane::from_triangle(quad[0], quad[1], quad[3]);
        let Some(crossing) =
            plane.intersect_segment(sphere.center(), cuboid.position(), config.parallel_epsilon)
        else {
            continue;
        };
        if !Aabb::from_points(quad).contains_with_tolerance(crossing, config.containment_tolerance)
        {
            continue;
        }

        let miss = miss_distance(
            crossing.distance(sphere.center()),
            sphere.radius(),
            config.contact_epsilon,
        );
        tracing::trace!(face = %face, miss, "legacy: sphere struck cuboid face");
        return CollisionResult::hit(face, miss, crossing);
    }

    if !cuboid.contains_point(sphere.center()) {
        tracing::warn!(
            sphere = ?sphere.center(),
            cuboid = ?cuboid.position(),
            "legacy resolver matched no face for a sphere outside the cuboid"
        );
    }
    CollisionResult::inside(sphere.center())
}
