//! Current resolver: face tests in the cuboid's local frame.

use glam::DVec3;

use super::face::FACE_DESCRIPTORS;
use super::{miss_distance, to_output, CollisionResult, Sphere};
use crate::config::CollisionConfig;
use crate::cuboid::Cuboid;

/// Find the first face, in priority order, crossed by the segment from the
/// sphere center to the cuboid center.
///
/// The sphere is moved into the local frame, where the cuboid is centered at
/// the origin and every face is an axis-aligned rectangle. A face matches when
/// the segment crosses its plane with `0 ≤ t ≤ 1` and the crossing lies within
/// the face's two in-plane half-extents. No face matches when the sphere center
/// is inside the cuboid; that is reported as a collision with `face: None`.
pub fn sphere_collision(
    cuboid: &Cuboid,
    sphere: &Sphere,
    config: &CollisionConfig,
) -> CollisionResult {
    let half = cuboid.half_extents();
    let local_center = cuboid.to_local(sphere.center());

    for descriptor in &FACE_DESCRIPTORS {
        let plane = descriptor.plane(half);
        let Some(crossing) =
            plane.intersect_segment(local_center, DVec3::ZERO, config.parallel_epsilon)
        else {
            continue;
        };
        if !descriptor.bounds_contain(crossing, half, config.containment_tolerance) {
            continue;
        }

        let miss = miss_distance(
            crossing.distance(local_center),
            sphere.radius(),
            config.contact_epsilon,
        );
        let point = to_output(cuboid, crossing, config.contact_frame);
        tracing::trace!(face = %descriptor.face, miss, "sphere struck cuboid face");
        return CollisionResult::hit(descriptor.face, miss, point);
    }

    tracing::trace!("sphere center inside cuboid");
    CollisionResult::inside(sphere.center())
}
