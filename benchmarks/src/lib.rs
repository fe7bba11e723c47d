//! Shared setup for the collision benchmarks.

use cuboid_collide::{Cuboid, Sphere};
use glam::DVec3;

/// The default 2x2x2 box at the origin.
pub fn unit_box() -> Cuboid {
    Cuboid::cube(2.0).expect("valid size")
}

/// A non-cubic box rotated on all three axes.
pub fn rotated_box() -> Cuboid {
    let mut cuboid =
        Cuboid::from_parts(DVec3::new(1.0, -2.0, 0.5), 3.0, 2.0, 4.0).expect("valid size");
    cuboid.set_yaw_degrees(35.0);
    cuboid.set_pitch_degrees(10.0);
    cuboid.set_roll_degrees(-25.0);
    cuboid
}

/// `n` spheres spread on a shell around `cuboid`, deterministic.
pub fn sphere_shell(cuboid: &Cuboid, n: usize, distance: f64) -> Vec<Sphere> {
    let golden = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f64;
            let direction = DVec3::new(r * theta.cos(), y, r * theta.sin());
            Sphere::new(cuboid.position() + direction * distance, 0.5).expect("valid radius")
        })
        .collect()
}
