//! Yaw/pitch/roll orientation of a cuboid.
//!
//! The three angles are stored independently and the matrix is rebuilt from
//! scratch on every change as `O = R_yaw · R_pitch · R_roll`, so it stays
//! orthonormal no matter how relative and absolute rotations are mixed.
//! Relative calls add to the stored angle; they do not turn about the box's
//! current local axes. A yaw applied after a pitch still turns about the
//! outer Z axis of the product.
//!
//! The heading is tracked apart from the yaw: only the absolute yaw setters
//! record it.
//!
//! Rows of `O` are the cuboid's local X (depth), Y (width) and Z (height)
//! axes expressed in world space; a world offset `v` maps to local `O·v`.

use glam::{DMat3, DVec3};

/// Orientation of a cuboid as yaw (about Z), pitch (about Y) and roll (about X).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    yaw: f64,
    pitch: f64,
    roll: f64,
    /// Last absolute yaw, in degrees.
    heading: f64,
    matrix: DMat3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Orientation {
    /// Identity orientation.
    pub fn identity() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            heading: 0.0,
            matrix: DMat3::IDENTITY,
        }
    }

    /// Create an orientation from absolute angles in radians.
    pub fn from_angles(yaw: f64, pitch: f64, roll: f64) -> Self {
        let mut orientation = Self {
            yaw,
            pitch,
            roll,
            heading: yaw.to_degrees(),
            matrix: DMat3::IDENTITY,
        };
        orientation.rebuild();
        orientation
    }

    /// Reset all three angles to zero.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Current orientation matrix.
    #[inline]
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Yaw in radians.
    pub fn yaw_angle(&self) -> f64 {
        self.yaw
    }

    /// Pitch in radians.
    pub fn pitch_angle(&self) -> f64 {
        self.pitch
    }

    /// Roll in radians.
    pub fn roll_angle(&self) -> f64 {
        self.roll
    }

    /// Last absolute yaw in degrees, as recorded by [`Orientation::set_yaw`]
    /// and [`Orientation::set_yaw_degrees`]. Relative yaws leave it unchanged.
    pub fn heading_degrees(&self) -> f64 {
        self.heading
    }

    /// Local axis `index` (0 = X/depth, 1 = Y/width, 2 = Z/height) in world space.
    #[inline]
    pub fn axis(&self, index: usize) -> DVec3 {
        self.matrix.row(index)
    }

    /// Rotate a world-space offset into the local frame.
    #[inline]
    pub fn to_local(&self, v: DVec3) -> DVec3 {
        self.matrix * v
    }

    /// Rotate a local-frame offset back into world space.
    #[inline]
    pub fn to_world(&self, v: DVec3) -> DVec3 {
        self.matrix.transpose() * v
    }

    /// Add `radians` to the yaw (about Z) and rebuild the matrix.
    pub fn yaw(&mut self, radians: f64) {
        self.yaw += radians;
        self.rebuild();
    }

    /// Add `radians` to the pitch (about Y) and rebuild the matrix.
    pub fn pitch(&mut self, radians: f64) {
        self.pitch += radians;
        self.rebuild();
    }

    /// Add `radians` to the roll (about X) and rebuild the matrix.
    pub fn roll(&mut self, radians: f64) {
        self.roll += radians;
        self.rebuild();
    }

    pub fn yaw_degrees(&mut self, degrees: f64) {
        self.yaw(degrees.to_radians());
    }

    pub fn pitch_degrees(&mut self, degrees: f64) {
        self.pitch(degrees.to_radians());
    }

    pub fn roll_degrees(&mut self, degrees: f64) {
        self.roll(degrees.to_radians());
    }

    /// Replace the yaw, keeping pitch and roll, and record it as the heading.
    pub fn set_yaw(&mut self, radians: f64) {
        self.yaw = radians;
        self.heading = radians.to_degrees();
        self.rebuild();
    }

    /// Replace the pitch, keeping yaw and roll.
    pub fn set_pitch(&mut self, radians: f64) {
        self.pitch = radians;
        self.rebuild();
    }

    /// Replace the roll, keeping yaw and pitch.
    pub fn set_roll(&mut self, radians: f64) {
        self.roll = radians;
        self.rebuild();
    }

    /// Replace the yaw with a heading in degrees.
    pub fn set_yaw_degrees(&mut self, degrees: f64) {
        self.set_yaw(degrees.to_radians());
    }

    pub fn set_pitch_degrees(&mut self, degrees: f64) {
        self.set_pitch(degrees.to_radians());
    }

    pub fn set_roll_degrees(&mut self, degrees: f64) {
        self.set_roll(degrees.to_radians());
    }

    fn rebuild(&mut self) {
        self.matrix = DMat3::from_rotation_z(self.yaw)
            * DMat3::from_rotation_y(self.pitch)
            * DMat3::from_rotation_x(self.roll);
        tracing::debug!(
            yaw = self.yaw,
            pitch = self.pitch,
            roll = self.roll,
            "rebuilt orientation"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    fn assert_orthonormal(m: DMat3) {
        let product = m * m.transpose();
        for i in 0..3 {
            let diff = product.col(i) - DMat3::IDENTITY.col(i);
            assert!(diff.length() < 1e-9, "not orthonormal: {:?}", m);
        }
    }

    #[test]
    fn test_identity() {
        let o = Orientation::identity();
        assert_eq!(o.matrix(), DMat3::IDENTITY);
        assert_eq!(o.heading_degrees(), 0.0);
    }

    #[test]
    fn test_yaw_matrix_layout() {
        let mut o = Orientation::identity();
        o.yaw(0.3);
        let (s, c) = 0.3f64.sin_cos();
        // First row is the local X axis in world space.
        assert!((o.axis(0) - DVec3::new(c, -s, 0.0)).length() < EPS);
        assert!((o.axis(1) - DVec3::new(s, c, 0.0)).length() < EPS);
        assert!((o.axis(2) - DVec3::Z).length() < EPS);
    }

    #[test]
    fn test_pitch_and_roll_matrices() {
        let mut o = Orientation::identity();
        o.pitch(FRAC_PI_2);
        assert!((o.to_local(DVec3::Z) - DVec3::X).length() < EPS);

        o.reset();
        o.roll(FRAC_PI_2);
        assert!((o.to_local(DVec3::Y) - DVec3::Z).length() < EPS);
    }

    #[test]
    fn test_relative_rotations_accumulate() {
        let mut o = Orientation::identity();
        o.yaw_degrees(30.0);
        o.yaw_degrees(15.0);
        assert!((o.yaw_angle() - 45f64.to_radians()).abs() < EPS);
        assert_eq!(o.heading_degrees(), 0.0);

        let expected = Orientation::from_angles(45f64.to_radians(), 0.0, 0.0);
        assert!((o.matrix().row(0) - expected.matrix().row(0)).length() < EPS);
    }

    #[test]
    fn test_set_replaces_single_axis() {
        let mut o = Orientation::identity();
        o.pitch_degrees(20.0);
        o.yaw_degrees(10.0);
        o.set_yaw_degrees(-35.0);

        assert!((o.heading_degrees() + 35.0).abs() < 1e-9);
        assert!((o.pitch_angle() - 20f64.to_radians()).abs() < EPS);
        assert_orthonormal(o.matrix());
    }

    #[test]
    fn test_heading_tracks_absolute_yaw_only() {
        let mut o = Orientation::identity();
        o.set_yaw_degrees(30.0);
        o.yaw_degrees(10.0);
        assert!((o.heading_degrees() - 30.0).abs() < 1e-9);
        assert!((o.yaw_angle() - 40f64.to_radians()).abs() < EPS);

        o.set_yaw(0.5);
        assert!((o.heading_degrees() - 0.5f64.to_degrees()).abs() < 1e-9);

        o.reset();
        assert_eq!(o.heading_degrees(), 0.0);
    }

    #[test]
    fn test_yaw_after_pitch_adds_to_outer_angle() {
        let mut o = Orientation::identity();
        o.yaw_degrees(30.0);
        o.pitch_degrees(20.0);
        o.yaw_degrees(10.0);

        let expected = Orientation::from_angles(40f64.to_radians(), 20f64.to_radians(), 0.0);
        assert!((o.axis(0) - expected.axis(0)).length() < EPS);

        // Not the same as turning about the pitched box's own Z axis.
        let about_local_z = DMat3::from_rotation_z(30f64.to_radians())
            * DMat3::from_rotation_y(20f64.to_radians())
            * DMat3::from_rotation_z(10f64.to_radians());
        assert!((o.axis(0) - about_local_z.row(0)).length() > 1e-3);
    }

    #[test]
    fn test_mixed_rotations_stay_orthonormal() {
        let mut o = Orientation::identity();
        for i in 0..100 {
            o.yaw_degrees(7.0);
            o.set_pitch_degrees(i as f64);
            o.roll(0.01);
            o.set_roll_degrees(-3.0 * i as f64);
        }
        assert_orthonormal(o.matrix());
    }

    #[test]
    fn test_local_world_round_trip() {
        let o = Orientation::from_angles(0.4, -0.7, 1.1);
        let v = DVec3::new(1.0, -2.0, 3.5);
        assert!((o.to_world(o.to_local(v)) - v).length() < 1e-12);
    }

    #[test]
    fn test_composition_order() {
        let o = Orientation::from_angles(0.2, 0.5, -0.3);
        let expected = DMat3::from_rotation_z(0.2)
            * DMat3::from_rotation_y(0.5)
            * DMat3::from_rotation_x(-0.3);
        for i in 0..3 {
            assert!((o.matrix().col(i) - expected.col(i)).length() < EPS);
        }
    }
}
