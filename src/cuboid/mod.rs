//! The oriented cuboid: center, size and orientation.
//!
//! Local axes are X = depth, Y = width, Z = height. Sizes are full edge
//! lengths; half-extents are derived on demand.

mod orientation;

use std::ops::{Add, AddAssign};

use glam::DVec3;

use crate::error::{GeometryError, SizeAxis};

pub use orientation::Orientation;

fn validate_size(axis: SizeAxis, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::warn!(%axis, value, "rejected cuboid size");
        Err(GeometryError::InvalidSize { axis, value })
    }
}

/// Edge lengths of a cuboid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidSize {
    depth: f64,
    width: f64,
    height: f64,
}

impl Default for CuboidSize {
    fn default() -> Self {
        Self {
            depth: 1.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl CuboidSize {
    /// Create a size, rejecting non-finite or non-positive lengths.
    pub fn new(depth: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            depth: validate_size(SizeAxis::Depth, depth)?,
            width: validate_size(SizeAxis::Width, width)?,
            height: validate_size(SizeAxis::Height, height)?,
        })
    }

    /// Same length on every axis.
    pub fn uniform(size: f64) -> Result<Self, GeometryError> {
        Self::new(size, size, size)
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half-extents along local X/Y/Z.
    #[inline]
    pub fn half_extents(&self) -> DVec3 {
        DVec3::new(self.depth, self.width, self.height) * 0.5
    }
}

/// A rectangular box with a center, edge lengths and an arbitrary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cuboid {
    position: DVec3,
    size: CuboidSize,
    orientation: Orientation,
}

impl Cuboid {
    /// Unit cube at the origin with identity orientation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit cube centered at `position`.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Cube with edge length `size` at the origin.
    pub fn cube(size: f64) -> Result<Self, GeometryError> {
        Self::cube_at(DVec3::ZERO, size)
    }

    /// Cube with edge length `size` centered at `position`.
    pub fn cube_at(position: DVec3, size: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            position,
            size: CuboidSize::uniform(size)?,
            orientation: Orientation::identity(),
        })
    }

    /// Cuboid with the given edge lengths at the origin.
    pub fn with_size(depth: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::from_parts(DVec3::ZERO, depth, width, height)
    }

    /// Cuboid with the given center and edge lengths.
    pub fn from_parts(
        position: DVec3,
        depth: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            position,
            size: CuboidSize::new(depth, width, height)?,
            orientation: Orientation::identity(),
        })
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn size(&self) -> CuboidSize {
        self.size
    }

    pub fn depth(&self) -> f64 {
        self.size.depth
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[inline]
    pub fn half_extents(&self) -> DVec3 {
        self.size.half_extents()
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    pub fn set_position_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.position = DVec3::new(x, y, z);
    }

    /// Set the depth. On error the previous depth is kept.
    pub fn set_depth(&mut self, depth: f64) -> Result<(), GeometryError> {
        self.size.depth = validate_size(SizeAxis::Depth, depth)?;
        Ok(())
    }

    /// Set the width. On error the previous width is kept.
    pub fn set_width(&mut self, width: f64) -> Result<(), GeometryError> {
        self.size.width = validate_size(SizeAxis::Width, width)?;
        Ok(())
    }

    /// Set the height. On error the previous height is kept.
    pub fn set_height(&mut self, height: f64) -> Result<(), GeometryError> {
        self.size.height = validate_size(SizeAxis::Height, height)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: CuboidSize) {
        self.size = size;
    }

    /// Multiply every edge length by `factor`.
    pub fn scale(&mut self, factor: f64) -> Result<(), GeometryError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(GeometryError::InvalidScale(factor));
        }
        self.size = CuboidSize::new(
            self.size.depth * factor,
            self.size.width * factor,
            self.size.height * factor,
        )?;
        tracing::debug!(factor, size = ?self.size, "scaled cuboid");
        Ok(())
    }

    /// Scaled copy of this cuboid.
    pub fn scaled(&self, factor: f64) -> Result<Self, GeometryError> {
        let mut copy = *self;
        copy.scale(factor)?;
        Ok(copy)
    }

    // Orientation shortcuts. See `Orientation` for conventions.

    pub fn yaw(&mut self, radians: f64) {
        self.orientation.yaw(radians);
    }

    pub fn pitch(&mut self, radians: f64) {
        self.orientation.pitch(radians);
    }

    pub fn roll(&mut self, radians: f64) {
        self.orientation.roll(radians);
    }

    pub fn yaw_degrees(&mut self, degrees: f64) {
        self.orientation.yaw_degrees(degrees);
    }

    pub fn pitch_degrees(&mut self, degrees: f64) {
        self.orientation.pitch_degrees(degrees);
    }

    pub fn roll_degrees(&mut self, degrees: f64) {
        self.orientation.roll_degrees(degrees);
    }

    pub fn set_yaw(&mut self, radians: f64) {
        self.orientation.set_yaw(radians);
    }

    pub fn set_pitch(&mut self, radians: f64) {
        self.orientation.set_pitch(radians);
    }

    pub fn set_roll(&mut self, radians: f64) {
        self.orientation.set_roll(radians);
    }

    pub fn set_yaw_degrees(&mut self, degrees: f64) {
        self.orientation.set_yaw_degrees(degrees);
    }

    pub fn set_pitch_degrees(&mut self, degrees: f64) {
        self.orientation.set_pitch_degrees(degrees);
    }

    pub fn set_roll_degrees(&mut self, degrees: f64) {
        self.orientation.set_roll_degrees(degrees);
    }

    /// Reset the orientation to identity.
    pub fn reset_orientation(&mut self) {
        self.orientation.reset();
    }

    /// Last absolute yaw in degrees, used by [`crate::ContactFrame::YawOnly`].
    pub fn heading_degrees(&self) -> f64 {
        self.orientation.heading_degrees()
    }

    /// World position expressed in the local frame (center at the origin).
    #[inline]
    pub fn to_local(&self, world: DVec3) -> DVec3 {
        self.orientation.to_local(world - self.position)
    }

    /// Local point expressed in world space.
    #[inline]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.orientation.to_world(local) + self.position
    }

    /// True if `point` lies inside the cuboid or on its surface.
    pub fn contains_point(&self, point: DVec3) -> bool {
        let local = self.to_local(point).abs();
        local.cmple(self.half_extents()).all()
    }

    /// The eight world-space corners.
    ///
    /// The four corners of the +Z side walked from local `(+x, +y)` through
    /// `(-x, +y)`, `(-x, -y)` and `(+x, -y)`, then the -Z side in the same order.
    pub fn corners(&self) -> [DVec3; 8] {
        let h = self.half_extents();
        [
            DVec3::new(h.x, h.y, h.z),
            DVec3::new(-h.x, h.y, h.z),
            DVec3::new(-h.x, -h.y, h.z),
            DVec3::new(h.x, -h.y, h.z),
            DVec3::new(h.x, h.y, -h.z),
            DVec3::new(-h.x, h.y, -h.z),
            DVec3::new(-h.x, -h.y, -h.z),
            DVec3::new(h.x, -h.y, -h.z),
        ]
        .map(|local| self.to_world(local))
    }
}

impl AddAssign<DVec3> for Cuboid {
    fn add_assign(&mut self, offset: DVec3) {
        self.position += offset;
    }
}

impl Add<DVec3> for Cuboid {
    type Output = Cuboid;

    fn add(mut self, offset: DVec3) -> Cuboid {
        self += offset;
        self
    }
}
