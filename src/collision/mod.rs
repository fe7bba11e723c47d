//! Sphere versus oriented cuboid collision.
//!
//! # Algorithms
//!
//! Both resolvers walk the faces in fixed priority order
//! (Front, Right, Top, Left, Bottom, Back) and stop at the first face whose
//! supporting plane is crossed, within its bounds, by the segment joining
//! the sphere center and the cuboid center.
//!
//! - [`local`] works in the cuboid's local frame, where each face is an
//!   axis-aligned rectangle and containment is exact.
//! - [`legacy`] works in world space on explicit quad corners and tests
//!   containment against the quad's axis-aligned bounds, which is only exact
//!   for an unrotated cuboid. It is kept to compare outputs against.

mod face;
pub mod legacy;
pub mod local;

use glam::{DMat3, DVec3};

use crate::config::{CollisionConfig, ContactFrame};
use crate::cuboid::Cuboid;
use crate::GeometryError;

pub use face::Face;
pub use legacy::{legacy_face_quads, sphere_collision_legacy};
pub use local::sphere_collision;

/// A sphere probing the cuboid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: DVec3,
    radius: f64,
}

impl Sphere {
    /// Create a sphere. The radius must be finite and non-negative.
    pub fn new(center: DVec3, radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            center,
            radius: validate_radius(radius)?,
        })
    }

    /// A zero-radius sphere.
    pub fn point(center: DVec3) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_center(&mut self, center: DVec3) {
        self.center = center;
    }

    /// Set the radius. On error the previous radius is kept.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), GeometryError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }
}

fn validate_radius(radius: f64) -> Result<f64, GeometryError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(GeometryError::InvalidRadius(radius))
    }
}

/// Outcome of a sphere/cuboid query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Struck face, or `None` when the sphere center is inside the cuboid.
    pub face: Option<Face>,
    /// Gap between the sphere surface and the struck face. 0.0 means touching
    /// or overlapping.
    pub miss_distance: f64,
    /// Where the center-to-center segment crosses the struck face, in output
    /// space. The sphere center when no face was struck.
    pub point_of_contact: DVec3,
}

impl CollisionResult {
    pub(crate) fn hit(face: Face, miss_distance: f64, point_of_contact: DVec3) -> Self {
        Self {
            face: Some(face),
            miss_distance,
            point_of_contact,
        }
    }

    pub(crate) fn inside(sphere_center: DVec3) -> Self {
        Self {
            face: None,
            miss_distance: 0.0,
            point_of_contact: sphere_center,
        }
    }

    /// Face number 1..=6, or -1 when no face was struck.
    pub fn face_index(&self) -> i32 {
        self.face.map_or(-1, Face::index)
    }

    /// True when the sphere touches or overlaps the cuboid.
    pub fn is_colliding(&self) -> bool {
        self.miss_distance == 0.0
    }
}

impl std::fmt::Display for CollisionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.face.map_or("None", Face::name);
        let p = self.point_of_contact;
        writeln!(f, "Face: {} ({})", name, self.face_index())?;
        writeln!(f, "Miss Distance (m): {:.6}", self.miss_distance)?;
        write!(f, "Point on Face: ({:.6}, {:.6}, {:.6})", p.x, p.y, p.z)
    }
}

/// Results of both resolvers for the same query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub legacy: CollisionResult,
    pub current: CollisionResult,
}

impl Comparison {
    /// True if both resolvers report the same face, and miss distances and
    /// points of contact within `tolerance` of each other.
    pub fn agrees(&self, tolerance: f64) -> bool {
        self.legacy.face == self.current.face
            && (self.legacy.miss_distance - self.current.miss_distance).abs() <= tolerance
            && self
                .legacy
                .point_of_contact
                .distance(self.current.point_of_contact)
                <= tolerance
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Results (Old)")?;
        writeln!(f, "{}", self.legacy)?;
        writeln!(f, "Results (New)")?;
        write!(f, "{}", self.current)
    }
}

/// Run the legacy and current resolvers on the same query.
pub fn compare(cuboid: &Cuboid, sphere: &Sphere, config: &CollisionConfig) -> Comparison {
    Comparison {
        legacy: sphere_collision_legacy(cuboid, sphere, config),
        current: sphere_collision(cuboid, sphere, config),
    }
}

/// The four corners of `face` in output space, or four zero vectors for `None`.
pub fn face_corners(cuboid: &Cuboid, face: Option<Face>, frame: ContactFrame) -> [DVec3; 4] {
    let Some(face) = face else {
        return [DVec3::ZERO; 4];
    };
    face.descriptor()
        .local_corners(cuboid.half_extents())
        .map(|corner| to_output(cuboid, corner, frame))
}

/// Gap left after subtracting the radius; values under `epsilon` snap to 0.0.
#[inline]
pub(crate) fn miss_distance(center_to_face: f64, radius: f64, epsilon: f64) -> f64 {
    let gap = center_to_face - radius;
    if gap < epsilon {
        0.0
    } else {
        gap
    }
}

/// Express a local-frame point in output space.
pub(crate) fn to_output(cuboid: &Cuboid, local: DVec3, frame: ContactFrame) -> DVec3 {
    match frame {
        ContactFrame::Full => cuboid.to_world(local),
        ContactFrame::YawOnly => {
            let unyaw = DMat3::from_rotation_z(-cuboid.heading_degrees().to_radians());
            unyaw * (local + cuboid.position())
        }
    }
}

impl Cuboid {
    /// Current resolver with default configuration.
    pub fn sphere_collision(&self, sphere: &Sphere) -> CollisionResult {
        sphere_collision(self, sphere, &CollisionConfig::default())
    }

    /// Current resolver with explicit configuration.
    pub fn sphere_collision_with(
        &self,
        sphere: &Sphere,
        config: &CollisionConfig,
    ) -> CollisionResult {
        sphere_collision(self, sphere, config)
    }

    /// Legacy resolver with default configuration.
    pub fn sphere_collision_legacy(&self, sphere: &Sphere) -> CollisionResult {
        sphere_collision_legacy(self, sphere, &CollisionConfig::default())
    }

    /// Corners of `face` in the default output frame.
    pub fn face_corners(&self, face: Option<Face>) -> [DVec3; 4] {
        face_corners(self, face, ContactFrame::default())
    }

    /// Corners of `face` in the given output frame.
    pub fn face_corners_in(&self, face: Option<Face>, frame: ContactFrame) -> [DVec3; 4] {
        face_corners(self, face, frame)
    }
}
