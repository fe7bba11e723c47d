//! Cuboid Collide
//!
//! Sphere versus oriented cuboid face collision.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **geometry** - Plane/segment intersection and axis-aligned bounds
//! 2. **cuboid** - Oriented box with yaw/pitch/roll and local/world transforms
//! 3. **collision** - Face resolvers (current and legacy), face corners, reports
//! 4. **config** - Tolerances and the output frame for contact points
//! 5. **error** - Validation errors
//!
//! # Example
//!
//! ```
//! use cuboid_collide::{Cuboid, Face, Sphere};
//! use cuboid_collide::glam::DVec3;
//!
//! let cuboid = Cuboid::cube(2.0)?;
//! let sphere = Sphere::new(DVec3::new(10.0, 0.0, 0.0), 1.0)?;
//!
//! let result = cuboid.sphere_collision(&sphere);
//! assert_eq!(result.face, Some(Face::Front));
//! assert!((result.miss_distance - 8.0).abs() < 1e-9);
//! # Ok::<(), cuboid_collide::GeometryError>(())
//! ```

pub mod collision;
pub mod config;
pub mod cuboid;
pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use collision::{
    compare, face_corners, sphere_collision, sphere_collision_legacy, CollisionResult,
    Comparison, Face, Sphere,
};
pub use config::{CollisionConfig, ContactFrame};
pub use cuboid::{Cuboid, CuboidSize, Orientation};
pub use error::{GeometryError, SizeAxis};
pub use geometry::{Aabb, Plane};

pub use glam;
