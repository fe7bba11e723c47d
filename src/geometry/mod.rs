//! Geometric primitives shared by the collision resolvers.

mod bounds;
mod plane;

pub use bounds::Aabb;
pub use plane::{LineHit, Plane};
