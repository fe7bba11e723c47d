//! Tunable tolerances and output-frame selection for collision queries.

/// Inverse transform used to express box-local results in output space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFrame {
    /// Exact inverse of the forward transform: `Oᵀ·local + center`.
    /// Correct for any combination of yaw, pitch and roll.
    #[default]
    Full,
    /// Historical behaviour: `R_z(-heading)·(local + center)`.
    ///
    /// Only the recorded heading is undone and the center is added before
    /// rotating, so results match [`ContactFrame::Full`] only for a pure yaw
    /// about a box centered at the origin. The heading is the last absolute
    /// yaw (`set_yaw*`); relative yaws applied since then are not undone.
    YawOnly,
}

/// Configuration for sphere/cuboid collision queries.
#[derive(Debug, Clone)]
pub struct CollisionConfig {
    /// Below this `|n·(b - a)|` a segment is treated as parallel to a plane. Default: 1e-10.
    pub parallel_epsilon: f64,
    /// Miss distances below this are reported as an exact collision (0.0). Default: 1e-10.
    pub contact_epsilon: f64,
    /// Slack applied to face-bounds and AABB containment tests. Default: 1e-9.
    pub containment_tolerance: f64,
    /// Output frame for points of contact and face corners. Default: [`ContactFrame::Full`].
    pub contact_frame: ContactFrame,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            parallel_epsilon: 1e-10,
            contact_epsilon: 1e-10,
            containment_tolerance: 1e-9,
            contact_frame: ContactFrame::Full,
        }
    }
}

impl CollisionConfig {
    /// Default tolerances with the historical yaw-only output frame.
    pub fn yaw_only() -> Self {
        Self {
            contact_frame: ContactFrame::YawOnly,
            ..Default::default()
        }
    }
}
