//! Error types for cuboid construction and queries.

/// Axis a size value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeAxis {
    Depth,
    Width,
    Height,
}

impl std::fmt::Display for SizeAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SizeAxis::Depth => "depth",
            SizeAxis::Width => "width",
            SizeAxis::Height => "height",
        };
        f.write_str(name)
    }
}

/// Errors raised at the boundary of the geometry core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid {axis}: {value} (must be finite and greater than zero)")]
    InvalidSize { axis: SizeAxis, value: f64 },
    #[error("invalid scale factor: {0} (must be finite and greater than zero)")]
    InvalidScale(f64),
    #[error("invalid sphere radius: {0} (must be finite and non-negative)")]
    InvalidRadius(f64),
    #[error("invalid face index: {0} (expected -1 or 1..=6)")]
    InvalidFace(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeometryError::InvalidSize {
            axis: SizeAxis::Width,
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid width: -1 (must be finite and greater than zero)"
        );
        assert_eq!(
            GeometryError::InvalidFace(7).to_string(),
            "invalid face index: 7 (expected -1 or 1..=6)"
        );
    }
}
