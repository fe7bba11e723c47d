//! Face identifiers and the ordered face descriptor table.

use glam::DVec3;

use crate::geometry::Plane;
use crate::GeometryError;

/// One of the six faces of a cuboid, numbered in priority order.
///
/// In the local frame: Front = +X, Right = -Y, Top = +Z, Left = +Y,
/// Bottom = -Z, Back = -X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Face {
    Front = 1,
    Right = 2,
    Top = 3,
    Left = 4,
    Bottom = 5,
    Back = 6,
}

impl Face {
    /// All faces in the order they are tested.
    pub const PRIORITY: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Top,
        Face::Left,
        Face::Bottom,
        Face::Back,
    ];

    /// Face number, 1 to 6.
    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Map a face number to a face. `-1` is the "no face" sentinel.
    pub fn from_index(index: i32) -> Result<Option<Face>, GeometryError> {
        match index {
            -1 => Ok(None),
            1..=6 => Ok(Some(Face::PRIORITY[(index - 1) as usize])),
            _ => Err(GeometryError::InvalidFace(index)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "Front",
            Face::Right => "Right",
            Face::Top => "Top",
            Face::Left => "Left",
            Face::Bottom => "Bottom",
            Face::Back => "Back",
        }
    }

    pub(crate) fn descriptor(self) -> &'static FaceDescriptor {
        &FACE_DESCRIPTORS[(self.index() - 1) as usize]
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a face is built and bounded in the cuboid's local frame.
#[derive(Debug)]
pub(crate) struct FaceDescriptor {
    pub face: Face,
    /// Corner sign patterns scaled by the half-extents. The first three
    /// define the supporting plane; all four are the presentation quad.
    corner_signs: [DVec3; 4],
    /// Local axes spanning the face.
    in_plane: [usize; 2],
}

impl FaceDescriptor {
    /// Quad corners in the local frame.
    pub fn local_corners(&self, half_extents: DVec3) -> [DVec3; 4] {
        self.corner_signs.map(|signs| signs * half_extents)
    }

    /// Supporting plane in the local frame.
    pub fn plane(&self, half_extents: DVec3) -> Plane {
        let [p0, p1, p2, _] = self.local_corners(half_extents);
        Plane::from_triangle(p0, p1, p2)
    }

    /// True if the in-plane coordinates of `point` fall within the face.
    pub fn bounds_contain(&self, point: DVec3, half_extents: DVec3, tolerance: f64) -> bool {
        self.in_plane
            .iter()
            .all(|&axis| point[axis].abs() <= half_extents[axis] + tolerance)
    }
}

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/// Descriptors in priority order.
pub(crate) static FACE_DESCRIPTORS: [FaceDescriptor; 6] = [
    FaceDescriptor {
        face: Face::Front,
        corner_signs: [
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, -1.0, 1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(1.0, 1.0, -1.0),
        ],
        in_plane: [Y, Z],
    },
    FaceDescriptor {
        face: Face::Right,
        corner_signs: [
            DVec3::new(1.0, -1.0, 1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(-1.0, -1.0, -1.0),
            DVec3::new(-1.0, -1.0, 1.0),
        ],
        in_plane: [X, Z],
    },
    FaceDescriptor {
        face: Face::Top,
        corner_signs: [
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, 1.0),
            DVec3::new(-1.0, -1.0, 1.0),
            DVec3::new(1.0, -1.0, 1.0),
        ],
        in_plane: [X, Y],
    },
    FaceDescriptor {
        face: Face::Left,
        corner_signs: [
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, -1.0),
            DVec3::new(1.0, 1.0, -1.0),
        ],
        in_plane: [X, Z],
    },
    FaceDescriptor {
        face: Face::Bottom,
        corner_signs: [
            DVec3::new(1.0, 1.0, -1.0),
            DVec3::new(1.0, -1.0, -1.0),
            DVec3::new(-1.0, -1.0, -1.0),
            DVec3::new(-1.0, 1.0, -1.0),
        ],
        in_plane: [X, Y],
    },
    FaceDescriptor {
        face: Face::Back,
        corner_signs: [
            DVec3::new(-1.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, -1.0),
            DVec3::new(-1.0, -1.0, -1.0),
            DVec3::new(-1.0, -1.0, 1.0),
        ],
        in_plane: [Y, Z],
    },
];
