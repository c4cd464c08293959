//! Axis-aligned face directions and rotation axes.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the six directions a cuboid face can point.
///
/// The `repr(u8)` discriminant doubles as the slot index in
/// [`crate::Element::faces`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// −Y.
    Down = 0,
    /// +Y.
    Up = 1,
    /// −Z.
    North = 2,
    /// +Z.
    South = 3,
    /// −X.
    West = 4,
    /// +X.
    East = 5,
}

impl Direction {
    /// All six directions in face-slot order.
    pub const ALL: [Direction; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Unit integer vector pointing out of the face.
    pub fn vector(self) -> IVec3 {
        match self {
            Self::Down => IVec3::NEG_Y,
            Self::Up => IVec3::Y,
            Self::North => IVec3::NEG_Z,
            Self::South => IVec3::Z,
            Self::West => IVec3::NEG_X,
            Self::East => IVec3::X,
        }
    }

    /// [`Self::vector`] as floats.
    pub fn vector_f32(self) -> Vec3 {
        self.vector().as_vec3()
    }

    /// Looks up the direction whose unit vector equals `v`.
    pub fn from_vector(v: IVec3) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// The axis this direction runs along.
    pub fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Returns the face-slot index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A principal axis, used for element rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Positive unit vector along the axis.
    pub fn unit_vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}
