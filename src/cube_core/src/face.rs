use std::fmt::Display;

use glam::IVec3;
use thiserror::Error;

/// One of the six sides of the cube. The discriminant is the face's slot in a
/// sticker array.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Right,
    Left,
    Up,
    Down,
    Front,
    Back,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid face tag {0}, expected a value between 0 and 5")]
pub struct InvalidFaceError(pub usize);

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Right, Left, Up, Down, Front, Back];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The outward unit normal in the renderer's frame (x to the right, y up,
    /// z towards the viewer).
    pub const fn normal(self) -> IVec3 {
        match self {
            Face::Right => IVec3::X,
            Face::Left => IVec3::NEG_X,
            Face::Up => IVec3::Y,
            Face::Down => IVec3::NEG_Y,
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
        }
    }

    pub const fn opposite(self) -> Face {
        match self {
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The face letter used by move notation.
    pub const fn letter(self) -> char {
        match self {
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }
}

impl TryFrom<usize> for Face {
    type Error = InvalidFaceError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Face::ALL.get(value).copied().ok_or(InvalidFaceError(value))
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
