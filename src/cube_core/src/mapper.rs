//! Places stickers on the 27 cubies of the renderer's 3x3x3 grid.
//!
//! The grid frame has x pointing right, y up and z towards the viewer, with
//! each coordinate in `0..=2`. A sticker's row follows y on the four side
//! faces, so row 0 is the bottom row there, and the move tables in
//! [`crate::moves`] are derived from exactly this placement.

use std::ops::Index;

use glam::{IVec3, Vec3};
use itertools::iproduct;
use thiserror::Error;

use crate::{
    face::{Face, InvalidFaceError},
    grid::Stickers,
};

/// Gap factor between neighbouring cubie meshes.
pub const CUBIE_GAP: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error(transparent)]
    InvalidFace(#[from] InvalidFaceError),
    #[error(
        "Sticker coordinate out of range, expected a row and column between 0 and 2 but got ({row}, {col})"
    )]
    OutOfRange { row: usize, col: usize },
}

impl GridPosition {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        GridPosition { x, y, z }
    }

    /// All 27 positions, x-major.
    pub fn all() -> impl Iterator<Item = GridPosition> {
        iproduct!(0..3, 0..3, 0..3).map(|(x, y, z)| GridPosition { x, y, z })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }

    /// Where a renderer should put the cubie's mesh, centered on the middle
    /// cubie.
    pub fn translation(self, spacing: f32) -> Vec3 {
        (self.as_ivec3() - IVec3::ONE).as_vec3() * spacing * CUBIE_GAP
    }
}

/// Grid position of a sticker. `row` and `col` must be in `0..3`.
const fn position_of(face: Face, row: usize, col: usize) -> GridPosition {
    match face {
        Face::Right => GridPosition::new(2, row, col),
        Face::Left => GridPosition::new(0, row, 2 - col),
        Face::Up => GridPosition::new(col, 2, 2 - row),
        Face::Down => GridPosition::new(col, 0, row),
        Face::Front => GridPosition::new(col, row, 2),
        Face::Back => GridPosition::new(2 - col, row, 0),
    }
}

/// The cubie that carries the sticker at `(face, row, col)`.
///
/// # Errors
///
/// If `row` or `col` is outside `0..3`.
pub fn sticker_to_grid_position(
    face: Face,
    row: usize,
    col: usize,
) -> Result<GridPosition, CoordinateError> {
    if row > 2 || col > 2 {
        return Err(CoordinateError::OutOfRange { row, col });
    }

    Ok(position_of(face, row, col))
}

/// Like [`sticker_to_grid_position`], for a face given by its raw tag.
///
/// # Errors
///
/// If the tag isn't a face, or `row` or `col` is outside `0..3`.
pub fn sticker_to_grid_position_raw(
    face: usize,
    row: usize,
    col: usize,
) -> Result<GridPosition, CoordinateError> {
    sticker_to_grid_position(Face::try_from(face)?, row, col)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CubieKind {
    Core,
    Center,
    Edge,
    Corner,
}

/// One of the 27 small cubes, with the stickers on its visible faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cubie<S> {
    stickers: [Option<S>; 6],
}

impl<S: Copy> Cubie<S> {
    const EMPTY: Self = Cubie {
        stickers: [None; 6],
    };

    pub fn sticker(&self, face: Face) -> Option<S> {
        self.stickers[face as usize]
    }

    /// The populated faces, in `Face` order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, S)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(|face| Some((face, self.sticker(face)?)))
    }

    pub fn sticker_count(&self) -> usize {
        self.stickers.iter().flatten().count()
    }

    pub fn kind(&self) -> CubieKind {
        match self.sticker_count() {
            0 => CubieKind::Core,
            1 => CubieKind::Center,
            2 => CubieKind::Edge,
            _ => CubieKind::Corner,
        }
    }
}

/// The 27 cubies, indexed `[x][y][z]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubieGrid<S> {
    cubies: [[[Cubie<S>; 3]; 3]; 3],
}

impl<S: Copy> CubieGrid<S> {
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, &Cubie<S>)> + '_ {
        GridPosition::all().map(|position| (position, &self[position]))
    }
}

impl<S> Index<GridPosition> for CubieGrid<S> {
    type Output = Cubie<S>;

    fn index(&self, index: GridPosition) -> &Self::Output {
        &self.cubies[index.x][index.y][index.z]
    }
}

/// Groups the 54 stickers into their cubies. Every (cubie, face) slot is
/// reached by at most one sticker.
pub fn build_cubie_grid<S: Copy>(stickers: &Stickers<S>) -> CubieGrid<S> {
    let mut cubies = [[[Cubie::EMPTY; 3]; 3]; 3];

    for (face, row, col) in iproduct!(Face::ALL, 0..3, 0..3) {
        let GridPosition { x, y, z } = position_of(face, row, col);
        let slot = &mut cubies[x][y][z].stickers[face as usize];
        debug_assert!(slot.is_none(), "{face} sticker ({row}, {col}) collides");
        *slot = Some(stickers[face as usize][row][col]);
    }

    CubieGrid { cubies }
}
