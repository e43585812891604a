use log::{debug, trace};
use thiserror::Error;

use crate::{
    color::Color,
    face::Face,
    grid::{FaceGrid, Stickers},
    moves::Move,
};

/// The 54 stickers of a cube, six 3x3 grids in `Face` order.
///
/// Moves only ever permute stickers. Each move computes a complete new sticker
/// array from the current one and swaps it in, so no face grid is ever shared
/// between two slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState<S = Color> {
    stickers: Stickers<S>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDimensionsError {
    #[error("Invalid face count, expected 6 faces but got {actual}")]
    FaceCount { actual: usize },
    #[error("Invalid row count on the {face} face, expected 3 rows but got {actual}")]
    RowCount { face: Face, actual: usize },
    #[error("Invalid row length on row {row} of the {face} face, expected 3 stickers but got {actual}")]
    RowLength { face: Face, row: usize, actual: usize },
}

macro_rules! named_moves {
    ($($(#[$meta:meta])* $name:ident => $mv:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self) {
                self.apply(Move::$mv);
            }
        )*
    };
}

impl<S: Copy> CubeState<S> {
    /// Create a cube from six faces of three rows of three stickers, in `Face`
    /// order. The input is copied.
    ///
    /// # Errors
    ///
    /// If there aren't exactly 6 faces, or a face isn't exactly 3x3.
    pub fn new<F, R>(faces: &[F]) -> Result<Self, InvalidDimensionsError>
    where
        F: AsRef<[R]>,
        R: AsRef<[S]>,
    {
        if faces.len() != 6 {
            return Err(InvalidDimensionsError::FaceCount {
                actual: faces.len(),
            });
        }

        for (face, rows) in Face::ALL.into_iter().zip(faces) {
            let rows = rows.as_ref();
            if rows.len() != 3 {
                return Err(InvalidDimensionsError::RowCount {
                    face,
                    actual: rows.len(),
                });
            }

            for (row, stickers) in rows.iter().enumerate() {
                let actual = stickers.as_ref().len();
                if actual != 3 {
                    return Err(InvalidDimensionsError::RowLength { face, row, actual });
                }
            }
        }

        debug!(target: "cube_state", "Created a cube from a 6x3x3 sticker layout");

        Ok(Self::from_stickers(std::array::from_fn(|face| {
            std::array::from_fn(|row| std::array::from_fn(|col| faces[face].as_ref()[row].as_ref()[col]))
        })))
    }

    pub fn from_stickers(stickers: Stickers<S>) -> Self {
        CubeState { stickers }
    }

    /// A copy of the current stickers. Changing it does not affect the cube.
    pub fn stickers(&self) -> Stickers<S> {
        self.stickers
    }

    pub fn face(&self, face: Face) -> FaceGrid<S> {
        self.stickers[face as usize]
    }

    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Option<S> {
        self.stickers[face as usize].get(row)?.get(col).copied()
    }

    pub fn apply(&mut self, mv: Move) {
        self.stickers = mv.apply(&self.stickers);
        trace!(target: "cube_state", "Applied {mv}");
    }

    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Returns a new cube with `moves` applied, leaving `self` untouched.
    #[must_use]
    pub fn applied(&self, moves: impl IntoIterator<Item = Move>) -> Self {
        let mut cube = self.clone();
        cube.apply_all(moves);
        cube
    }

    /// Whether every face shows a single value.
    pub fn is_solved(&self) -> bool
    where
        S: PartialEq,
    {
        self.stickers
            .iter()
            .all(|grid| grid.iter().flatten().all(|sticker| *sticker == grid[1][1]))
    }

    named_moves! {
        turn_right => R,
        turn_right_inverse => RInverse,
        turn_left => L,
        turn_left_inverse => LInverse,
        turn_up => U,
        turn_up_inverse => UInverse,
        turn_down => D,
        turn_down_inverse => DInverse,
        turn_front => F,
        turn_front_inverse => FInverse,
        turn_back => B,
        turn_back_inverse => BInverse,
        /// Turns the layer between Left and Right, in the direction of `turn_left`.
        slice_middle => M,
        slice_middle_inverse => MInverse,
        /// Turns the layer between Up and Down, in the direction of `turn_down`.
        slice_equator => E,
        slice_equator_inverse => EInverse,
        /// Turns the layer between Front and Back, in the direction of `turn_front`.
        slice_standing => S,
        slice_standing_inverse => SInverse,
        /// Rotates the whole cube in the direction of `turn_right`.
        roll_x => X,
        roll_x_inverse => XInverse,
        /// Rotates the whole cube in the direction of `turn_up`.
        roll_y => Y,
        roll_y_inverse => YInverse,
        /// Rotates the whole cube in the direction of `turn_front`.
        roll_z => Z,
        roll_z_inverse => ZInverse,
    }
}

impl CubeState<Color> {
    pub fn solved() -> Self {
        CubeState::from_stickers(Face::ALL.map(|face| [[Color::solved_for(face); 3]; 3]))
    }
}

impl Default for CubeState<Color> {
    fn default() -> Self {
        CubeState::solved()
    }
}
