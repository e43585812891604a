#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

//! The sticker model of a 3x3x3 cube: six 3x3 faces, the 24 quarter-turn
//! moves acting on them, and the mapping from stickers onto the 27 cubies a
//! renderer draws.

pub mod color;
pub mod face;
pub mod grid;
pub mod mapper;
pub mod moves;
pub mod state;

pub use color::{Color, ParseColorError};
pub use face::{Face, InvalidFaceError};
pub use grid::{FaceGrid, GridTransform, Line, Stickers};
pub use mapper::{
    CoordinateError, Cubie, CubieGrid, CubieKind, GridPosition, build_cubie_grid,
    sticker_to_grid_position, sticker_to_grid_position_raw,
};
pub use moves::{EdgeSubstitution, FaceMapping, Move, MoveTable, ParseMoveError, parse_sequence};
pub use state::{CubeState, InvalidDimensionsError};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
