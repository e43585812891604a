//! One row per [`Move`], in `Move::ALL` order. Each row was derived by rotating
//! sticker positions and normals about the move's axis in the frame of
//! [`crate::mapper`].

use super::{EdgeSubstitution, FaceMapping, MoveTable};
use crate::{
    face::Face::{Back, Down, Front, Left, Right, Up},
    grid::{
        GridTransform::{
            AntiTranspose, Clockwise, CounterClockwise, Half, Identity, MirrorHorizontal, Transpose,
        },
        Line::{Col, Row},
    },
};

#[rustfmt::skip]
pub(super) static MOVE_TABLES: [MoveTable; 24] = [
    // R
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Right, Clockwise),
        ],
        edges: &[
            EdgeSubstitution::new(Up, Col(2), Front, Col(2)),
            EdgeSubstitution::reversed(Down, Col(2), Back, Col(0)),
            EdgeSubstitution::new(Front, Col(2), Down, Col(2)),
            EdgeSubstitution::reversed(Back, Col(0), Up, Col(2)),
        ],
    },
    // RInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Right, CounterClockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Up, Col(2), Back, Col(0)),
            EdgeSubstitution::new(Down, Col(2), Front, Col(2)),
            EdgeSubstitution::new(Front, Col(2), Up, Col(2)),
            EdgeSubstitution::reversed(Back, Col(0), Down, Col(2)),
        ],
    },
    // L
    MoveTable {
        faces: &[
            FaceMapping::new(Left, Left, Clockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Up, Col(0), Back, Col(2)),
            EdgeSubstitution::new(Down, Col(0), Front, Col(0)),
            EdgeSubstitution::new(Front, Col(0), Up, Col(0)),
            EdgeSubstitution::reversed(Back, Col(2), Down, Col(0)),
        ],
    },
    // LInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Left, Left, CounterClockwise),
        ],
        edges: &[
            EdgeSubstitution::new(Up, Col(0), Front, Col(0)),
            EdgeSubstitution::reversed(Down, Col(0), Back, Col(2)),
            EdgeSubstitution::new(Front, Col(0), Down, Col(0)),
            EdgeSubstitution::reversed(Back, Col(2), Up, Col(0)),
        ],
    },
    // U
    MoveTable {
        faces: &[
            FaceMapping::new(Up, Up, CounterClockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Right, Row(2), Back, Row(2)),
            EdgeSubstitution::reversed(Left, Row(2), Front, Row(2)),
            EdgeSubstitution::reversed(Front, Row(2), Right, Row(2)),
            EdgeSubstitution::reversed(Back, Row(2), Left, Row(2)),
        ],
    },
    // UInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Up, Up, Clockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Right, Row(2), Front, Row(2)),
            EdgeSubstitution::reversed(Left, Row(2), Back, Row(2)),
            EdgeSubstitution::reversed(Front, Row(2), Left, Row(2)),
            EdgeSubstitution::reversed(Back, Row(2), Right, Row(2)),
        ],
    },
    // D
    MoveTable {
        faces: &[
            FaceMapping::new(Down, Down, CounterClockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Right, Row(0), Front, Row(0)),
            EdgeSubstitution::reversed(Left, Row(0), Back, Row(0)),
            EdgeSubstitution::reversed(Front, Row(0), Left, Row(0)),
            EdgeSubstitution::reversed(Back, Row(0), Right, Row(0)),
        ],
    },
    // DInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Down, Down, Clockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Right, Row(0), Back, Row(0)),
            EdgeSubstitution::reversed(Left, Row(0), Front, Row(0)),
            EdgeSubstitution::reversed(Front, Row(0), Right, Row(0)),
            EdgeSubstitution::reversed(Back, Row(0), Left, Row(0)),
        ],
    },
    // F
    MoveTable {
        faces: &[
            FaceMapping::new(Front, Front, CounterClockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Right, Col(2), Up, Row(0)),
            EdgeSubstitution::reversed(Left, Col(0), Down, Row(2)),
            EdgeSubstitution::new(Up, Row(0), Left, Col(0)),
            EdgeSubstitution::new(Down, Row(2), Right, Col(2)),
        ],
    },
    // FInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Front, Front, Clockwise),
        ],
        edges: &[
            EdgeSubstitution::new(Right, Col(2), Down, Row(2)),
            EdgeSubstitution::new(Left, Col(0), Up, Row(0)),
            EdgeSubstitution::reversed(Up, Row(0), Right, Col(2)),
            EdgeSubstitution::reversed(Down, Row(2), Left, Col(0)),
        ],
    },
    // B
    MoveTable {
        faces: &[
            FaceMapping::new(Back, Back, CounterClockwise),
        ],
        edges: &[
            EdgeSubstitution::new(Right, Col(0), Down, Row(0)),
            EdgeSubstitution::new(Left, Col(2), Up, Row(2)),
            EdgeSubstitution::reversed(Up, Row(2), Right, Col(0)),
            EdgeSubstitution::reversed(Down, Row(0), Left, Col(2)),
        ],
    },
    // BInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Back, Back, Clockwise),
        ],
        edges: &[
            EdgeSubstitution::reversed(Right, Col(0), Up, Row(2)),
            EdgeSubstitution::reversed(Left, Col(2), Down, Row(0)),
            EdgeSubstitution::new(Up, Row(2), Left, Col(2)),
            EdgeSubstitution::new(Down, Row(0), Right, Col(0)),
        ],
    },
    // M
    MoveTable {
        faces: &[],
        edges: &[
            EdgeSubstitution::reversed(Up, Col(1), Back, Col(1)),
            EdgeSubstitution::new(Down, Col(1), Front, Col(1)),
            EdgeSubstitution::new(Front, Col(1), Up, Col(1)),
            EdgeSubstitution::reversed(Back, Col(1), Down, Col(1)),
        ],
    },
    // MInverse
    MoveTable {
        faces: &[],
        edges: &[
            EdgeSubstitution::new(Up, Col(1), Front, Col(1)),
            EdgeSubstitution::reversed(Down, Col(1), Back, Col(1)),
            EdgeSubstitution::new(Front, Col(1), Down, Col(1)),
            EdgeSubstitution::reversed(Back, Col(1), Up, Col(1)),
        ],
    },
    // E
    MoveTable {
        faces: &[],
        edges: &[
            EdgeSubstitution::reversed(Right, Row(1), Front, Row(1)),
            EdgeSubstitution::reversed(Left, Row(1), Back, Row(1)),
            EdgeSubstitution::reversed(Front, Row(1), Left, Row(1)),
            EdgeSubstitution::reversed(Back, Row(1), Right, Row(1)),
        ],
    },
    // EInverse
    MoveTable {
        faces: &[],
        edges: &[
            EdgeSubstitution::reversed(Right, Row(1), Back, Row(1)),
            EdgeSubstitution::reversed(Left, Row(1), Front, Row(1)),
            EdgeSubstitution::reversed(Front, Row(1), Right, Row(1)),
            EdgeSubstitution::reversed(Back, Row(1), Left, Row(1)),
        ],
    },
    // S
    MoveTable {
        faces: &[],
        edges: &[
            EdgeSubstitution::reversed(Right, Col(1), Up, Row(1)),
            EdgeSubstitution::reversed(Left, Col(1), Down, Row(1)),
            EdgeSubstitution::new(Up, Row(1), Left, Col(1)),
            EdgeSubstitution::new(Down, Row(1), Right, Col(1)),
        ],
    },
    // SInverse
    MoveTable {
        faces: &[],
        edges: &[
            EdgeSubstitution::new(Right, Col(1), Down, Row(1)),
            EdgeSubstitution::new(Left, Col(1), Up, Row(1)),
            EdgeSubstitution::reversed(Up, Row(1), Right, Col(1)),
            EdgeSubstitution::reversed(Down, Row(1), Left, Col(1)),
        ],
    },
    // X
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Right, Clockwise),
            FaceMapping::new(Left, Left, CounterClockwise),
            FaceMapping::new(Up, Front, Identity),
            FaceMapping::new(Down, Back, Half),
            FaceMapping::new(Front, Down, Identity),
            FaceMapping::new(Back, Up, Half),
        ],
        edges: &[],
    },
    // XInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Right, CounterClockwise),
            FaceMapping::new(Left, Left, Clockwise),
            FaceMapping::new(Up, Back, Half),
            FaceMapping::new(Down, Front, Identity),
            FaceMapping::new(Front, Up, Identity),
            FaceMapping::new(Back, Down, Half),
        ],
        edges: &[],
    },
    // Y
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Back, MirrorHorizontal),
            FaceMapping::new(Left, Front, MirrorHorizontal),
            FaceMapping::new(Up, Up, CounterClockwise),
            FaceMapping::new(Down, Down, Clockwise),
            FaceMapping::new(Front, Right, MirrorHorizontal),
            FaceMapping::new(Back, Left, MirrorHorizontal),
        ],
        edges: &[],
    },
    // YInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Front, MirrorHorizontal),
            FaceMapping::new(Left, Back, MirrorHorizontal),
            FaceMapping::new(Up, Up, Clockwise),
            FaceMapping::new(Down, Down, CounterClockwise),
            FaceMapping::new(Front, Left, MirrorHorizontal),
            FaceMapping::new(Back, Right, MirrorHorizontal),
        ],
        edges: &[],
    },
    // Z
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Up, AntiTranspose),
            FaceMapping::new(Left, Down, AntiTranspose),
            FaceMapping::new(Up, Left, Transpose),
            FaceMapping::new(Down, Right, Transpose),
            FaceMapping::new(Front, Front, CounterClockwise),
            FaceMapping::new(Back, Back, Clockwise),
        ],
        edges: &[],
    },
    // ZInverse
    MoveTable {
        faces: &[
            FaceMapping::new(Right, Down, Transpose),
            FaceMapping::new(Left, Up, Transpose),
            FaceMapping::new(Up, Right, AntiTranspose),
            FaceMapping::new(Down, Left, AntiTranspose),
            FaceMapping::new(Front, Front, Clockwise),
            FaceMapping::new(Back, Back, CounterClockwise),
        ],
        edges: &[],
    },
];
