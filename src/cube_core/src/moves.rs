use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::{
    face::Face,
    grid::{GridTransform, Line, Stickers},
};

mod table;

/// A quarter turn. Variants come in (move, inverse) pairs so that the inverse
/// of a move is its neighbour in [`Move::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    R,
    RInverse,
    L,
    LInverse,
    U,
    UInverse,
    D,
    DInverse,
    F,
    FInverse,
    B,
    BInverse,
    /// Middle layer, turning like L
    M,
    MInverse,
    /// Equator layer, turning like D
    E,
    EInverse,
    /// Standing layer, turning like F
    S,
    SInverse,
    /// Whole cube, turning like R
    X,
    XInverse,
    /// Whole cube, turning like U
    Y,
    YInverse,
    /// Whole cube, turning like F
    Z,
    ZInverse,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("Unknown move `{0}`")]
    UnknownMove(String),
    #[error("Unknown key `{0}`, expected one of rludfbmesxyz or the upper-case key for an inverse")]
    UnknownKey(char),
}

/// Copies a whole face grid from `source` into the `target` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceMapping {
    pub target: Face,
    pub source: Face,
    pub transform: GridTransform,
}

/// Replaces one line of `target` with a line read from `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSubstitution {
    pub target: Face,
    pub target_line: Line,
    pub source: Face,
    pub source_line: Line,
    pub reversed: bool,
}

/// The declarative description of a move. Everything is read from the
/// pre-move stickers, so the order of the entries does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTable {
    pub faces: &'static [FaceMapping],
    pub edges: &'static [EdgeSubstitution],
}

impl FaceMapping {
    pub const fn new(target: Face, source: Face, transform: GridTransform) -> Self {
        FaceMapping {
            target,
            source,
            transform,
        }
    }
}

impl EdgeSubstitution {
    pub const fn new(target: Face, target_line: Line, source: Face, source_line: Line) -> Self {
        EdgeSubstitution {
            target,
            target_line,
            source,
            source_line,
            reversed: false,
        }
    }

    pub const fn reversed(
        target: Face,
        target_line: Line,
        source: Face,
        source_line: Line,
    ) -> Self {
        EdgeSubstitution {
            target,
            target_line,
            source,
            source_line,
            reversed: true,
        }
    }
}

impl MoveTable {
    /// Computes the stickers after this move. `prev` is never written to; the
    /// result is a fresh array.
    pub fn apply<S: Copy>(&self, prev: &Stickers<S>) -> Stickers<S> {
        let mut next = *prev;

        for mapping in self.faces {
            next[mapping.target as usize] = mapping.transform.apply(&prev[mapping.source as usize]);
        }

        for edge in self.edges {
            let mut values = edge.source_line.extract(&prev[edge.source as usize]);
            if edge.reversed {
                values.reverse();
            }
            edge.target_line
                .splice(&mut next[edge.target as usize], values);
        }

        next
    }
}

impl Move {
    pub const ALL: [Self; 24] = {
        use Move::*;
        let v = [
            R, RInverse, L, LInverse, U, UInverse, D, DInverse, F, FInverse, B, BInverse, M,
            MInverse, E, EInverse, S, SInverse, X, XInverse, Y, YInverse, Z, ZInverse,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::ALL[self as usize ^ 1]
    }

    pub const fn is_inverse(self) -> bool {
        self as usize & 1 == 1
    }

    /// Whether this move turns the whole cube rather than a single layer.
    pub const fn is_roll(self) -> bool {
        matches!(
            self,
            Move::X | Move::XInverse | Move::Y | Move::YInverse | Move::Z | Move::ZInverse
        )
    }

    /// The face whose grid turns with this move, if the move is a face turn.
    pub const fn turned_face(self) -> Option<Face> {
        match self {
            Move::R | Move::RInverse => Some(Face::Right),
            Move::L | Move::LInverse => Some(Face::Left),
            Move::U | Move::UInverse => Some(Face::Up),
            Move::D | Move::DInverse => Some(Face::Down),
            Move::F | Move::FInverse => Some(Face::Front),
            Move::B | Move::BInverse => Some(Face::Back),
            _ => None,
        }
    }

    pub fn table(self) -> &'static MoveTable {
        &table::MOVE_TABLES[self as usize]
    }

    pub fn apply<S: Copy>(self, stickers: &Stickers<S>) -> Stickers<S> {
        self.table().apply(stickers)
    }

    pub const fn notation(self) -> &'static str {
        match self {
            Move::R => "R",
            Move::RInverse => "R'",
            Move::L => "L",
            Move::LInverse => "L'",
            Move::U => "U",
            Move::UInverse => "U'",
            Move::D => "D",
            Move::DInverse => "D'",
            Move::F => "F",
            Move::FInverse => "F'",
            Move::B => "B",
            Move::BInverse => "B'",
            Move::M => "M",
            Move::MInverse => "M'",
            Move::E => "E",
            Move::EInverse => "E'",
            Move::S => "S",
            Move::SInverse => "S'",
            Move::X => "x",
            Move::XInverse => "x'",
            Move::Y => "y",
            Move::YInverse => "y'",
            Move::Z => "z",
            Move::ZInverse => "z'",
        }
    }

    /// The keyboard binding: a lower-case key triggers the move, the
    /// upper-case key its inverse.
    ///
    /// # Errors
    ///
    /// If no move is bound to `key`.
    pub fn from_key(key: char) -> Result<Move, ParseMoveError> {
        let base = match key.to_ascii_lowercase() {
            'r' => Move::R,
            'l' => Move::L,
            'u' => Move::U,
            'd' => Move::D,
            'f' => Move::F,
            'b' => Move::B,
            'm' => Move::M,
            'e' => Move::E,
            's' => Move::S,
            'x' => Move::X,
            'y' => Move::Y,
            'z' => Move::Z,
            _ => return Err(ParseMoveError::UnknownKey(key)),
        };

        Ok(if key.is_ascii_uppercase() {
            base.inverse()
        } else {
            base
        })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|mv| mv.notation() == s)
            .ok_or_else(|| ParseMoveError::UnknownMove(s.to_owned()))
    }
}

/// Parses whitespace separated moves such as `"R U2 R' x"`. A `2` in a token
/// stands for two quarter turns.
///
/// # Errors
///
/// If a token is not a move.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Move>, ParseMoveError> {
    let mut moves = Vec::new();

    for token in sequence.split_whitespace() {
        let (mv, repeat) = match token.split_once('2') {
            Some((head, tail)) => (
                format!("{head}{tail}")
                    .parse::<Move>()
                    .map_err(|_| ParseMoveError::UnknownMove(token.to_owned()))?,
                2,
            ),
            None => (token.parse::<Move>()?, 1),
        };
        moves.extend(std::iter::repeat_n(mv, repeat));
    }

    Ok(moves)
}
