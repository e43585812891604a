use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::face::Face;

/// A sticker color. The palette is fixed, but after moves any arrangement of
/// it is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Blue,
    White,
    Yellow,
    Orange,
    Red,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color `{0}`, expected one of green, blue, white, yellow, orange or red")]
pub struct ParseColorError(pub String);

impl Color {
    pub const ALL: [Self; 6] = [
        Color::Green,
        Color::Blue,
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
    ];

    /// The color every sticker of `face` has on a solved cube.
    pub const fn solved_for(face: Face) -> Color {
        match face {
            Face::Right => Color::Green,
            Face::Left => Color::Blue,
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Orange,
            Face::Back => Color::Red,
        }
    }

    pub const fn hex(self) -> u32 {
        match self {
            Color::Green => 0x00ff00,
            Color::Blue => 0x0000ff,
            Color::White => 0xffffff,
            Color::Yellow => 0xffff00,
            Color::Orange => 0xff8800,
            Color::Red => 0xff0000,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn rgb(self) -> (u8, u8, u8) {
        let hex = self.hex();
        ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Red => "red",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}
