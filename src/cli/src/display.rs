//! Terminal rendering of a cube, standing in for the 3-D view.
//!
//! The net is the usual cross: Up on top, then Left, Front, Right and Back,
//! then Down. Each face is drawn as seen from outside the cube, oriented so
//! that neighbouring cells across a fold belong to the same cubie.

use std::fmt::Write;

use cube_core::{Color, Face, Stickers, build_cubie_grid};
use itertools::Itertools;
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// True-color background blocks
    Blocks,
    /// One letter per sticker
    Letters,
}

/// Where each face sits in the net, as (band, column) in units of faces.
const NET: [(Face, usize, usize); 6] = [
    (Face::Up, 0, 1),
    (Face::Left, 1, 0),
    (Face::Front, 1, 1),
    (Face::Right, 1, 2),
    (Face::Back, 1, 3),
    (Face::Down, 2, 1),
];

/// The grid cell drawn at visual row `vr` and column `vc` of `face`'s block,
/// counting from its top left corner.
pub const fn grid_cell(face: Face, vr: usize, vc: usize) -> (usize, usize) {
    match face {
        Face::Right | Face::Left => (2 - vr, 2 - vc),
        Face::Up | Face::Down | Face::Front | Face::Back => (2 - vr, vc),
    }
}

fn letter(color: Color) -> char {
    match color {
        Color::Green => 'G',
        Color::Blue => 'B',
        Color::White => 'W',
        Color::Yellow => 'Y',
        Color::Orange => 'O',
        Color::Red => 'R',
    }
}

fn cell(color: Color, style: Style) -> String {
    match style {
        Style::Blocks => {
            let (r, g, b) = color.rgb();
            "  ".on_truecolor(r, g, b).to_string()
        }
        Style::Letters => format!("{} ", letter(color)),
    }
}

pub fn render_net(stickers: &Stickers<Color>, style: Style) -> String {
    let mut out = String::new();

    for band in 0..3 {
        for vr in 0..3 {
            let mut line = String::new();
            for column in 0..4 {
                match NET.iter().find(|&&(_, b, c)| b == band && c == column) {
                    Some(&(face, _, _)) => {
                        for vc in 0..3 {
                            let (row, col) = grid_cell(face, vr, vc);
                            line.push_str(&cell(stickers[face as usize][row][col], style));
                        }
                    }
                    None => line.push_str("      "),
                }
                line.push(' ');
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

/// One line per visible cubie: grid position, mesh translation, kind and the
/// color on each of its faces.
pub fn render_cubies(stickers: &Stickers<Color>, spacing: f32) -> String {
    let grid = build_cubie_grid(stickers);
    let mut out = String::new();

    for (position, cubie) in grid.iter().filter(|(_, cubie)| cubie.sticker_count() > 0) {
        let translation = position.translation(spacing);
        let faces = cubie
            .faces()
            .map(|(face, color)| format!("{}={color}", face.letter()))
            .join(" ");
        // Writing into a String can't fail
        let _ = writeln!(
            out,
            "({}, {}, {})  [{:>6.1} {:>6.1} {:>6.1}]  {:<6}  {faces}",
            position.x,
            position.y,
            position.z,
            translation.x,
            translation.y,
            translation.z,
            format!("{:?}", cubie.kind()).to_lowercase(),
        );
    }

    out
}
