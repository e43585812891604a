use std::path::Path;

use color_eyre::eyre::WrapErr;
use cube_core::{Color, CubeState, InvalidDimensionsError};
use log::debug;
use serde::{Deserialize, Serialize};

/// The initial sticker layout, one list of rows per face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub right: Vec<Vec<Color>>,
    pub left: Vec<Vec<Color>>,
    pub up: Vec<Vec<Color>>,
    pub down: Vec<Vec<Color>>,
    pub front: Vec<Vec<Color>>,
    pub back: Vec<Vec<Color>>,
}

impl LayoutConfig {
    pub fn load(path: &Path) -> color_eyre::Result<LayoutConfig> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read layout file {}", path.display()))?;
        let config = toml::from_str::<LayoutConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse layout file {}", path.display()))?;
        debug!(target: "config", "Loaded layout from {}", path.display());
        Ok(config)
    }

    pub fn into_cube_state(self) -> Result<CubeState, InvalidDimensionsError> {
        CubeState::new(&[
            self.right, self.left, self.up, self.down, self.front, self.back,
        ])
    }
}

impl From<&CubeState> for LayoutConfig {
    fn from(cube: &CubeState) -> Self {
        let [right, left, up, down, front, back] = cube
            .stickers()
            .map(|grid| grid.iter().map(|row| row.to_vec()).collect());
        LayoutConfig {
            right,
            left,
            up,
            down,
            front,
            back,
        }
    }
}
