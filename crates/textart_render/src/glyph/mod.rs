pub mod grid;
pub mod mapper;
pub mod palette;

use std::str::FromStr;

use crate::RenderError;

/// Rendering mode: selects the glyph palette and the sampling stride.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Character-density gradient, one glyph per source column.
    Ascii,
    /// Dot-glyph stippling over 2x2 blocks.
    Dot,
    /// Block-shading pixel art over 10x10 blocks.
    Pixel,
}

impl RenderMode {
    /// (row, column) sampling strides in source pixels. Rows are skipped
    /// more aggressively because character cells are taller than wide.
    pub fn strides(self) -> (usize, usize) {
        match self {
            RenderMode::Ascii => (2, 1),
            RenderMode::Dot => (2, 2),
            RenderMode::Pixel => (10, 10),
        }
    }
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "ascii" => Ok(RenderMode::Ascii),
            "dot" => Ok(RenderMode::Dot),
            "pixel" => Ok(RenderMode::Pixel),
            other => Err(RenderError::UnsupportedMode(other.to_owned())),
        }
    }
}
