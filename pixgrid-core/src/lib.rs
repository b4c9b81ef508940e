//! pixgrid-core: the painting surface for pixgrid.
//!
//! Design rules:
//! - The grid has fixed dimensions for its whole lifetime.
//! - Cell coordinates are bounds-checked once, when a [`CellPos`] is built.
//! - Snapshots are immutable; only the live [`Grid`] is mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest number of rows or columns a grid may have.
pub const MAX_GRID_SIDE: usize = 256;

/// An opaque 8-bit-per-channel color.
/// Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = GridError;

    /// Accepts `#rrggbb` and the `#rgb` shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            6 => Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            // #abc == #aabbcc
            3 => Ok(Rgb::new(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Size of a grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let side = 1..=MAX_GRID_SIDE;
        if !side.contains(&rows) || !side.contains(&cols) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Bounds-check a coordinate. This is the only way to obtain a [`CellPos`].
    pub fn cell(&self, row: usize, col: usize) -> Option<CellPos> {
        (row < self.rows && col < self.cols).then_some(CellPos { row, col })
    }

    /// The cell at a signed offset from `from`, if it is still on the grid.
    pub fn offset(&self, from: CellPos, d_row: isize, d_col: isize) -> Option<CellPos> {
        let row = from.row.checked_add_signed(d_row)?;
        let col = from.col.checked_add_signed(d_col)?;
        self.cell(row, col)
    }
}

/// A cell coordinate that has already been checked against some [`Dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    fn index(&self, dims: Dimensions) -> usize {
        self.row * dims.cols + self.col
    }
}

/// Errors raised while building grids and colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols} (each side must be 1..=256)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid color '{value}' (expected #rrggbb or #rgb)")]
    InvalidColor { value: String },
}

pub mod grid;
pub mod tools;

pub use grid::{Grid, Snapshot};
pub use tools::{Brush, Eraser, Fill, Tool, ToolKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!("#ff0000".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
        assert_eq!("#0A0b0C".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!(" #000 ".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "ff0000", "#ff00", "#gg0000", "#ff00000", "#+f0000"] {
            assert!(bad.parse::<Rgb>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_string(), "#ab0cff");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");

        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(1, 2, 3));

        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }

    #[test]
    fn test_dimensions_bounds() {
        assert!(Dimensions::new(16, 16).is_ok());
        assert!(Dimensions::new(1, MAX_GRID_SIDE).is_ok());
        assert_eq!(
            Dimensions::new(0, 4),
            Err(GridError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert!(Dimensions::new(4, MAX_GRID_SIDE + 1).is_err());
    }

    #[test]
    fn test_cell_is_bounds_checked() {
        let dims = Dimensions::new(4, 3).unwrap();
        assert!(dims.cell(3, 2).is_some());
        assert!(dims.cell(4, 0).is_none());
        assert!(dims.cell(0, 3).is_none());

        let corner = dims.cell(0, 0).unwrap();
        assert_eq!(dims.offset(corner, -1, 0), None);
        assert_eq!(dims.offset(corner, 1, 2), dims.cell(1, 2));
    }
}
