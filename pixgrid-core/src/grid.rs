// The live pixel grid and its immutable snapshots.

use std::sync::Arc;
use tracing::{debug, info, trace};

use crate::{CellPos, Dimensions, Rgb};

/// The live, mutable grid of cell colors.
#[derive(Debug, Clone)]
pub struct Grid {
    dims: Dimensions,
    background: Rgb,
    cells: Vec<Rgb>,
}

impl Grid {
    pub fn new(dims: Dimensions, background: Rgb) -> Self {
        info!(
            rows = dims.rows(),
            cols = dims.cols(),
            background = %background,
            "creating grid"
        );

        Self {
            dims,
            background,
            cells: vec![background; dims.cell_count()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// The color the grid started with; erasing paints this.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Color at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        self.dims.cell(row, col).map(|pos| self.at(pos))
    }

    pub fn at(&self, pos: CellPos) -> Rgb {
        self.cells[pos.index(self.dims)]
    }

    /// Overwrite one cell. Returns whether its color actually changed.
    pub fn set(&mut self, pos: CellPos, color: Rgb) -> bool {
        debug_assert!(
            self.dims.cell(pos.row(), pos.col()).is_some(),
            "cell {pos:?} does not belong to a {:?} grid",
            self.dims
        );

        let cell = &mut self.cells[pos.index(self.dims)];
        if *cell == color {
            return false;
        }
        trace!(row = pos.row(), col = pos.col(), color = %color, "set cell");
        *cell = color;
        true
    }

    pub fn fill(&mut self, color: Rgb) {
        debug!(color = %color, "filling grid");
        self.cells.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    /// Replace every cell with the contents of `snapshot`.
    pub fn replace_all(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(self.dims, snapshot.dims, "snapshot from another grid");
        self.cells.copy_from_slice(&snapshot.cells);
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            dims: self.dims,
            cells: Arc::from(self.cells.as_slice()),
        }
    }

    /// Cell-by-cell value equality with a snapshot.
    pub fn matches(&self, snapshot: &Snapshot) -> bool {
        self.dims == snapshot.dims && self.cells[..] == snapshot.cells[..]
    }

    /// Rows top to bottom, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.cells.chunks_exact(self.dims.cols())
    }
}

/// Immutable point-in-time copy of a [`Grid`]. Clones share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    dims: Dimensions,
    cells: Arc<[Rgb]>,
}

impl Snapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        self.dims
            .cell(row, col)
            .map(|pos| self.cells[pos.index(self.dims)])
    }
}
