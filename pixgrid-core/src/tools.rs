// Painting tools for the grid.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::{CellPos, Grid, Rgb};

pub trait Tool {
    /// Paint at `at`. Returns how many cells changed color.
    fn apply(&self, grid: &mut Grid, at: CellPos) -> usize;

    fn name(&self) -> &str;

    fn cursor_size(&self) -> u32 {
        1
    }
}

/// Which tool is active. Commands and config refer to tools by this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Fill,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Brush, ToolKind::Eraser, ToolKind::Fill];

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Brush => "Brush",
            ToolKind::Eraser => "Eraser",
            ToolKind::Fill => "Fill",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Brush {
    pub size: u32,
    pub color: Rgb,
}

impl Brush {
    pub fn new(size: u32, color: Rgb) -> Self {
        Self { size, color }
    }
}

impl Tool for Brush {
    fn apply(&self, grid: &mut Grid, at: CellPos) -> usize {
        let changed = paint_square(grid, at, self.size, self.color);
        trace!(changed, size = self.size, color = %self.color, "brush applied");
        changed
    }

    fn name(&self) -> &str {
        "Brush"
    }

    fn cursor_size(&self) -> u32 {
        self.size
    }
}

/// A brush that always paints the grid's background color.
#[derive(Debug, Clone)]
pub struct Eraser {
    pub size: u32,
}

impl Eraser {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Tool for Eraser {
    fn apply(&self, grid: &mut Grid, at: CellPos) -> usize {
        let background = grid.background();
        let changed = paint_square(grid, at, self.size, background);
        trace!(changed, size = self.size, "eraser applied");
        changed
    }

    fn name(&self) -> &str {
        "Eraser"
    }

    fn cursor_size(&self) -> u32 {
        self.size
    }
}

#[derive(Debug, Clone)]
pub struct Fill {
    pub color: Rgb,
}

impl Fill {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Tool for Fill {
    fn apply(&self, grid: &mut Grid, at: CellPos) -> usize {
        let target = grid.at(at);
        if target == self.color {
            trace!("target already matches fill color, skipping fill");
            return 0;
        }

        let dims = grid.dimensions();
        let mut queue = VecDeque::from([at]);
        let mut changed = 0;

        // 4-connected. A cell may be queued twice; the second pop sees it recolored.
        while let Some(pos) = queue.pop_front() {
            if grid.at(pos) != target {
                continue;
            }
            grid.set(pos, self.color);
            changed += 1;

            for (d_row, d_col) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(next) = dims.offset(pos, d_row, d_col) {
                    if grid.at(next) == target {
                        queue.push_back(next);
                    }
                }
            }
        }

        debug!(changed, color = %self.color, "flood fill completed");
        changed
    }

    fn name(&self) -> &str {
        "Fill"
    }
}

/// Paint a `size`-wide square roughly centered on `at`, clipped to the grid.
fn paint_square(grid: &mut Grid, at: CellPos, size: u32, color: Rgb) -> usize {
    let size = size.max(1) as isize;
    let before = (size - 1) / 2;
    let after = size / 2;
    let dims = grid.dimensions();

    let mut changed = 0;
    for d_row in -before..=after {
        for d_col in -before..=after {
            if let Some(pos) = dims.offset(at, d_row, d_col) {
                if grid.set(pos, color) {
                    changed += 1;
                }
            }
        }
    }
    changed
}
