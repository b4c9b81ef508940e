//! Drawing session for pixgrid.
//!
//! A session owns everything one editor window mutates:
//! - the live grid
//! - the undo/redo history of grid snapshots
//! - the paint color, active tool and brush size
//! - whether a paint gesture is in progress
//!
//! Cells change during a gesture; history only changes when the gesture ends.

use pixgrid_core::{Brush, CellPos, Eraser, Fill, Grid, Rgb, Snapshot, Tool, ToolKind};
use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::config::{ConfigError, EditorConfig, MAX_BRUSH_SIZE};
use crate::history::History;

/// Semantic input, already resolved from whatever raw events the front-end sees.
///
/// Positions are bounds-checked before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GestureStart(CellPos),
    GestureMove(CellPos),
    GestureEnd,
    Undo,
    Redo,
    SetColor(Rgb),
    SetTool(ToolKind),
    SetBrushSize(u32),
    /// Reset to the background color as a single undoable step.
    Clear,
}

#[derive(Debug)]
pub struct DrawingSession {
    session_id: Uuid,
    grid: Grid,
    history: History<Snapshot>,
    paint_color: Rgb,
    tool: ToolKind,
    brush_size: u32,
    gesture_active: bool,
    revision: u64,
}

impl DrawingSession {
    pub fn new(config: &EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.dimensions()?, config.background);
        let history = History::new(grid.to_snapshot(), config.capacity()?);
        let session_id = Uuid::new_v4();

        info!(
            session_id = %session_id,
            rows = config.rows,
            cols = config.cols,
            history_capacity = config.history_capacity,
            "drawing session created"
        );

        Ok(Self {
            session_id,
            grid,
            history,
            paint_color: config.paint_color,
            tool: config.tool,
            brush_size: config.brush_size,
            gesture_active: false,
            revision: 0,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    pub fn paint_color(&self) -> Rgb {
        self.paint_color
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Bumped on every grid mutation; renderers compare it to decide on a redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply one command. Returns `true` when the grid changed and needs a redraw.
    pub fn dispatch(&mut self, command: Command) -> bool {
        trace!(session_id = %self.session_id, ?command, "dispatch");
        match command {
            Command::GestureStart(at) => self.gesture_start(at),
            Command::GestureMove(at) => self.gesture_move(at),
            Command::GestureEnd => {
                self.gesture_end();
                false
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::SetColor(color) => {
                self.set_paint_color(color);
                false
            }
            Command::SetTool(tool) => {
                self.set_tool(tool);
                false
            }
            Command::SetBrushSize(size) => {
                self.set_brush_size(size);
                false
            }
            Command::Clear => self.clear(),
        }
    }

    /// Begin a gesture and paint the first cell. A second start just keeps painting.
    pub fn gesture_start(&mut self, at: CellPos) -> bool {
        if !self.gesture_active {
            trace!(row = at.row(), col = at.col(), "gesture started");
            self.gesture_active = true;
        }
        self.apply_tool(at)
    }

    /// Paint while a gesture is active; ignored otherwise.
    /// Fill only acts where the gesture started.
    pub fn gesture_move(&mut self, at: CellPos) -> bool {
        if !self.gesture_active || self.tool == ToolKind::Fill {
            return false;
        }
        self.apply_tool(at)
    }

    /// End the gesture and commit the grid if it differs from the active snapshot.
    /// Returns whether a history entry was added.
    pub fn gesture_end(&mut self) -> bool {
        if !self.gesture_active {
            return false;
        }
        self.gesture_active = false;
        trace!("gesture ended");
        self.commit()
    }

    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.gesture_end();

        let Some(snapshot) = self.history.undo() else {
            debug!(session_id = %self.session_id, "nothing to undo");
            return false;
        };
        self.grid.replace_all(snapshot);
        self.revision += 1;

        debug!(
            session_id = %self.session_id,
            pointer = self.history.pointer(),
            "undo"
        );
        true
    }

    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.gesture_end();

        let Some(snapshot) = self.history.redo() else {
            debug!(session_id = %self.session_id, "nothing to redo");
            return false;
        };
        self.grid.replace_all(snapshot);
        self.revision += 1;

        debug!(
            session_id = %self.session_id,
            pointer = self.history.pointer(),
            "redo"
        );
        true
    }

    /// Reset every cell to the background and commit that as one step.
    pub fn clear(&mut self) -> bool {
        self.gesture_end();

        let background = self.grid.background();
        if self.grid.rows().flatten().all(|cell| *cell == background) {
            return false;
        }

        self.grid.clear();
        self.revision += 1;
        self.commit();
        info!(session_id = %self.session_id, "grid cleared");
        true
    }

    pub fn set_paint_color(&mut self, color: Rgb) {
        debug!(color = %color, "paint color selected");
        self.paint_color = color;
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        debug!(tool = tool.label(), "tool selected");
        self.tool = tool;
    }

    /// Out-of-range sizes are clamped.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(1, MAX_BRUSH_SIZE);
        debug!(brush_size = self.brush_size, "brush size selected");
    }

    /// Side of the square the active tool paints, for cursor outlines.
    pub fn cursor_size(&self) -> u32 {
        self.active_tool().cursor_size()
    }

    fn active_tool(&self) -> Box<dyn Tool> {
        match self.tool {
            ToolKind::Brush => Box::new(Brush::new(self.brush_size, self.paint_color)),
            ToolKind::Eraser => Box::new(Eraser::new(self.brush_size)),
            ToolKind::Fill => Box::new(Fill::new(self.paint_color)),
        }
    }

    fn apply_tool(&mut self, at: CellPos) -> bool {
        let tool = self.active_tool();
        let changed = tool.apply(&mut self.grid, at);
        trace!(
            tool = tool.name(),
            row = at.row(),
            col = at.col(),
            changed,
            "tool applied"
        );

        if changed == 0 {
            return false;
        }
        self.revision += 1;
        true
    }

    fn commit(&mut self) -> bool {
        if self.grid.matches(self.history.current()) {
            debug!(session_id = %self.session_id, "grid unchanged, nothing to commit");
            return false;
        }
        self.history.commit(self.grid.to_snapshot())
    }
}
