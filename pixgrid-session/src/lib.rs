//! pixgrid-session: undo/redo history and the drawing session for pixgrid.
//!
//! Design rules:
//! - History is never empty and never longer than its capacity.
//! - Only a finished gesture (or a clear) adds a history entry, and only if the grid changed.
//! - Committing after an undo drops the redo entries.
//! - All state lives in an explicit [`DrawingSession`]; there are no globals.

pub mod config;
pub mod history;
pub mod session;

pub use config::{load_config, ConfigError, EditorConfig, MAX_BRUSH_SIZE};
pub use history::History;
pub use session::{Command, DrawingSession};
