// Editor module for the pixgrid UI.

pub mod canvas;
pub mod shortcuts;
pub mod toolbar;

pub use canvas::{cell_at, to_color32, GridEditor};
pub use shortcuts::shortcut_command;
