//! pixgrid-ui: egui front-end for pixgrid.
//!
//! Maps pointer and keyboard input onto session commands and draws the grid.
//! Holds no drawing state of its own; everything is re-read from the session each frame.

pub mod editor;

pub use editor::{cell_at, shortcut_command, shortcuts, toolbar, GridEditor};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
