// Keyboard shortcuts, resolved to session commands.

use egui::{Event, Key, Modifiers};
use pixgrid_session::Command;

/// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo.
pub fn shortcut_command(modifiers: Modifiers, key: Key) -> Option<Command> {
    if !(modifiers.command || modifiers.ctrl) || modifiers.alt {
        return None;
    }

    match (key, modifiers.shift) {
        (Key::Z, false) => Some(Command::Undo),
        (Key::Z, true) | (Key::Y, false) => Some(Command::Redo),
        _ => None,
    }
}

/// Commands for every shortcut pressed this frame, in order.
pub fn commands(events: &[Event]) -> Vec<Command> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => shortcut_command(*modifiers, *key),
            _ => None,
        })
        .collect()
}
