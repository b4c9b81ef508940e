// Tool, size and color selection plus history buttons.

use egui::{Button, Slider, Ui};
use pixgrid_core::{Rgb, ToolKind};
use pixgrid_session::{Command, DrawingSession, MAX_BRUSH_SIZE};

use super::GridEditor;

/// Draw the toolbar row. Returns whether the grid changed.
pub fn show(ui: &mut Ui, session: &mut DrawingSession, editor: &mut GridEditor) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        let mut tool = session.tool();
        for kind in ToolKind::ALL {
            ui.selectable_value(&mut tool, kind, kind.label());
        }
        if tool != session.tool() {
            session.dispatch(Command::SetTool(tool));
        }

        let mut size = session.brush_size();
        ui.add_enabled(
            tool != ToolKind::Fill,
            Slider::new(&mut size, 1..=MAX_BRUSH_SIZE).text("Size"),
        );
        if size != session.brush_size() {
            session.dispatch(Command::SetBrushSize(size));
        }

        let color = session.paint_color();
        let mut rgb = [color.r, color.g, color.b];
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            session.dispatch(Command::SetColor(Rgb::new(rgb[0], rgb[1], rgb[2])));
        }

        ui.separator();

        if ui
            .add_enabled(session.can_undo(), Button::new("Undo"))
            .on_hover_text("Ctrl+Z")
            .clicked()
        {
            changed |= session.dispatch(Command::Undo);
        }
        if ui
            .add_enabled(session.can_redo(), Button::new("Redo"))
            .on_hover_text("Ctrl+Y")
            .clicked()
        {
            changed |= session.dispatch(Command::Redo);
        }
        if ui.button("Clear").clicked() {
            changed |= session.dispatch(Command::Clear);
        }

        ui.separator();
        ui.checkbox(&mut editor.grid_lines, "Grid lines");
    });

    changed
}
