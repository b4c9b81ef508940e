// The grid widget: draws the session's grid and turns pointer input into paint gestures.

use egui::{
    Color32, CornerRadius, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use pixgrid_core::{CellPos, Dimensions, Rgb};
use pixgrid_session::{Command, DrawingSession};
use tracing::trace;

const GRID_LINE_COLOR: Color32 = Color32::from_gray(0xcc);
const CURSOR_COLOR: Color32 = Color32::YELLOW;

#[derive(Debug, Clone)]
pub struct GridEditor {
    pub grid_lines: bool,
    was_down: bool,
    // set on the frame a press begins, cleared once a gesture starts or the press ends
    start_armed: bool,
}

impl Default for GridEditor {
    fn default() -> Self {
        Self {
            grid_lines: true,
            was_down: false,
            start_armed: false,
        }
    }
}

impl GridEditor {
    pub fn show(&mut self, ui: &mut Ui, session: &mut DrawingSession) -> Response {
        let dims = session.grid().dimensions();
        let (response, painter) =
            ui.allocate_painter(grid_size(ui.available_size(), dims), Sense::click_and_drag());
        let rect = response.rect;

        // Input first so this frame already shows the painted cells.
        let pointer_cell = response
            .interact_pointer_pos()
            .and_then(|pointer| cell_at(rect, pointer, dims));
        self.pointer_input(session, response.is_pointer_button_down_on(), pointer_cell);

        let cell = cell_size(rect, dims);
        for (row, cells) in session.grid().rows().enumerate() {
            for (col, color) in cells.iter().enumerate() {
                let min = rect.min + Vec2::new(col as f32 * cell.x, row as f32 * cell.y);
                painter.rect_filled(
                    Rect::from_min_size(min, cell),
                    CornerRadius::ZERO,
                    to_color32(*color),
                );
            }
        }

        if self.grid_lines {
            let stroke = Stroke::new(1.0, GRID_LINE_COLOR);
            for col in 0..=dims.cols() {
                let x = rect.min.x + col as f32 * cell.x;
                painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
            }
            for row in 0..=dims.rows() {
                let y = rect.min.y + row as f32 * cell.y;
                painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
            }
        }

        if let Some(at) = response
            .hover_pos()
            .and_then(|pointer| cell_at(rect, pointer, dims))
        {
            painter.rect_stroke(
                cursor_rect(rect, at, session.cursor_size(), dims),
                CornerRadius::ZERO,
                Stroke::new(1.5, CURSOR_COLOR),
                StrokeKind::Inside,
            );
        }

        trace!(revision = session.revision(), "grid drawn");
        response
    }

    /// A gesture only starts from a fresh press. If it ends while the button is
    /// still held (undo/redo mid-drag), nothing is painted until the next press.
    fn pointer_input(&mut self, session: &mut DrawingSession, down: bool, cell: Option<CellPos>) {
        if down && !self.was_down {
            self.start_armed = true;
        }
        self.was_down = down;

        if !down {
            self.start_armed = false;
            if session.is_gesture_active() {
                session.dispatch(Command::GestureEnd);
            }
            return;
        }

        let Some(at) = cell else {
            return;
        };
        if session.is_gesture_active() {
            session.dispatch(Command::GestureMove(at));
        } else if self.start_armed {
            self.start_armed = false;
            session.dispatch(Command::GestureStart(at));
        }
    }
}

/// Which cell the pointer is over, or `None` when it is off the grid.
pub fn cell_at(rect: Rect, pointer: Pos2, dims: Dimensions) -> Option<CellPos> {
    if rect.width() <= 0.0 || rect.height() <= 0.0 || !rect.contains(pointer) {
        return None;
    }

    let cell = cell_size(rect, dims);
    let col = ((pointer.x - rect.min.x) / cell.x).floor() as usize;
    let row = ((pointer.y - rect.min.y) / cell.y).floor() as usize;
    // the max edge is inside `rect` but maps to col == cols
    dims.cell(row, col)
}

pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn cell_size(rect: Rect, dims: Dimensions) -> Vec2 {
    Vec2::new(
        rect.width() / dims.cols() as f32,
        rect.height() / dims.rows() as f32,
    )
}

/// Outline of the `size`-wide square a brush centered on `at` would paint, clipped to the grid.
fn cursor_rect(rect: Rect, at: CellPos, size: u32, dims: Dimensions) -> Rect {
    let size = size.max(1) as usize;
    let (before, after) = ((size - 1) / 2, size / 2);
    let first_row = at.row().saturating_sub(before);
    let first_col = at.col().saturating_sub(before);
    let end_row = (at.row() + after + 1).min(dims.rows());
    let end_col = (at.col() + after + 1).min(dims.cols());

    let cell = cell_size(rect, dims);
    Rect::from_min_max(
        rect.min + Vec2::new(first_col as f32 * cell.x, first_row as f32 * cell.y),
        rect.min + Vec2::new(end_col as f32 * cell.x, end_row as f32 * cell.y),
    )
}

/// Largest whole-pixel square cells that fit in `available`.
fn grid_size(available: Vec2, dims: Dimensions) -> Vec2 {
    let side = (available.x / dims.cols() as f32)
        .min(available.y / dims.rows() as f32)
        .floor()
        .max(1.0);
    Vec2::new(side * dims.cols() as f32, side * dims.rows() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_session::EditorConfig;

    fn rect() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(160.0, 80.0))
    }

    #[test]
    fn test_cell_at_maps_pointer() {
        let dims = Dimensions::new(8, 16).unwrap();

        assert_eq!(cell_at(rect(), Pos2::new(10.0, 20.0), dims), dims.cell(0, 0));
        assert_eq!(cell_at(rect(), Pos2::new(25.0, 39.9), dims), dims.cell(1, 1));
        assert_eq!(cell_at(rect(), Pos2::new(169.9, 99.9), dims), dims.cell(7, 15));
    }

    #[test]
    fn test_cell_at_rejects_outside_pointer() {
        let dims = Dimensions::new(8, 16).unwrap();

        assert_eq!(cell_at(rect(), Pos2::new(9.0, 30.0), dims), None);
        assert_eq!(cell_at(rect(), Pos2::new(50.0, 19.0), dims), None);
        assert_eq!(cell_at(rect(), Pos2::new(170.0, 50.0), dims), None);
        assert_eq!(cell_at(rect(), Pos2::new(50.0, 100.0), dims), None);
    }

    #[test]
    fn test_cell_at_empty_rect() {
        let dims = Dimensions::new(4, 4).unwrap();
        let empty = Rect::from_min_size(Pos2::ZERO, Vec2::ZERO);
        assert_eq!(cell_at(empty, Pos2::ZERO, dims), None);
    }

    #[test]
    fn test_grid_size_keeps_cells_square() {
        let dims = Dimensions::new(8, 16).unwrap();
        assert_eq!(grid_size(Vec2::new(500.0, 500.0), dims), Vec2::new(496.0, 248.0));
        assert_eq!(grid_size(Vec2::new(0.0, 0.0), dims), Vec2::new(16.0, 8.0));
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(Rgb::new(1, 2, 3)), Color32::from_rgb(1, 2, 3));
    }

    #[test]
    fn test_cursor_rect_covers_brush_and_clips() {
        let dims = Dimensions::new(8, 16).unwrap();
        let at = dims.cell(3, 5).unwrap();
        assert_eq!(
            cursor_rect(rect(), at, 1, dims),
            Rect::from_min_size(Pos2::new(60.0, 50.0), Vec2::new(10.0, 10.0))
        );
        assert_eq!(
            cursor_rect(rect(), at, 3, dims),
            Rect::from_min_size(Pos2::new(50.0, 40.0), Vec2::new(30.0, 30.0))
        );

        let corner = dims.cell(0, 0).unwrap();
        assert_eq!(
            cursor_rect(rect(), corner, 3, dims),
            Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(20.0, 20.0))
        );
    }

    fn session() -> DrawingSession {
        DrawingSession::new(&EditorConfig::default()).unwrap()
    }

    #[test]
    fn test_held_button_does_not_restart_gesture_after_undo() {
        let mut s = session();
        let mut editor = GridEditor::default();
        let at = s.grid().dimensions().cell(2, 2).unwrap();

        editor.pointer_input(&mut s, true, Some(at));
        assert!(s.is_gesture_active());

        s.dispatch(Command::Undo);
        assert_eq!(s.history().pointer(), 0);

        // still held, then released
        editor.pointer_input(&mut s, true, Some(at));
        assert!(!s.is_gesture_active());
        editor.pointer_input(&mut s, false, None);

        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().pointer(), 0);
        assert!(s.can_redo());
        assert_eq!(s.grid().get(2, 2), Some(Rgb::BLACK));

        // a fresh press paints again
        editor.pointer_input(&mut s, true, Some(at));
        editor.pointer_input(&mut s, false, None);
        assert_eq!(s.grid().get(2, 2), Some(Rgb::WHITE));
        assert!(!s.can_redo());
    }

    #[test]
    fn test_press_off_grid_can_drag_onto_grid() {
        let mut s = session();
        let mut editor = GridEditor::default();
        let at = s.grid().dimensions().cell(0, 0).unwrap();

        editor.pointer_input(&mut s, true, None);
        editor.pointer_input(&mut s, true, Some(at));
        assert!(s.is_gesture_active());
        editor.pointer_input(&mut s, false, None);
        assert_eq!(s.history().len(), 2);
    }

    fn run_frame(
        ctx: &egui::Context,
        editor: &mut GridEditor,
        session: &mut DrawingSession,
        events: Vec<egui::Event>,
    ) -> usize {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 400.0))),
            events,
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                editor.show(ui, session);
            });
        });
        output.shapes.len()
    }

    #[test]
    fn test_grid_lines_can_be_hidden() {
        let ctx = egui::Context::default();
        let mut s = session();
        let mut editor = GridEditor::default();

        let with_lines = run_frame(&ctx, &mut editor, &mut s, vec![]);
        editor.grid_lines = false;
        let without_lines = run_frame(&ctx, &mut editor, &mut s, vec![]);

        assert!(with_lines > without_lines);
    }

    fn primary_button(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_undo_while_button_held_survives_release() {
        let ctx = egui::Context::default();
        let mut s = session();
        let mut editor = GridEditor::default();
        let pos = Pos2::new(100.0, 100.0);

        run_frame(&ctx, &mut editor, &mut s, vec![egui::Event::PointerMoved(pos)]);
        run_frame(&ctx, &mut editor, &mut s, vec![primary_button(pos, true)]);
        run_frame(&ctx, &mut editor, &mut s, vec![]);
        assert!(s.is_gesture_active());

        s.dispatch(Command::Undo);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().pointer(), 0);

        run_frame(&ctx, &mut editor, &mut s, vec![]);
        run_frame(&ctx, &mut editor, &mut s, vec![primary_button(pos, false)]);
        run_frame(&ctx, &mut editor, &mut s, vec![]);

        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().pointer(), 0);
        assert!(s.can_redo());
        assert!(s.grid().matches(s.history().current()));
    }
}
