// pixgrid: paint a fixed-size pixel grid with undo/redo.
//
// Usage: pixgrid [config.json]

use anyhow::Context;
use eframe::egui;
use pixgrid_session::{load_config, DrawingSession, EditorConfig};
use pixgrid_ui::{shortcuts, toolbar, GridEditor};

struct PixgridApp {
    session: DrawingSession,
    editor: GridEditor,
}

impl eframe::App for PixgridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in ctx.input(|i| shortcuts::commands(&i.events)) {
            self.session.dispatch(command);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show(ui, &mut self.session, &mut self.editor);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.editor.show(ui, &mut self.session);
        });
    }
}

fn main() -> anyhow::Result<()> {
    pixgrid_ui::init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => EditorConfig::default(),
    };
    let session = DrawingSession::new(&config).context("create drawing session")?;
    tracing::info!(session_id = %session.session_id(), "starting editor");

    eframe::run_native(
        "pixgrid",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| {
            Ok(Box::new(PixgridApp {
                session,
                editor: GridEditor::default(),
            }))
        }),
    )
    .map_err(|err| anyhow::anyhow!("run editor window: {err}"))
}
