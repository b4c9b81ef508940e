use pixgrid_core::{Rgb, ToolKind};
use pixgrid_session::{load_config, Command, DrawingSession, EditorConfig};

fn paint(s: &mut DrawingSession, row: usize, col: usize) {
    let at = s.grid().dimensions().cell(row, col).unwrap();
    s.dispatch(Command::GestureStart(at));
    s.dispatch(Command::GestureEnd);
}

#[test]
fn session_flow() {
    let mut s = DrawingSession::new(&EditorConfig {
        rows: 8,
        cols: 8,
        history_capacity: 3,
        ..Default::default()
    })
    .unwrap();

    // three commits on top of the initial entry: the initial one is evicted
    paint(&mut s, 0, 0);
    paint(&mut s, 0, 1);
    paint(&mut s, 0, 2);
    assert_eq!(s.history().len(), 3);
    assert_eq!(s.history().pointer(), 2);

    let latest = s.grid().to_snapshot();
    assert!(s.dispatch(Command::Undo));
    assert!(s.dispatch(Command::Undo));
    assert!(!s.dispatch(Command::Undo));
    assert_eq!(s.grid().get(0, 0), Some(Rgb::WHITE));
    assert_eq!(s.grid().get(0, 1), Some(Rgb::BLACK));

    assert!(s.dispatch(Command::Redo));
    assert!(s.dispatch(Command::Redo));
    assert!(s.grid().matches(&latest));

    let revision = s.revision();
    paint(&mut s, 0, 2);
    assert_eq!(s.revision(), revision);
    assert_eq!(s.history().len(), 3);
}

#[test]
fn config_file_roundtrip() {
    let path = std::path::Path::new("target/test_config.pixgrid.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        path,
        r##"{ "rows": 4, "cols": 6, "history_capacity": 2, "background": "#fff", "tool": "fill" }"##,
    )
    .unwrap();

    let config = load_config(path).unwrap();
    assert_eq!(config.background, Rgb::WHITE);
    assert_eq!(config.tool, ToolKind::Fill);

    let s = DrawingSession::new(&config).unwrap();
    assert_eq!(s.grid().dimensions().cols(), 6);
    assert_eq!(s.history().capacity().get(), 2);
}

#[test]
fn invalid_config_file_is_reported() {
    let path = std::path::Path::new("target/test_bad_config.pixgrid.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, r#"{ "history_capacity": 0 }"#).unwrap();

    let err = load_config(path).unwrap_err();
    assert!(format!("{err:#}").contains("history_capacity"));

    assert!(load_config("target/does_not_exist.pixgrid.json").is_err());
}
