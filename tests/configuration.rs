use clickchess::chess::{Color, PieceKind, Position};
use clickchess::cli::{Config, DisplayStyle, Session};
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        display: DisplayStyle::Ascii,
        show_highlights: false,
        layout_file: None,
        log_level: "debug".to_string(),
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unparseable_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "display = [").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse configuration file"));
}

#[test]
fn test_custom_layout_file_starts_the_game() {
    let dir = TempDir::new().unwrap();
    let layout_path = dir.path().join("kings.json");
    std::fs::write(
        &layout_path,
        r#"{
            "0": {"4": {"kind": "king", "color": "white"}},
            "6": {"0": {"kind": "pawn", "color": "black"}},
            "7": {"4": {"kind": "king", "color": "black"}}
        }"#,
    )
    .unwrap();

    let config = Config {
        layout_file: Some(layout_path),
        ..Config::default()
    };
    let layout = config.starting_layout().unwrap();
    assert_eq!(layout.len(), 3);

    let session = Session::new(layout, DisplayStyle::Ascii, true).unwrap();
    let board = session.state().board();
    let pawn = board.piece_at(Position::new_unchecked(0, 6)).unwrap();
    assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::Black));
    assert!(!pawn.has_moved);
}

#[test]
fn test_broken_layout_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let layout_path = dir.path().join("broken.json");
    std::fs::write(&layout_path, r#"{"0": {"4": {"kind": "king", "color": "white"}}}"#).unwrap();

    let config = Config {
        layout_file: Some(layout_path),
        ..Config::default()
    };
    let err = config.starting_layout().unwrap_err();
    assert!(format!("{:#}", err).contains("Expected exactly one Black king"));
}
