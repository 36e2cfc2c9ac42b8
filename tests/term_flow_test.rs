//! Key presses through the input map, controller and view, without a terminal.

use crossterm::event::{KeyCode, KeyEvent};

use tetromino_puzzle::core::{Puzzle, PuzzleSnapshot};
use tetromino_puzzle::engine::Game;
use tetromino_puzzle::input::{handle_key_event, Cursor};
use tetromino_puzzle::term::{Overlay, PuzzleView, Viewport};
use tetromino_puzzle::types::{Coord, PieceKind};

fn press(game: &mut Game, cursor: &mut Cursor, code: KeyCode) -> bool {
    let Some(action) = handle_key_event(KeyEvent::from(code), game.puzzle().catalog()) else {
        return false;
    };
    let (rows, cols) = {
        let b = game.state().board();
        (b.rows(), b.cols())
    };
    match cursor.resolve(action, rows, cols) {
        Some(intent) => game.apply(intent),
        None => true,
    }
}

fn screen_text(game: &Game, cursor: Cursor) -> String {
    let mut snap = PuzzleSnapshot::default();
    game.snapshot_into(&mut snap);
    let preview = game.preview_cells(cursor.coord());
    let overlay = Overlay {
        title: "classic puzzle",
        cursor: Some(cursor.coord()),
        preview: &preview,
        message: None,
    };
    let fb = PuzzleView::default().render(&snap, &overlay, Viewport::new(100, 30));
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn keyboard_session_places_square_in_corner() {
    let mut game = Game::new(Puzzle::classic());
    let mut cursor = Cursor::default();

    // Pick the square (second in the catalog) and walk to (7, 7).
    assert!(press(&mut game, &mut cursor, KeyCode::Char('2')));
    for _ in 0..7 {
        press(&mut game, &mut cursor, KeyCode::Down);
        press(&mut game, &mut cursor, KeyCode::Right);
    }
    assert_eq!(cursor.coord(), Coord::new(7, 7));
    assert!(game.preview_cells(cursor.coord()).is_empty());
    assert!(!press(&mut game, &mut cursor, KeyCode::Char(' ')));

    press(&mut game, &mut cursor, KeyCode::Up);
    press(&mut game, &mut cursor, KeyCode::Left);
    assert_eq!(game.preview_cells(cursor.coord()).len(), 4);
    assert!(press(&mut game, &mut cursor, KeyCode::Enter));
    assert_eq!(game.state().count(PieceKind::Square), 0);

    let text = screen_text(&game, cursor);
    assert!(text.contains("2 Square x0"));
    assert!(text.contains("classic puzzle"));

    assert!(press(&mut game, &mut cursor, KeyCode::Char('u')));
    assert_eq!(game.state().count(PieceKind::Square), 1);
    assert!(press(&mut game, &mut cursor, KeyCode::Char('y')));
    assert_eq!(game.state().count(PieceKind::Square), 0);
}

#[test]
fn rotation_shows_in_side_panel() {
    let mut game = Game::new(Puzzle::classic());
    let mut cursor = Cursor::new(3, 3);
    press(&mut game, &mut cursor, KeyCode::Char('1'));
    press(&mut game, &mut cursor, KeyCode::Char('r'));
    press(&mut game, &mut cursor, KeyCode::Char('r'));
    let text = screen_text(&game, cursor);
    assert!(text.contains("180°"));
    assert!(text.contains(">1 T x15"));
}
