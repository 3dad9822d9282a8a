//! Integration tests for the game loop: keys -> actions -> session -> view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_2048::config::AppConfig;
use tui_2048::core::GameSnapshot;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::move_log::MoveLog;
use tui_2048::session::Session;
use tui_2048::term::{GameView, Viewport};
use tui_2048::types::{Direction, GameAction};

fn press(session: &mut Session, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => session.apply(action),
        None => false,
    }
}

#[test]
fn test_game_lifecycle() {
    let config = AppConfig {
        seed: Some(12345),
        ..AppConfig::default()
    };
    let mut session = Session::new(&config).unwrap();
    assert_eq!(session.state().size(), 4);
    assert!(!session.state().is_game_over());

    // Every arrow spawns on a board with room, so each press changes something.
    for code in [KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down] {
        assert!(press(&mut session, code));
    }
    assert_eq!(session.state().moves(), 4);
    assert_eq!(session.state().history_len(), 4);

    assert!(press(&mut session, KeyCode::Char('u')));
    assert_eq!(session.state().history_len(), 3);

    assert!(press(&mut session, KeyCode::Char('n')));
    assert_eq!(session.state().moves(), 0);
    assert!(!session.state().can_undo());
}

#[test]
fn test_resize_keys() {
    let mut session = Session::with_log(1, &AppConfig::default(), MoveLog::disabled());
    assert!(press(&mut session, KeyCode::Char('+')));
    assert_eq!(session.state().size(), 5);
    assert!(press(&mut session, KeyCode::Char('-')));
    assert!(press(&mut session, KeyCode::Char('-')));
    assert_eq!(session.state().size(), 3);
}

#[test]
fn test_unmapped_and_quit_keys() {
    let mut session = Session::with_log(1, &AppConfig::default(), MoveLog::disabled());
    assert!(!press(&mut session, KeyCode::Char('z')));
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert_eq!(
        handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn test_session_renders_after_each_action() {
    let mut session = Session::with_log(7, &AppConfig::default(), MoveLog::disabled());
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let vp = Viewport::new(60, 20);

    session.snapshot_into(&mut snap);
    let before = view.render(&snap, vp);

    session.apply(GameAction::Move(Direction::Left));
    session.snapshot_into(&mut snap);
    let after = view.render(&snap, vp);

    // At least the spawned tile and the move counter differ.
    assert_ne!(before, after);
}

#[test]
fn test_skip_noop_config_reaches_engine() {
    let config = AppConfig {
        size: 2,
        seed: Some(4),
        skip_noop_moves: true,
        ..AppConfig::default()
    };
    let mut session = Session::new(&config).unwrap();

    let mut changed_any = false;
    for dir in Direction::ALL {
        let before = session.state().history_len();
        let changed = session.apply(GameAction::Move(dir));
        changed_any |= changed;
        if !changed {
            assert_eq!(session.state().history_len(), before);
        }
    }
    assert!(changed_any);
}
