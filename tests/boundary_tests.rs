//! Behaviors every game must exhibit through the plugin boundary, checked
//! for both registered games with no game-specific knowledge.

use brickgame::core::{GameFsm, SnakeEngine, TetrisEngine};
use brickgame::highscore::HighScoreStore;
use brickgame::plugin::{GameKind, GamePlugin};
use brickgame::types::{GameStatus, UserAction, CELL_BLOCK, CELL_EMPTY, CELL_ITEM};

fn temp_store(name: &str) -> HighScoreStore {
    let mut path = std::env::temp_dir();
    path.push(format!("brickgame_boundary_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    HighScoreStore::at_path(path)
}

/// Both games behind the uniform boundary, isolated from the well-known
/// high-score files.
fn all_games(name: &str) -> Vec<(GameKind, Box<dyn GamePlugin>)> {
    vec![
        (
            GameKind::Tetris,
            Box::new(GameFsm::new(TetrisEngine::with_store(
                7,
                temp_store(&format!("tetris_{name}")),
            ))) as Box<dyn GamePlugin>,
        ),
        (
            GameKind::Snake,
            Box::new(GameFsm::new(SnakeEngine::with_store(
                7,
                temp_store(&format!("snake_{name}")),
            ))) as Box<dyn GamePlugin>,
        ),
    ]
}

#[test]
fn ready_games_are_not_terminated() {
    for (kind, game) in all_games("ready") {
        assert!(!game.is_terminated(), "{}", kind.as_str());
        assert!(!game.is_victory(), "{}", kind.as_str());
        let snap = game.query_snapshot();
        assert_eq!(snap.status, GameStatus::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, 1);
    }
}

#[test]
fn query_snapshot_is_idempotent() {
    for (kind, mut game) in all_games("idempotent") {
        game.submit_input(UserAction::Start, false);
        game.advance();
        let a = game.query_snapshot();
        let b = game.query_snapshot();
        assert_eq!(a, b, "{}", kind.as_str());
    }
}

#[test]
fn snapshots_are_detached_copies() {
    for (kind, mut game) in all_games("detached") {
        game.submit_input(UserAction::Start, false);
        let before = game.query_snapshot();
        let kept = before.clone();
        game.advance();
        // The old snapshot is untouched by the tick.
        assert_eq!(before, kept, "{}", kind.as_str());
        assert_ne!(game.query_snapshot().field, kept.field, "{}", kind.as_str());
    }
}

#[test]
fn gameplay_inputs_before_start_are_ignored() {
    for (kind, mut game) in all_games("prestart") {
        let before = game.query_snapshot();
        for action in [
            UserAction::Left,
            UserAction::Right,
            UserAction::Up,
            UserAction::Down,
            UserAction::Action,
        ] {
            game.submit_input(action, false);
        }
        assert_eq!(game.query_snapshot(), before, "{}", kind.as_str());
        assert_eq!(game.query_snapshot().status, GameStatus::Ready);
    }
}

#[test]
fn pause_freezes_the_simulation() {
    for (kind, mut game) in all_games("pause") {
        game.submit_input(UserAction::Start, false);
        game.submit_input(UserAction::Pause, false);
        let frozen = game.query_snapshot();
        assert!(frozen.paused, "{}", kind.as_str());
        assert_eq!(frozen.status, GameStatus::Paused);

        for _ in 0..5 {
            game.advance();
            game.submit_input(UserAction::Left, false);
        }
        assert_eq!(game.query_snapshot(), frozen, "{}", kind.as_str());

        game.submit_input(UserAction::Pause, false);
        assert_eq!(game.query_snapshot().status, GameStatus::Running);
    }
}

#[test]
fn terminate_ends_running_and_paused_games() {
    for (kind, mut game) in all_games("terminate") {
        game.submit_input(UserAction::Start, false);
        game.submit_input(UserAction::Terminate, false);
        assert!(game.is_terminated(), "{}", kind.as_str());
        assert!(!game.is_victory(), "{}", kind.as_str());
    }
}

#[test]
fn start_restarts_a_finished_game_from_scratch() {
    for (kind, mut game) in all_games("restart") {
        game.submit_input(UserAction::Start, false);
        game.advance();
        game.submit_input(UserAction::Terminate, false);
        assert!(game.is_terminated());

        game.submit_input(UserAction::Start, false);
        let snap = game.query_snapshot();
        assert_eq!(snap.status, GameStatus::Running, "{}", kind.as_str());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level, 1);
        assert!(!game.is_terminated());
    }
}

#[test]
fn advancing_a_terminal_game_changes_nothing() {
    for (kind, mut game) in all_games("terminal_tick") {
        game.submit_input(UserAction::Start, false);
        game.submit_input(UserAction::Terminate, false);
        let end = game.query_snapshot();
        for _ in 0..10 {
            game.advance();
        }
        assert_eq!(game.query_snapshot(), end, "{}", kind.as_str());
    }
}

#[test]
fn speed_is_reported_in_the_legal_range() {
    for (kind, mut game) in all_games("speed") {
        game.submit_input(UserAction::Start, false);
        let snap = game.query_snapshot();
        assert!(
            (1..=600).contains(&snap.speed_ms),
            "{}: {}",
            kind.as_str(),
            snap.speed_ms
        );
    }
}

#[test]
fn synthetic_hold_releases_skip_games_where_action_is_a_tap() {
    // The frontend clears a stale hold before each tick, but only for games
    // that consume holds. Same-seed engines, one ticked plainly and one
    // through that per-tick shape, must stay in lockstep.
    let mut plain: Box<dyn GamePlugin> = Box::new(GameFsm::new(TetrisEngine::with_store(
        99,
        temp_store("shape_plain"),
    )));
    let mut framed: Box<dyn GamePlugin> = Box::new(GameFsm::new(TetrisEngine::with_store(
        99,
        temp_store("shape_framed"),
    )));
    plain.submit_input(UserAction::Start, false);
    framed.submit_input(UserAction::Start, false);

    for _ in 0..15 {
        if GameKind::Tetris.consumes_hold() {
            framed.submit_input(UserAction::Action, false);
        }
        plain.advance();
        framed.advance();
        assert_eq!(plain.query_snapshot().field, framed.query_snapshot().field);
    }
}

#[test]
fn every_snapshot_cell_holds_a_known_code() {
    let inputs = [
        UserAction::Left,
        UserAction::Down,
        UserAction::Right,
        UserAction::Action,
        UserAction::Up,
    ];
    for (kind, mut game) in all_games("cell_codes") {
        game.submit_input(UserAction::Start, false);
        for i in 0..60 {
            game.submit_input(inputs[i % inputs.len()], false);
            game.advance();
            let snap = game.query_snapshot();
            for (y, row) in snap.field.iter().enumerate() {
                for (x, &code) in row.iter().enumerate() {
                    assert!(
                        matches!(code, CELL_EMPTY | CELL_BLOCK | CELL_ITEM),
                        "{}: bad code {} at ({}, {})",
                        kind.as_str(),
                        code,
                        x,
                        y
                    );
                }
            }
            if let Some(preview) = &snap.preview {
                for row in preview {
                    for &code in row {
                        assert!(matches!(code, CELL_EMPTY | CELL_BLOCK));
                    }
                }
            }
        }
    }
}

#[test]
fn registry_creates_every_game() {
    // Uses the well-known score files in the working directory; no inputs
    // are sent, so nothing is written.
    for kind in GameKind::ALL {
        let game = kind.create(1);
        assert_eq!(game.query_snapshot().status, GameStatus::Ready);
    }
}
