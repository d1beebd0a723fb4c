//! Terminal BrickGame runner.
//!
//! Picks a game from the command line (`brickgame tetris` or
//! `brickgame snake`), then drives it through the plugin boundary: submit
//! inputs as they arrive, advance the simulation on the cadence the
//! snapshot reports, and redraw after every change.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use brickgame::input::{map_key_event, should_quit, HoldTracker};
use brickgame::plugin::GameKind;
use brickgame::term::{GameView, TerminalRenderer, Viewport};
use brickgame::types::UserAction;

fn main() -> Result<()> {
    let kind = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, kind);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn parse_args() -> Result<GameKind> {
    let arg = std::env::args().nth(1);
    match arg.as_deref() {
        None => Ok(GameKind::Tetris),
        Some(name) => GameKind::from_str(name)
            .ok_or_else(|| anyhow!("unknown game {name:?}, expected tetris or snake")),
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, kind: GameKind) -> Result<()> {
    let mut game = kind.create(time_seed());
    let view = GameView::new(kind);
    let mut hold = HoldTracker::new();

    let mut last_tick = Instant::now();

    loop {
        let snap = game.query_snapshot();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(&snap, Viewport::new(w, h)))?;

        // Input with timeout until the next tick at the reported speed.
        let tick_duration = Duration::from_millis(snap.speed_ms.max(1) as u64);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(&key) {
                            game.submit_input(UserAction::Terminate, false);
                            return Ok(());
                        }
                        if let Some(action) = map_key_event(&key) {
                            if action == UserAction::Action {
                                hold.press();
                            }
                            if action == UserAction::Start {
                                hold.reset();
                            }
                            game.submit_input(action, action == UserAction::Action);
                        }
                    }
                    KeyEventKind::Release => {
                        if map_key_event(&key) == Some(UserAction::Action) {
                            hold.reset();
                            if kind.consumes_hold() {
                                game.submit_input(UserAction::Action, false);
                            }
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            // Expire a stale hold for terminals without release events.
            // Games where Action is a plain tap never see the synthetic
            // release, or it would fire their tap handler every tick.
            if kind.consumes_hold() && !hold.is_held() {
                game.submit_input(UserAction::Action, false);
            }
            game.advance();
        }
    }
}
