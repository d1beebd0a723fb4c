//! Tetris engine.
//!
//! Classic falling-block rules on the shared 10x20 field: gravity one row
//! per tick, table-lookup rotation with no wall kicks, full rows collapse
//! on lock and score by the [0, 100, 300, 700, 1500] table. The engine is
//! pure simulation; all pacing lives in the frontend, which calls `tick`
//! once per speed interval.

use crate::core::field::Field;
use crate::core::fsm::GameCore;
use crate::core::pieces::{self, SPAWN_POSITION};
use crate::core::rng::PieceBag;
use crate::core::scoring;
use crate::core::snapshot::GameSnapshot;
use crate::highscore::HighScoreStore;
use crate::types::{
    GameStatus, PieceKind, Rotation, UserAction, CELL_BLOCK, TETRIS_SCORE_FILE,
};

/// The piece currently falling.
#[derive(Debug, Clone, Copy)]
struct ActivePiece {
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
}

impl ActivePiece {
    fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Absolute cell coordinates of the piece.
    fn cells(&self) -> [(i8, i8); 4] {
        let mut out = [(0, 0); 4];
        for (i, (dx, dy)) in pieces::shape(self.kind, self.rotation).iter().enumerate() {
            out[i] = (self.x + dx, self.y + dy);
        }
        out
    }
}

#[derive(Debug)]
pub struct TetrisEngine {
    field: Field,
    active: Option<ActivePiece>,
    next_kind: PieceKind,
    bag: PieceBag,
    score: u32,
    high_score: u32,
    level: u32,
    speed_ms: u32,
    status: GameStatus,
    store: HighScoreStore,
}

impl TetrisEngine {
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, HighScoreStore::new(TETRIS_SCORE_FILE))
    }

    /// Engine with an explicit score store (tests point this at a temp file).
    pub fn with_store(seed: u32, store: HighScoreStore) -> Self {
        let mut bag = PieceBag::new(seed);
        let next_kind = bag.draw();
        let high_score = store.load();
        Self {
            field: Field::new(),
            active: None,
            next_kind,
            bag,
            score: 0,
            high_score,
            level: 1,
            speed_ms: scoring::speed_for_level(1),
            status: GameStatus::Ready,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    fn fits(&self, piece: &ActivePiece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.field.is_free(x, y))
    }

    /// Try to replace the active piece with `candidate`; rejected silently
    /// when the target cells are blocked.
    fn try_move(&mut self, candidate: ActivePiece) -> bool {
        if self.fits(&candidate) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    fn shift(&mut self, dx: i8) {
        if let Some(mut piece) = self.active {
            piece.x += dx;
            self.try_move(piece);
        }
    }

    fn rotate(&mut self) {
        if let Some(mut piece) = self.active {
            piece.rotation = piece.rotation.next();
            self.try_move(piece);
        }
    }

    /// Move the active piece down one row, or lock it when blocked.
    fn descend(&mut self) {
        let Some(mut piece) = self.active else {
            return;
        };
        piece.y += 1;
        if !self.try_move(piece) {
            self.lock();
        }
    }

    /// Write the active piece into the field, collapse full rows, apply
    /// scoring, then spawn the next piece (or end the game).
    fn lock(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        for (x, y) in piece.cells() {
            self.field.set(x, y, CELL_BLOCK);
        }

        let cleared = self.field.clear_full_rows();
        if !cleared.is_empty() {
            self.score += scoring::line_clear_score(cleared.len());
            self.persist_high_score();
            self.level = scoring::tetris_level(self.score);
            self.speed_ms = scoring::speed_for_level(self.level);
        }

        self.spawn_next();
    }

    fn persist_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.high_score);
        }
    }

    fn spawn_next(&mut self) {
        let piece = ActivePiece::spawn(self.next_kind);
        self.next_kind = self.bag.draw();
        if self.fits(&piece) {
            self.active = Some(piece);
        } else {
            // Spawn area blocked: the stack has reached the top. The score
            // was already persisted when it last improved.
            self.active = Some(piece);
            self.status = GameStatus::Lost;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_next_kind_for_test(&mut self, kind: PieceKind) {
        self.next_kind = kind;
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.cells())
    }
}

impl GameCore for TetrisEngine {
    fn reset(&mut self) {
        self.field.clear();
        self.active = None;
        self.score = 0;
        self.high_score = self.store.load();
        self.level = 1;
        self.speed_ms = scoring::speed_for_level(1);
        self.status = GameStatus::Ready;
    }

    fn begin(&mut self) {
        self.status = GameStatus::Running;
        self.spawn_next();
    }

    fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.descend();
    }

    fn handle_action(&mut self, action: UserAction, _hold: bool) {
        if self.status != GameStatus::Running {
            return;
        }
        match action {
            UserAction::Left => self.shift(-1),
            UserAction::Right => self.shift(1),
            UserAction::Down => self.descend(),
            UserAction::Action => self.rotate(),
            // Up is reserved: no hard drop in this rule set.
            _ => {}
        }
    }

    fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    fn terminate(&mut self) {
        if !self.status.is_terminal() {
            self.status = GameStatus::Lost;
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn write_snapshot(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        if let Some(piece) = &self.active {
            for (x, y) in piece.cells() {
                if x >= 0 && y >= 0 {
                    out.field[y as usize][x as usize] = CELL_BLOCK;
                }
            }
        }
        out.preview = Some(pieces::preview_mask(self.next_kind));
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.speed_ms = self.speed_ms;
        out.paused = self.status == GameStatus::Paused;
        out.status = self.status;
    }
}
