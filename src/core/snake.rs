//! Snake engine.
//!
//! The snake starts four cells long in the middle of the field heading
//! right. Each tick the head advances one cell; eating an apple grows the
//! body by one and scores a point. Hitting a wall or the body loses; a body
//! covering the whole field (200 cells) wins. Direction changes are
//! buffered and applied at the next tick, with instant reversals rejected.

use std::collections::VecDeque;

use crate::core::field::Field;
use crate::core::fsm::GameCore;
use crate::core::scoring;
use crate::core::snapshot::GameSnapshot;
use crate::highscore::HighScoreStore;
use crate::types::{
    Direction, GameStatus, UserAction, CELL_BLOCK, CELL_ITEM, FIELD_HEIGHT, FIELD_WIDTH,
    SNAKE_INITIAL_LENGTH, SNAKE_MAX_LENGTH, SNAKE_SCORE_FILE,
};

use crate::core::rng::SimpleRng;

/// Row the snake spawns on and the column of its tail cell.
const SPAWN_ROW: i8 = 10;
const SPAWN_TAIL_X: i8 = 3;

#[derive(Debug)]
pub struct SnakeEngine {
    field: Field,
    /// Body cells, head at the front.
    body: VecDeque<(i8, i8)>,
    direction: Direction,
    /// Direction requested since the last tick, applied at the next one.
    next_direction: Direction,
    apple: (i8, i8),
    accelerated: bool,
    rng: SimpleRng,
    score: u32,
    high_score: u32,
    level: u32,
    speed_ms: u32,
    status: GameStatus,
    max_length: usize,
    store: HighScoreStore,
}

impl SnakeEngine {
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, HighScoreStore::new(SNAKE_SCORE_FILE))
    }

    /// Engine with an explicit score store (tests point this at a temp file).
    pub fn with_store(seed: u32, store: HighScoreStore) -> Self {
        let high_score = store.load();
        let mut engine = Self {
            field: Field::new(),
            body: VecDeque::with_capacity(SNAKE_MAX_LENGTH),
            direction: Direction::Right,
            next_direction: Direction::Right,
            apple: (0, 0),
            accelerated: false,
            rng: SimpleRng::new(seed),
            score: 0,
            high_score,
            level: 1,
            speed_ms: scoring::speed_for_level(1),
            status: GameStatus::Ready,
            max_length: SNAKE_MAX_LENGTH,
            store,
        };
        engine.reset();
        engine
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> (i8, i8) {
        *self.body.front().unwrap_or(&(0, 0))
    }

    /// Tick interval with acceleration applied.
    fn effective_speed(&self) -> u32 {
        if self.accelerated {
            self.speed_ms / 2
        } else {
            self.speed_ms
        }
    }

    /// Pick a uniformly random free cell for the apple by rejection
    /// sampling. Callers guarantee at least one free cell exists.
    fn place_apple(&mut self) {
        loop {
            let x = self.rng.next_range(FIELD_WIDTH as u32) as i8;
            let y = self.rng.next_range(FIELD_HEIGHT as u32) as i8;
            if self.field.is_free(x, y) {
                self.apple = (x, y);
                self.field.set(x, y, CELL_ITEM);
                return;
            }
        }
    }

    fn persist_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.high_score);
        }
    }

    /// Advance the head one cell: the whole move/eat/collide step.
    fn step(&mut self) {
        self.direction = self.next_direction;
        let (dx, dy) = self.direction.offset();
        let (hx, hy) = self.head();
        let new_head = (hx + dx, hy + dy);

        if !Field::is_inside(new_head.0, new_head.1) {
            self.status = GameStatus::Lost;
            self.persist_high_score();
            return;
        }

        let growing = new_head == self.apple;
        if !growing {
            // The tail vacates its cell this tick, so moving into it is legal.
            if let Some((tx, ty)) = self.body.pop_back() {
                self.field.set(tx, ty, crate::types::CELL_EMPTY);
            }
        }

        if self.field.get(new_head.0, new_head.1) == Some(CELL_BLOCK) {
            self.status = GameStatus::Lost;
            self.persist_high_score();
            return;
        }

        self.body.push_front(new_head);
        self.field.set(new_head.0, new_head.1, CELL_BLOCK);

        if growing {
            self.score += 1;
            self.persist_high_score();
            if self.body.len() >= self.max_length {
                self.status = GameStatus::Won;
                return;
            }
            self.level = scoring::snake_level(self.score);
            self.speed_ms = scoring::speed_for_level(self.level);
            self.place_apple();
        }
    }

    #[cfg(test)]
    pub(crate) fn force_apple(&mut self, x: i8, y: i8) {
        let (ax, ay) = self.apple;
        self.field.set(ax, ay, crate::types::CELL_EMPTY);
        self.apple = (x, y);
        self.field.set(x, y, CELL_ITEM);
    }

    #[cfg(test)]
    pub(crate) fn set_max_length_for_test(&mut self, max: usize) {
        self.max_length = max;
    }
}

impl GameCore for SnakeEngine {
    fn reset(&mut self) {
        self.field.clear();
        self.body.clear();
        // Tail at x=3, head at x=6, all on the middle row, heading right.
        for i in 0..SNAKE_INITIAL_LENGTH as i8 {
            let x = SPAWN_TAIL_X + i;
            self.body.push_front((x, SPAWN_ROW));
            self.field.set(x, SPAWN_ROW, CELL_BLOCK);
        }
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.accelerated = false;
        self.score = 0;
        self.high_score = self.store.load();
        self.level = 1;
        self.speed_ms = scoring::speed_for_level(1);
        self.status = GameStatus::Ready;
        self.place_apple();
    }

    fn begin(&mut self) {
        self.status = GameStatus::Running;
    }

    fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.step();
    }

    fn handle_action(&mut self, action: UserAction, hold: bool) {
        if self.status != GameStatus::Running {
            return;
        }
        if action == UserAction::Action {
            self.accelerated = hold;
            return;
        }
        if let Some(dir) = Direction::from_action(action) {
            if dir != self.direction.opposite() {
                self.next_direction = dir;
            }
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
            self.persist_high_score();
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn write_snapshot(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        out.preview = None;
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.speed_ms = self.effective_speed();
        out.paused = self.status == GameStatus::Paused;
        out.status = self.status;
    }
}
