//! Core types shared across the crate.
//! Pure data with no external dependencies.

/// Playfield dimensions (cells).
pub const FIELD_WIDTH: u8 = 10;
pub const FIELD_HEIGHT: u8 = 20;

/// Side length of the next-piece preview buffer (Tetris only).
pub const PREVIEW_SIZE: usize = 4;

/// Cell codes stored in the playfield and exported through snapshots.
/// Every reachable grid cell holds exactly one of these values.
pub const CELL_EMPTY: u8 = 0;
pub const CELL_BLOCK: u8 = 1;
pub const CELL_ITEM: u8 = 2;

/// Speed curve shared by both games: ms per tick at level 1, the per-level
/// decrement, and the floor clamp.
pub const BASE_SPEED_MS: u32 = 600;
pub const SPEED_STEP_MS: u32 = 60;
pub const MIN_SPEED_MS: u32 = 80;

/// Highest reachable level for both games.
pub const MAX_LEVEL: u32 = 10;

/// Tetris scoring table indexed by rows cleared at once.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Tetris: points per level step.
pub const TETRIS_POINTS_PER_LEVEL: u32 = 600;

/// Snake: apples per level step.
pub const SNAKE_POINTS_PER_LEVEL: u32 = 5;

/// Snake body at reset, and the body length that wins the game
/// (the whole 10x20 field).
pub const SNAKE_INITIAL_LENGTH: usize = 4;
pub const SNAKE_MAX_LENGTH: usize = 200;

/// Well-known high-score file names, one per game.
pub const TETRIS_SCORE_FILE: &str = "tetris_highscore.txt";
pub const SNAKE_SCORE_FILE: &str = "snake_highscore.txt";

/// User-facing input actions accepted at the plugin boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Start,
    Pause,
    Terminate,
    Up,
    Down,
    Left,
    Right,
    Action,
}

impl UserAction {
    /// Parse an action from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(UserAction::Start),
            "pause" => Some(UserAction::Pause),
            "terminate" => Some(UserAction::Terminate),
            "up" => Some(UserAction::Up),
            "down" => Some(UserAction::Down),
            "left" => Some(UserAction::Left),
            "right" => Some(UserAction::Right),
            "action" => Some(UserAction::Action),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserAction::Start => "start",
            UserAction::Pause => "pause",
            UserAction::Terminate => "terminate",
            UserAction::Up => "up",
            UserAction::Down => "down",
            UserAction::Left => "left",
            UserAction::Right => "right",
            UserAction::Action => "action",
        }
    }
}

/// Snake movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The exact geometric opposite (used to reject instant reversals).
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset in grid coordinates (y grows downward).
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a directional user action; other actions yield `None`.
    pub fn from_action(action: UserAction) -> Option<Self> {
        match action {
            UserAction::Up => Some(Direction::Up),
            UserAction::Down => Some(Direction::Down),
            UserAction::Left => Some(Direction::Left),
            UserAction::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Lifecycle states. `Won` is reachable only by Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ready,
    Running,
    Paused,
    Lost,
    Won,
}

impl GameStatus {
    /// Terminal states: no further gameplay until a full restart.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Lost | GameStatus::Won)
    }
}

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order (one bag's worth).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states (North = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// The next rotation state (single-direction rotation, clockwise).
    pub fn next(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_round_trips_through_strings() {
        for action in [
            UserAction::Start,
            UserAction::Pause,
            UserAction::Terminate,
            UserAction::Up,
            UserAction::Down,
            UserAction::Left,
            UserAction::Right,
            UserAction::Action,
        ] {
            assert_eq!(UserAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(UserAction::from_str("bogus"), None);
    }

    #[test]
    fn opposites_are_symmetric() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn rotation_cycles_in_four_steps() {
        let mut rot = Rotation::North;
        for _ in 0..4 {
            rot = rot.next();
        }
        assert_eq!(rot, Rotation::North);
    }

    #[test]
    fn only_arrow_actions_map_to_directions() {
        assert_eq!(Direction::from_action(UserAction::Up), Some(Direction::Up));
        assert_eq!(
            Direction::from_action(UserAction::Left),
            Some(Direction::Left)
        );
        assert_eq!(Direction::from_action(UserAction::Start), None);
        assert_eq!(Direction::from_action(UserAction::Action), None);
    }
}
