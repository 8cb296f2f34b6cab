//! Shared types and rule constants.
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! input boundary and the renderer can all agree on it.
//!
//! # Board
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: column `BOARD_WIDTH / 2 - 2`, row 0, for every shape
//!
//! # Timing
//!
//! Values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DROP_MS` | 500 | Gravity interval at game start |
//! | `BASE_DROP_MS` | 520 | Interval the speed ramp starts from after a lock |
//! | `MIN_DROP_MS` | 95 | Floor of the speed ramp |
//! | `SPEED_STEP_MS` | 20 | Interval shaved off per speed step |
//! | `SPEED_SCORE_STEP` | 650 | Score needed per speed step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for every shape, regardless of its width.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn row (top of the visible board).
pub const SPAWN_Y: i8 = 0;

/// Gravity interval right after a start or restart.
pub const INITIAL_DROP_MS: u32 = 500;

/// Gravity interval the post-lock speed ramp is computed from.
pub const BASE_DROP_MS: u32 = 520;

/// Fastest gravity interval the ramp can reach.
pub const MIN_DROP_MS: u32 = 95;

/// Milliseconds removed from the interval per speed step.
pub const SPEED_STEP_MS: u32 = 20;

/// Score required for each speed step.
pub const SPEED_SCORE_STEP: u32 = 650;

/// Points for clearing 0..=4 lines with a single lock.
pub const LINE_SCORES: [u32; 5] = [0, 120, 320, 560, 900];

/// Points per line for clears larger than the table covers.
pub const OVERFLOW_LINE_SCORE: u32 = 220;

/// Impact strength for a line clear is `IMPACT_BASE + lines * IMPACT_PER_LINE`.
pub const IMPACT_BASE: u8 = 6;

/// See [`IMPACT_BASE`].
pub const IMPACT_PER_LINE: u8 = 2;

/// Impact strength when the game ends.
pub const GAME_OVER_IMPACT: u8 = 14;

/// Line count from which a clear is announced as a "mega" clear.
pub const MEGA_CLEAR_LINES: u32 = 4;

/// The seven tetromino kinds.
///
/// Declaration order is the selection order used by the random sources:
/// index 0 is I, index 6 is Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in selection order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Kind at a selection index, if the index is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Selection index of this kind.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Fixed color of the kind as `0xRRGGBB`.
    pub fn color(&self) -> u32 {
        match self {
            PieceKind::I => 0x6bdcff,
            PieceKind::J => 0x7ea0ff,
            PieceKind::L => 0xffbf70,
            PieceKind::O => 0xffe77f,
            PieceKind::S => 0x89ea97,
            PieceKind::T => 0xd1a3ff,
            PieceKind::Z => 0xffa1b8,
        }
    }

    /// Compact board code (1..=7); 0 is reserved for an empty cell.
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => None,
            c => Self::from_index(c as usize - 1),
        }
    }
}

/// A cell on the board: `None` is empty, `Some(kind)` holds that kind's color.
pub type Cell = Option<PieceKind>;

/// Logical player actions.
///
/// The input boundary maps raw key presses onto these; anything it cannot
/// map never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance one row, locking if blocked
    SoftDrop,
    /// Drop to the lowest legal row and lock
    HardDrop,
    /// Rotate 90° clockwise with a one-cell wall kick
    Rotate,
    /// Toggle gravity on/off
    Pause,
    /// Start over; the only action accepted after game over
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "softdrop" | "down" => Some(GameAction::SoftDrop),
            "harddrop" | "drop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Fire-and-forget notifications emitted by engine operations.
///
/// Audio and visual feedback layers consume these; the engine never waits
/// for them to be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The active piece shifted sideways (or a manual soft drop was requested).
    Moved,
    /// The active piece rotated.
    Rotated,
    /// The active piece advanced one row.
    SoftDropped,
    /// A hard drop finished, after falling `rows` rows.
    Dropped { rows: u8 },
    /// A lock cleared this many rows.
    LinesCleared(u32),
    /// Board impact of the given strength (drives screen shake).
    Impact { power: u8 },
    /// The freshly spawned piece collided; the session is over.
    GameOver,
    /// Gravity was suspended (`true`) or resumed (`false`).
    Paused(bool),
    /// A new session started.
    Restarted,
}
