//! Read-only views of the engine for renderers.

use crate::piece::{Matrix, Piece};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DROP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute coordinates of the piece's cells if it sat at row `y`.
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .filter_map(move |(dx, dy)| Some((self.x.checked_add(dx)?, y.checked_add(dy)?)))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells as `PieceKind::code` values, 0 for empty.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Locked cell at `(x, y)`, `None` when empty or out of bounds.
    pub fn cell(&self, x: i8, y: i8) -> Option<PieceKind> {
        if x < 0 || y < 0 {
            return None;
        }
        let code = *self.board.get(y as usize)?.get(x as usize)?;
        PieceKind::from_code(code)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            level: 0,
            drop_interval_ms: INITIAL_DROP_MS,
            paused: false,
            game_over: false,
            episode_id: 0,
        }
    }
}
