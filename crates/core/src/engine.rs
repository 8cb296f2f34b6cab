//! Engine module - owns the grid, the active piece and the score
//!
//! Every player-facing operation lives here: moving, rotating with a
//! one-cell wall kick, soft and hard drops, locking (merge, line clear,
//! scoring, speed ramp, next spawn) and restarting. Illegal moves are not
//! errors; they leave the state untouched and report `false`.
//!
//! Operations push [`GameEvent`]s onto a bounded internal queue that
//! presentation layers drain with [`Engine::drain_events`]. When nobody
//! drains, the oldest events are dropped to make room for new ones.

use arrayvec::{ArrayVec, Drain};
use tracing::{debug, info, trace};

use crate::grid::Grid;
use crate::piece::{pick_piece, Piece};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{drop_interval_ms, line_clear_points, speed_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    GameAction, GameEvent, GAME_OVER_IMPACT, IMPACT_BASE, IMPACT_PER_LINE, INITIAL_DROP_MS,
};

/// Horizontal offsets tried, in order, when a rotation is requested.
pub const KICK_OFFSETS: [i8; 3] = [0, -1, 1];

/// Event slots kept between drains; one frame of input plus a gravity tick fits.
pub const EVENT_QUEUE_CAPACITY: usize = 16;

/// Coarse lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineState {
    /// Normal play.
    Active,
    /// Gravity suspended; manual input still works.
    Paused,
    /// Terminal until restart.
    GameOver,
}

/// Complete game session.
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    grid: Grid,
    active: Piece,
    rng: R,
    score: u32,
    lines: u32,
    drop_interval_ms: u32,
    paused: bool,
    game_over: bool,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    events: ArrayVec<GameEvent, EVENT_QUEUE_CAPACITY>,
}

impl Engine<SimpleRng> {
    /// Create a new game drawing shapes from a seeded LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// Create a new game with an empty grid and a freshly drawn piece.
    pub fn new(mut rng: R) -> Self {
        let active = pick_piece(&mut rng);
        Self {
            grid: Grid::new(),
            active,
            rng,
            score: 0,
            lines: 0,
            drop_interval_ms: INITIAL_DROP_MS,
            paused: false,
            game_over: false,
            episode_id: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        if self.game_over {
            EngineState::GameOver
        } else if self.paused {
            EngineState::Paused
        } else {
            EngineState::Active
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions.
    ///
    /// Bypasses the lock pipeline: no scoring, no events.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Speed steps earned so far.
    pub fn level(&self) -> u32 {
        speed_level(self.score)
    }

    /// Current gravity interval in milliseconds.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Take every event emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent, EVENT_QUEUE_CAPACITY> {
        self.events.drain(..)
    }

    /// Events waiting to be drained, oldest first.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Queue an event, evicting the oldest one when the queue is full.
    fn emit(&mut self, event: GameEvent) {
        if let Err(err) = self.events.try_push(event) {
            let evicted = self.events.remove(0);
            trace!(?evicted, "event queue full");
            self.events.push(err.element());
        }
    }

    /// Shift the active piece horizontally by `dx` if it fits.
    pub fn move_by(&mut self, dx: i8) -> bool {
        if self.game_over || self.grid.collides(&self.active, dx, 0) {
            return false;
        }
        self.active.x += dx;
        self.emit(GameEvent::Moved);
        true
    }

    /// Rotate clockwise, trying no shift, then one cell left, then one right.
    ///
    /// Either the whole rotation (matrix and kick) is applied or nothing is.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.active.matrix.rotate_cw();
        let Some(kick) = KICK_OFFSETS
            .into_iter()
            .find(|&dx| !self.grid.collides_with(&self.active, dx, 0, &rotated))
        else {
            return false;
        };

        self.active.matrix = rotated;
        self.active.x += kick;
        self.emit(GameEvent::Rotated);
        true
    }

    /// Advance one row. If blocked, lock instead and return `false`.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if !self.grid.collides(&self.active, 0, 1) {
            self.active.y += 1;
            self.emit(GameEvent::SoftDropped);
            return true;
        }
        self.lock_and_next();
        false
    }

    /// Fall to the lowest legal row, then lock. Returns the rows fallen.
    pub fn hard_drop(&mut self) -> u8 {
        if self.game_over {
            return 0;
        }
        let mut rows: u8 = 0;
        while !self.grid.collides(&self.active, 0, 1) {
            self.active.y += 1;
            rows += 1;
        }
        self.emit(GameEvent::Dropped { rows });
        self.lock_and_next();
        rows
    }

    /// Merge the active piece, clear rows, score, speed up, spawn the next.
    ///
    /// Ends the game when the new piece collides where it spawns.
    pub fn lock_and_next(&mut self) {
        if self.game_over {
            return;
        }
        self.grid.merge(&self.active);

        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            let points = line_clear_points(cleared);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared);
            debug!(cleared, points, score = self.score, "lines cleared");

            let power = (cleared as u8)
                .saturating_mul(IMPACT_PER_LINE)
                .saturating_add(IMPACT_BASE);
            self.emit(GameEvent::LinesCleared(cleared));
            self.emit(GameEvent::Impact { power });
        } else {
            debug!(kind = ?self.active.kind, x = self.active.x, y = self.active.y, "piece locked");
        }

        self.drop_interval_ms = drop_interval_ms(self.score);
        self.active = pick_piece(&mut self.rng);

        if self.grid.collides(&self.active, 0, 0) {
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "game over");
            self.emit(GameEvent::GameOver);
            self.emit(GameEvent::Impact {
                power: GAME_OVER_IMPACT,
            });
        }
    }

    /// Row the active piece would rest on after a hard drop.
    pub fn ghost_y(&self) -> i8 {
        let mut distance: i8 = 0;
        while !self.grid.collides(&self.active, 0, distance + 1) {
            distance += 1;
        }
        self.active.y + distance
    }

    /// Flip the paused flag. Rejected once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.emit(GameEvent::Paused(self.paused));
        true
    }

    /// Start a fresh session, whatever state the current one is in.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = pick_piece(&mut self.rng);
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = INITIAL_DROP_MS;
        self.paused = false;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.emit(GameEvent::Restarted);
        info!(episode = self.episode_id, "restarted");
    }

    /// Apply a logical input action.
    ///
    /// After game over only `Restart` is accepted.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Restart {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_by(-1),
            GameAction::MoveRight => self.move_by(1),
            GameAction::SoftDrop => {
                let advanced = self.soft_drop();
                self.emit(GameEvent::Moved);
                advanced
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.ghost_y = Some(self.ghost_y());
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level();
        out.drop_interval_ms = self.drop_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
