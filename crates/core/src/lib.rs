//! Core game logic - pure, synchronous and testable
//!
//! This crate holds the rules of the falling-block game and nothing else:
//! no terminal, no audio, no clock. Time enters only through
//! [`Scheduler::tick`], randomness only through a [`RandomSource`].
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 cell matrix with collision queries, merging and line clearing
//! - [`piece`]: tetromino matrices, clockwise rotation, spawning
//! - [`engine`]: the session: moves, rotation with wall kick, drops, lock pipeline
//! - [`scheduler`]: frame timestamps -> gravity ticks
//! - [`scoring`]: line-clear table and score-driven speed ramp
//! - [`rng`]: injectable random sources
//! - [`snapshot`]: read-only state for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Engine, Scheduler, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut engine = Engine::with_seed(12345);
//! let mut scheduler = Scheduler::new(0);
//!
//! engine.apply_action(GameAction::MoveRight);
//! engine.apply_action(GameAction::Rotate);
//!
//! // 500ms later the first gravity tick fires.
//! assert_eq!(scheduler.tick(&mut engine, 499), TickOutcome::Waiting);
//! assert!(matches!(scheduler.tick(&mut engine, 500), TickOutcome::Gravity { .. }));
//!
//! engine.apply_action(GameAction::HardDrop);
//! assert!(engine.grid().filled_count() > 0);
//! ```

pub mod engine;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use engine::{Engine, EngineState, EVENT_QUEUE_CAPACITY, KICK_OFFSETS};
pub use grid::Grid;
pub use piece::{pick_piece, rotate, spawn_matrix, Matrix, Piece};
pub use rng::{RandomSource, ScriptedRng, SimpleRng, ThreadRandom};
pub use scheduler::{Scheduler, TickOutcome};
pub use scoring::{drop_interval_ms, line_clear_points, speed_level};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
