//! Terminal front end.
//!
//! A small, game-oriented rendering layer: the view renders into a plain
//! framebuffer, and the renderer flushes that framebuffer to the terminal
//! through `crossterm`. Transient effects (line-clear banner, status
//! message, board shake) live in [`Feedback`], which is fed with engine
//! events.

pub mod fb;
pub mod feedback;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use feedback::Feedback;
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
