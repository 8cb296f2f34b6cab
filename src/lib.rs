//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can use `blockfall::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
