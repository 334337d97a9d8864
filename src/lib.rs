//! New Year bot (workspace facade crate).
//!
//! Re-exports the `newyear_bot::{adapter,core,engine,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use newyear_bot_adapter as adapter;
pub use newyear_bot_core as core;
pub use newyear_bot_engine as engine;
pub use newyear_bot_types as types;
