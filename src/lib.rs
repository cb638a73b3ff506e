//! Match-three (workspace facade crate).
//!
//! This package exposes `match_three::{core,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. The CLI support
//! modules (`config`, `effect_log`) live here with the binary.

pub mod config;
pub mod effect_log;

pub use match_three_core as core;
pub use match_three_term as term;
pub use match_three_types as types;
