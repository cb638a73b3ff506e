//! Terminal rendering module.
//!
//! A small, line-oriented rendering layer for the command-line front-end.
//! It renders boards and effect logs into crossterm command buffers that the
//! caller flushes to a terminal.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Draw any tile type that knows its glyph and color
//! - Work in plain (cooked-mode) terminals and when output is piped

pub mod board_view;

pub use match_three_core as core;
pub use match_three_types as types;

pub use board_view::{
    encode_board_into, encode_effect_into, encode_result_into, render_board_string, TileGlyph,
    EMPTY_GLYPH,
};
