//! Error types for board construction and cascade resolution.

use crate::types::Position;

/// Errors reported by the engine.
///
/// Out-of-range queries and illegal moves are not errors: they answer
/// "not found" and an empty effect log respectively.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A board must have at least one row and one column, each side must fit
    /// an `i32` coordinate and the cell count must fit a `usize`.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Row-major values did not cover the board exactly once.
    #[error("expected {expected} tiles, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    /// A tile was stored at an index that does not correspond to its position.
    #[error("tile at index {index} claims position {position}")]
    TilePositionMismatch { index: usize, position: Position },

    /// A restored board had a cell without a value.
    #[error("tile at {position} has no value")]
    EmptyTile { position: Position },

    /// The cascade kept finding matches after the configured number of refills.
    #[error("cascade did not settle within {limit} refill passes")]
    CascadeLimitExceeded { limit: usize },

    /// A value source was built from an empty list of values.
    #[error("value source requires at least one value")]
    EmptyValueSet,
}
