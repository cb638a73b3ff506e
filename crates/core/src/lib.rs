//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the whole tile-matching engine: the board, match
//! detection, move validation and the cascade that settles a board after a
//! move. It has **no dependencies** on UI, storage or networking, making it:
//!
//! - **Deterministic**: the same board and value source produce the same effects
//! - **Testable**: every rule is exercised by unit and property tests
//! - **Portable**: runs anywhere a value source can be supplied
//!
//! # Module Structure
//!
//! - [`board`]: `width x height` grid with positional lookup and value swaps
//! - [`source`]: the value source trait plus seeded and cycling sources
//! - [`matching`]: row and column scans for runs of three or more
//! - [`moves`]: speculative move validation and legal move enumeration
//! - [`cascade`]: clear/drop/refill loop with snapshot effects
//! - [`game`]: the public operations, as free functions and as [`Game`]
//! - [`effect`]: `Match`/`Refill` effect log entries and [`MoveResult`]
//!
//! # Rules
//!
//! - **Swaps**: two distinct cells sharing a row or a column (optionally only
//!   neighbours) may be swapped if the result contains a match
//! - **Matches**: three or more equal values in a row or column
//! - **Gravity**: cleared cells are filled by the values above them falling down
//! - **Refill**: vacated top cells receive fresh values from the source
//! - **Cascade**: the above repeats until no match remains
//!
//! # Example
//!
//! ```
//! use match_three_core::{game, Board, CyclingSource, Effect};
//! use match_three_core::types::Position;
//!
//! let mut board = Board::from_values(4, 1, vec!['a', 'b', 'a', 'a']).unwrap();
//! let mut source = CyclingSource::new(vec!['x', 'y']).unwrap();
//!
//! let first = Position::new(0, 0);
//! let second = Position::new(0, 1);
//! assert!(game::can_move(&mut board, first, second));
//!
//! let result = game::make_move(&mut source, &mut board, first, second).unwrap();
//! assert!(matches!(result.effects[0], Effect::Match { .. }));
//! assert!(matches!(result.effects[1], Effect::Refill { .. }));
//! assert_eq!(game::tile_value(&board, Position::new(0, 1)), Some('x'));
//! ```

pub mod board;
pub mod cascade;
pub mod config;
pub mod effect;
pub mod error;
pub mod game;
pub mod matching;
pub mod moves;
pub mod source;

pub use match_three_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use cascade::CascadeReport;
pub use config::{EngineConfig, MoveRules};
pub use effect::{Effect, Match, MoveResult};
pub use error::EngineError;
pub use game::Game;
pub use matching::ScanResult;
pub use source::{ColorSource, CyclingSource, SimpleRng, ValueSource};
