//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no engine logic, making them usable from any
//! context (board model, match detection, terminal rendering, effect logs).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs:
//!
//! - **Row**: 0 is the top row, increasing downwards
//! - **Col**: 0 is the left column, increasing to the right
//!
//! Both components are signed so that out-of-range queries such as `(-1, 0)`
//! can be expressed and answered with "not found".
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 8 | Columns of a board created by the CLI |
//! | `DEFAULT_HEIGHT` | 8 | Rows of a board created by the CLI |
//! | `MIN_MATCH_LEN` | 3 | Shortest run that counts as a match |
//! | `DEFAULT_MAX_CASCADE_PASSES` | 1000 | Refill passes before a cascade is aborted |
//!
//! # Examples
//!
//! ```
//! use match_three_types::{Axis, Color, Direction, Position};
//!
//! let p = Position::new(2, 3);
//! assert_eq!(p.step(Direction::Left), Position::new(2, 2));
//! assert_eq!(p.step(Direction::Up), Position::new(1, 3));
//!
//! assert_eq!(Axis::Row.directions(), (Direction::Left, Direction::Right));
//!
//! assert_eq!(Color::from_str("RED"), Some(Color::Red));
//! assert_eq!(Color::Blue.as_str(), "blue");
//! ```

use serde::{Deserialize, Serialize};

/// Board width used when none is configured
pub const DEFAULT_WIDTH: usize = 8;

/// Board height used when none is configured
pub const DEFAULT_HEIGHT: usize = 8;

/// Minimum number of aligned equal values that form a match
pub const MIN_MATCH_LEN: usize = 3;

/// Upper bound on refill passes within one cascade
pub const DEFAULT_MAX_CASCADE_PASSES: usize = 1000;

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// The result may lie outside any board; callers check bounds.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.row - 1, self.col),
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Left => Self::new(self.row, self.col - 1),
            Direction::Right => Self::new(self.row, self.col + 1),
        }
    }

    /// True when both positions share a row or a column, but not both.
    pub fn is_aligned_with(self, other: Position) -> bool {
        (self.row == other.row) != (self.col == other.col)
    }

    /// True when the positions are orthogonal neighbours.
    pub fn is_adjacent_to(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Walk directions used by the neighbour expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The two scan axes of the match detector
///
/// - **Row**: lines are rows, runs extend left and right
/// - **Column**: lines are columns, runs extend up and down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// (backward, forward) walk directions along this axis
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Row => (Direction::Left, Direction::Right),
            Axis::Column => (Direction::Up, Direction::Down),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// Tile colors produced by the random color source
///
/// The palette matches the four colors of the web client:
/// yellow, red, blue and green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Red,
    Blue,
    Green,
}

impl Color {
    /// Every color, in palette order
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Red, Color::Blue, Color::Green];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match_three_types::Color;
    ///
    /// assert_eq!(Color::from_str("yellow"), Some(Color::Yellow));
    /// assert_eq!(Color::from_str("Green"), Some(Color::Green));
    /// assert_eq!(Color::from_str("purple"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yellow" => Some(Color::Yellow),
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::Up), Position::new(-1, 0));
        assert_eq!(p.step(Direction::Down), Position::new(1, 0));
        assert_eq!(p.step(Direction::Left), Position::new(0, -1));
        assert_eq!(p.step(Direction::Right), Position::new(0, 1));
    }

    #[test]
    fn alignment_requires_exactly_one_shared_coordinate() {
        let p = Position::new(1, 1);
        assert!(p.is_aligned_with(Position::new(1, 4)));
        assert!(p.is_aligned_with(Position::new(0, 1)));
        assert!(!p.is_aligned_with(p));
        assert!(!p.is_aligned_with(Position::new(2, 2)));
    }

    #[test]
    fn adjacency_is_manhattan_distance_one() {
        let p = Position::new(3, 3);
        assert!(p.is_adjacent_to(Position::new(3, 4)));
        assert!(p.is_adjacent_to(Position::new(2, 3)));
        assert!(!p.is_adjacent_to(Position::new(3, 5)));
        assert!(!p.is_adjacent_to(Position::new(4, 4)));
        assert!(!p.is_adjacent_to(p));
    }

    #[test]
    fn color_roundtrips_through_strings() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
        }
    }

    #[test]
    fn color_serializes_lowercase() {
        let json = serde_json::to_string(&Color::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let back: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(back, Color::Green);
    }
}
