//! Match detection
//!
//! Scans every line of one axis for runs of at least [`MIN_MATCH_LEN`] equal
//! values. Within a line, each distinct value starts at most one run check:
//! the first tile carrying that value. From the start tile the detector walks
//! outwards in both directions while neighbours hold the same value; the board
//! edge or a different (or empty) value ends the walk.
//!
//! Lines are visited in a fixed order:
//!
//! - rows top to bottom, tiles left to right
//! - columns right to left, tiles top to bottom
//!
//! Each declared run becomes one `Match` effect immediately, so the effect
//! order follows the visiting order.

use tracing::trace;

use crate::board::Board;
use crate::effect::{Effect, Match};
use crate::types::{Axis, Direction, Position, MIN_MATCH_LEN};

/// Matches found by scanning one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult<T> {
    /// Every matched position, each listed once, in discovery order
    pub matched: Vec<Position>,
    /// One `Match` effect per declared run, in discovery order
    pub effects: Vec<Effect<T>>,
}

impl<T> ScanResult<T> {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

impl<T> Default for ScanResult<T> {
    fn default() -> Self {
        Self {
            matched: Vec::new(),
            effects: Vec::new(),
        }
    }
}

/// Scan all rows, top to bottom
pub fn scan_rows<T: Clone + PartialEq>(board: &Board<T>) -> ScanResult<T> {
    scan_axis(board, Axis::Row)
}

/// Scan all columns, right to left
pub fn scan_columns<T: Clone + PartialEq>(board: &Board<T>) -> ScanResult<T> {
    scan_axis(board, Axis::Column)
}

/// Scan every line along `axis`
pub fn scan_axis<T: Clone + PartialEq>(board: &Board<T>, axis: Axis) -> ScanResult<T> {
    let mut result = ScanResult::default();
    let mut seen = vec![false; board.width() * board.height()];

    let count = board.line_count(axis);
    let lines: Vec<usize> = match axis {
        Axis::Row => (0..count).collect(),
        Axis::Column => (0..count).rev().collect(),
    };

    for line in lines {
        let mut checked: Vec<&T> = Vec::new();
        for start in board.line_positions(axis, line) {
            let Some(value) = board.value(start) else {
                continue;
            };
            if checked.contains(&value) {
                continue;
            }
            checked.push(value);

            let Some(run) = find_run(board, start, axis) else {
                continue;
            };
            trace!(axis = axis.as_str(), line, len = run.len(), "match declared");
            for &position in &run.positions {
                if let Some(idx) = board.index(position) {
                    if !seen[idx] {
                        seen[idx] = true;
                        result.matched.push(position);
                    }
                }
            }
            result.effects.push(Effect::Match { found: run });
        }
    }

    result
}

/// Expand the run through `start` along `axis`.
///
/// Positions are ordered backward walk reversed (outermost first), then
/// `start`, then the forward walk (innermost first). Returns `None` when the
/// run is shorter than [`MIN_MATCH_LEN`] or `start` is empty/out of bounds.
pub fn find_run<T: Clone + PartialEq>(
    board: &Board<T>,
    start: Position,
    axis: Axis,
) -> Option<Match<T>> {
    let value = board.value(start)?;
    let (backward, forward) = axis.directions();

    let mut positions = walk(board, start, backward, value);
    positions.reverse();
    positions.push(start);
    positions.extend(walk(board, start, forward, value));

    if positions.len() < MIN_MATCH_LEN {
        return None;
    }
    Some(Match {
        matched: value.clone(),
        positions,
    })
}

/// Collect neighbours of `start` holding `value`, stepping in `direction`
fn walk<T: PartialEq>(
    board: &Board<T>,
    start: Position,
    direction: Direction,
    value: &T,
) -> Vec<Position> {
    let mut found = Vec::new();
    let mut current = start.step(direction);
    while board.value(current) == Some(value) {
        found.push(current);
        current = current.step(direction);
    }
    found
}

/// True when neither axis holds a match
pub fn is_stable<T: Clone + PartialEq>(board: &Board<T>) -> bool {
    scan_rows(board).is_empty() && scan_columns(board).is_empty()
}
