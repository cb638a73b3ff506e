//! Cascade engine - detect, clear, drop, refill, repeat
//!
//! One pass:
//!
//! 1. Scan rows, then columns, against the current board.
//! 2. Append all row `Match` effects, then all column `Match` effects.
//! 3. If nothing matched, the board is stable and the cascade ends.
//! 4. Otherwise clear every matched cell, drop the remaining values of each
//!    column into the gaps, refill the vacated top cells from the value
//!    source, and append a `Refill` effect holding a copy of the board.
//!
//! Passes repeat until a scan finds nothing. A source that keeps recreating
//! matches would never settle, so the number of refill passes is capped.

use tracing::{debug, warn};

use crate::board::Board;
use crate::effect::Effect;
use crate::error::EngineError;
use crate::matching::{scan_columns, scan_rows};
use crate::source::ValueSource;
use crate::types::Position;

/// Summary of a finished cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    /// Refill passes performed
    pub passes: usize,
    /// Cells cleared over all passes (each cell counted once per pass)
    pub cleared: usize,
}

/// Run passes until the board is stable, appending effects to `effects`.
///
/// On [`EngineError::CascadeLimitExceeded`] the board is still fully
/// occupied and `effects` holds everything produced up to that point.
pub fn resolve<T, S>(
    board: &mut Board<T>,
    source: &mut S,
    effects: &mut Vec<Effect<T>>,
    max_passes: usize,
) -> Result<CascadeReport, EngineError>
where
    T: Clone + PartialEq,
    S: ValueSource<T> + ?Sized,
{
    let mut report = CascadeReport::default();

    loop {
        let rows = scan_rows(board);
        let columns = scan_columns(board);
        let found = rows.effects.len() + columns.effects.len();
        effects.extend(rows.effects);
        effects.extend(columns.effects);

        if rows.matched.is_empty() && columns.matched.is_empty() {
            debug!(passes = report.passes, cleared = report.cleared, "cascade settled");
            return Ok(report);
        }
        if report.passes >= max_passes {
            warn!(limit = max_passes, "cascade limit exceeded");
            return Err(EngineError::CascadeLimitExceeded { limit: max_passes });
        }

        let cleared = clear_matched(board, rows.matched.iter().chain(&columns.matched));
        refill(board, source);
        effects.push(Effect::Refill {
            board: board.clone(),
        });

        report.passes += 1;
        report.cleared += cleared;
        debug!(pass = report.passes, matches = found, cleared, "cascade pass");
    }
}

/// Empty every listed cell; returns how many cells went from filled to empty
fn clear_matched<'a, T>(board: &mut Board<T>, positions: impl IntoIterator<Item = &'a Position>) -> usize {
    let mut cleared = 0;
    for &position in positions {
        if !board.is_empty_at(position) && board.clear(position) {
            cleared += 1;
        }
    }
    cleared
}

/// Drop and refill every empty cell.
///
/// Columns are processed left to right, cells top to bottom. An empty cell
/// is bubbled to row 0 by swapping it with each cell above it, which moves
/// the values above down by one, and row 0 then receives a fresh value.
/// Cells above the current one were already handled, so one sweep leaves the
/// board full.
pub fn refill<T, S>(board: &mut Board<T>, source: &mut S)
where
    S: ValueSource<T> + ?Sized,
{
    let width = board.width() as i32;
    let height = board.height() as i32;

    for col in 0..width {
        for row in 0..height {
            if !board.is_empty_at(Position::new(row, col)) {
                continue;
            }
            for shift in (1..=row).rev() {
                board.swap(Position::new(shift, col), Position::new(shift - 1, col));
            }
            board.fill(Position::new(0, col), source.next_value());
        }
    }
}
