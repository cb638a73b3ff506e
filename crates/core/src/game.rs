//! Game API - the public operations composed from the engine parts
//!
//! Two flavours are offered:
//!
//! - free functions ([`create`], [`tile_value`], [`can_move`], [`make_move`],
//!   [`initial_scan`]) operating on a caller-owned board with the default
//!   [`EngineConfig`]
//! - [`Game`], which owns the board, the value source and a configuration
//!
//! All operations mutate the board in place and run to completion. The engine
//! does no locking; callers sharing a board between threads must serialize
//! access themselves.

use tracing::debug;

use crate::board::Board;
use crate::cascade::{self, CascadeReport};
use crate::config::EngineConfig;
use crate::effect::MoveResult;
use crate::error::EngineError;
use crate::moves;
use crate::source::ValueSource;
use crate::types::Position;

/// Create a board filled from `source`. No scan is run, so it may contain matches.
pub fn create<T, S>(source: &mut S, width: usize, height: usize) -> Result<Board<T>, EngineError>
where
    S: ValueSource<T> + ?Sized,
{
    Board::create(source, width, height)
}

/// Value at `position`; `None` when out of bounds
pub fn tile_value<T: Clone>(board: &Board<T>, position: Position) -> Option<T> {
    board.value(position).cloned()
}

/// Whether swapping `first` and `second` is legal. The board is left unchanged.
pub fn can_move<T: Clone + PartialEq>(board: &mut Board<T>, first: Position, second: Position) -> bool {
    moves::is_move_legal(board, first, second, EngineConfig::default().rules)
}

/// Perform the swap if legal and resolve the resulting cascade.
///
/// An illegal move returns the unchanged board with no effects.
///
/// On [`EngineError::CascadeLimitExceeded`] the swap has already been made
/// and the board holds the state after the last refill, still fully
/// occupied. The effects produced before the limit tripped are discarded;
/// call [`cascade::resolve`] directly to keep them.
pub fn make_move<T, S>(
    source: &mut S,
    board: &mut Board<T>,
    first: Position,
    second: Position,
) -> Result<MoveResult<T>, EngineError>
where
    T: Clone + PartialEq,
    S: ValueSource<T> + ?Sized,
{
    apply_move_with(&EngineConfig::default(), source, board, first, second)
}

/// Resolve matches already present on `board`, e.g. right after creation.
pub fn initial_scan<T, S>(source: &mut S, board: &mut Board<T>) -> Result<MoveResult<T>, EngineError>
where
    T: Clone + PartialEq,
    S: ValueSource<T> + ?Sized,
{
    initial_scan_with(&EngineConfig::default(), source, board)
}

fn apply_move_with<T, S>(
    config: &EngineConfig,
    source: &mut S,
    board: &mut Board<T>,
    first: Position,
    second: Position,
) -> Result<MoveResult<T>, EngineError>
where
    T: Clone + PartialEq,
    S: ValueSource<T> + ?Sized,
{
    if !moves::is_move_legal(board, first, second, config.rules) {
        debug!(%first, %second, "illegal move");
        return Ok(MoveResult {
            board: board.clone(),
            effects: Vec::new(),
        });
    }

    board.swap(first, second);
    let mut effects = Vec::new();
    let report = cascade::resolve(board, source, &mut effects, config.max_cascade_passes)?;
    debug!(%first, %second, passes = report.passes, effects = effects.len(), "move applied");

    Ok(MoveResult {
        board: board.clone(),
        effects,
    })
}

fn initial_scan_with<T, S>(
    config: &EngineConfig,
    source: &mut S,
    board: &mut Board<T>,
) -> Result<MoveResult<T>, EngineError>
where
    T: Clone + PartialEq,
    S: ValueSource<T> + ?Sized,
{
    let mut effects = Vec::new();
    let report: CascadeReport =
        cascade::resolve(board, source, &mut effects, config.max_cascade_passes)?;
    debug!(passes = report.passes, cleared = report.cleared, "initial scan");
    Ok(MoveResult {
        board: board.clone(),
        effects,
    })
}

/// A board together with the source that refills it
#[derive(Debug, Clone)]
pub struct Game<T, S> {
    board: Board<T>,
    source: S,
    config: EngineConfig,
    moves_applied: u32,
}

impl<T, S> Game<T, S>
where
    T: Clone + PartialEq,
    S: ValueSource<T>,
{
    /// Create a fresh `width x height` board from `source`
    pub fn new(mut source: S, width: usize, height: usize, config: EngineConfig) -> Result<Self, EngineError> {
        let board = Board::create(&mut source, width, height)?;
        Ok(Self::from_board(board, source, config))
    }

    /// Resume play on an existing board, e.g. one restored from storage
    pub fn from_board(board: Board<T>, source: S, config: EngineConfig) -> Self {
        Self {
            board,
            source,
            config,
            moves_applied: 0,
        }
    }

    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Legal moves applied so far
    pub fn moves_applied(&self) -> u32 {
        self.moves_applied
    }

    pub fn tile_value(&self, position: Position) -> Option<T> {
        tile_value(&self.board, position)
    }

    pub fn can_move(&mut self, first: Position, second: Position) -> bool {
        moves::is_move_legal(&mut self.board, first, second, self.config.rules)
    }

    /// See [`make_move`]. A move whose cascade hits the pass limit still
    /// counts as applied, since the board has changed.
    pub fn apply_move(&mut self, first: Position, second: Position) -> Result<MoveResult<T>, EngineError> {
        match apply_move_with(&self.config, &mut self.source, &mut self.board, first, second) {
            Ok(result) => {
                if result.is_legal() {
                    self.moves_applied += 1;
                }
                Ok(result)
            }
            Err(err) => {
                // Only the cascade fails, and it runs after the swap.
                self.moves_applied += 1;
                Err(err)
            }
        }
    }

    pub fn initial_scan(&mut self) -> Result<MoveResult<T>, EngineError> {
        initial_scan_with(&self.config, &mut self.source, &mut self.board)
    }

    pub fn legal_moves(&mut self) -> Vec<(Position, Position)> {
        moves::legal_moves(&mut self.board, self.config.rules)
    }

    pub fn has_legal_move(&mut self) -> bool {
        moves::has_legal_move(&mut self.board, self.config.rules)
    }

    pub fn into_parts(self) -> (Board<T>, S) {
        (self.board, self.source)
    }
}
