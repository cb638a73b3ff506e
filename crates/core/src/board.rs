//! Board module - the tile grid
//!
//! The board is a `width x height` grid holding exactly one tile per cell.
//! Uses a flat vector in row-major order (`row * width + col`) so positional
//! lookup is an index computation rather than a search.
//!
//! A tile's value is `None` only transiently, between clearing matched tiles
//! and refilling them inside a cascade. Boards handed back to callers are
//! always fully occupied, and deserialization rejects boards with empty cells.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::source::ValueSource;
use crate::types::{Axis, Position};

/// One cell of the board: its current value and its fixed position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile<T> {
    /// `None` marks a cleared cell awaiting refill
    pub value: Option<T>,
    pub position: Position,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Board<T> {
    width: usize,
    height: usize,
    /// Row-major tiles; `tiles[i].position` always matches index `i`
    tiles: Vec<Tile<T>>,
}

/// Unchecked wire form, validated into a [`Board`] on deserialization
#[derive(Deserialize)]
struct RawBoard<T> {
    width: usize,
    height: usize,
    tiles: Vec<Tile<T>>,
}

impl<T> TryFrom<RawBoard<T>> for Board<T> {
    type Error = EngineError;

    fn try_from(raw: RawBoard<T>) -> Result<Self, Self::Error> {
        let expected = check_dimensions(raw.width, raw.height)?;
        if raw.tiles.len() != expected {
            return Err(EngineError::TileCountMismatch {
                expected,
                actual: raw.tiles.len(),
            });
        }
        for (index, tile) in raw.tiles.iter().enumerate() {
            if tile.position != position_at(raw.width, index) {
                return Err(EngineError::TilePositionMismatch {
                    index,
                    position: tile.position,
                });
            }
            if tile.value.is_none() {
                return Err(EngineError::EmptyTile {
                    position: tile.position,
                });
            }
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

/// Validate dimensions and return the cell count.
///
/// Both sides must be positive and fit a `Position` coordinate, and the
/// cell count must fit a `usize`.
fn check_dimensions(width: usize, height: usize) -> Result<usize, EngineError> {
    let max_side = i32::MAX as usize;
    if width == 0 || height == 0 || width > max_side || height > max_side {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions { width, height })
}

#[inline]
fn position_at(width: usize, index: usize) -> Position {
    Position::new((index / width) as i32, (index % width) as i32)
}

impl<T> Board<T> {
    /// Allocate a `width x height` board, filling it row by row with one
    /// value per cell drawn from `source`.
    pub fn create<S>(source: &mut S, width: usize, height: usize) -> Result<Self, EngineError>
    where
        S: ValueSource<T> + ?Sized,
    {
        let cells = check_dimensions(width, height)?;
        let tiles = (0..cells)
            .map(|index| Tile {
                value: Some(source.next_value()),
                position: position_at(width, index),
            })
            .collect();
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build a board from row-major values.
    pub fn from_values(width: usize, height: usize, values: Vec<T>) -> Result<Self, EngineError> {
        let expected = check_dimensions(width, height)?;
        if values.len() != expected {
            return Err(EngineError::TileCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        let tiles = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Tile {
                value: Some(value),
                position: position_at(width, index),
            })
            .collect();
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from a position, `None` when out of bounds
    #[inline(always)]
    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        if !self.is_in_bounds(position) {
            return None;
        }
        Some(position.row as usize * self.width + position.col as usize)
    }

    /// True exactly when `0 <= row < height` and `0 <= col < width`
    pub fn is_in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.height
            && (position.col as usize) < self.width
    }

    /// The tile at `position`, if in bounds
    pub fn tile(&self, position: Position) -> Option<&Tile<T>> {
        self.index(position).map(|idx| &self.tiles[idx])
    }

    /// The value at `position`; `None` when out of bounds or cleared
    pub fn value(&self, position: Position) -> Option<&T> {
        self.tile(position).and_then(|tile| tile.value.as_ref())
    }

    /// Exchange the values held at two positions.
    ///
    /// Tiles stay bound to their positions; only values move.
    /// Returns false and leaves the board untouched if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                if ia != ib {
                    let (lo, hi) = (ia.min(ib), ia.max(ib));
                    let (head, tail) = self.tiles.split_at_mut(hi);
                    std::mem::swap(&mut head[lo].value, &mut tail[0].value);
                }
                true
            }
            _ => false,
        }
    }

    /// Mark the cell at `position` empty. Returns false if out of bounds.
    pub(crate) fn clear(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(idx) => {
                self.tiles[idx].value = None;
                true
            }
            None => false,
        }
    }

    /// Put a value into the cell at `position`. Returns false if out of bounds.
    pub(crate) fn fill(&mut self, position: Position, value: T) -> bool {
        match self.index(position) {
            Some(idx) => {
                self.tiles[idx].value = Some(value);
                true
            }
            None => false,
        }
    }

    /// True when the cell at `position` is in bounds and empty
    pub fn is_empty_at(&self, position: Position) -> bool {
        matches!(self.tile(position), Some(Tile { value: None, .. }))
    }

    /// True when every cell holds a value
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.value.is_some())
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile<T>] {
        &self.tiles
    }

    /// All values in row-major order
    pub fn values(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.tiles.iter().map(|tile| tile.value.as_ref())
    }

    /// Tiles of row `row`, left to right
    pub fn row(&self, row: usize) -> &[Tile<T>] {
        if row >= self.height {
            return &[];
        }
        let start = row * self.width;
        &self.tiles[start..start + self.width]
    }

    /// Tiles of column `col`, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Tile<T>> + '_ {
        let width = self.width;
        let take = if col < width { self.height } else { 0 };
        self.tiles.iter().skip(col).step_by(width).take(take)
    }

    /// Number of lines scanned along `axis`
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Positions of line `index` along `axis`, in scan order
    pub fn line_positions(&self, axis: Axis, index: usize) -> Vec<Position> {
        match axis {
            Axis::Row => self.row(index).iter().map(|tile| tile.position).collect(),
            Axis::Column => self.column(index).map(|tile| tile.position).collect(),
        }
    }
}

impl<T: Clone> Board<T> {
    /// Row-major values, cleared cells as `None`
    pub fn to_values(&self) -> Vec<Option<T>> {
        self.tiles.iter().map(|tile| tile.value.clone()).collect()
    }

    /// Convert to a 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Option<T>>> {
        (0..self.height)
            .map(|row| self.row(row).iter().map(|tile| tile.value.clone()).collect())
            .collect()
    }
}
