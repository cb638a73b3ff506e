//! Effect log entries
//!
//! A cascade reports what happened as an ordered list of [`Effect`]s: every
//! match declared by a scan pass, followed by the refill that pass caused.
//! Refill effects own a deep copy of the board taken at that moment, so a
//! retained log still shows each intermediate state after later moves.
//!
//! The serde form mirrors the JSON the web client persisted:
//! `{"kind":"Match","match":{...}}` and `{"kind":"Refill","board":{...}}`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Position;

/// A run of equal values found by the match detector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match<T> {
    /// The value shared by every position of the run
    pub matched: T,
    /// Positions in detection order
    pub positions: Vec<Position>,
}

impl<T> Match<T> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Effect<T> {
    /// A match was declared
    Match {
        #[serde(rename = "match")]
        found: Match<T>,
    },
    /// Cleared cells were dropped and refilled; `board` is the state right after
    Refill { board: Board<T> },
}

impl<T> Effect<T> {
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Effect::Match { found } => Some(found),
            Effect::Refill { .. } => None,
        }
    }

    pub fn as_refill(&self) -> Option<&Board<T>> {
        match self {
            Effect::Match { .. } => None,
            Effect::Refill { board } => Some(board),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Effect::Match { .. } => "Match",
            Effect::Refill { .. } => "Refill",
        }
    }
}

/// Outcome of a move or scan: the board afterwards and what happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult<T> {
    pub board: Board<T>,
    /// Empty when the move was illegal or the board was already stable
    pub effects: Vec<Effect<T>>,
}

impl<T> MoveResult<T> {
    /// True when the operation changed the board
    pub fn is_legal(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> + '_ {
        self.effects.iter().filter_map(Effect::as_match)
    }

    pub fn refills(&self) -> impl Iterator<Item = &Board<T>> + '_ {
        self.effects.iter().filter_map(Effect::as_refill)
    }
}
