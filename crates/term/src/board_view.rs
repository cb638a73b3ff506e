//! Board and effect rendering for line-oriented terminals.
//!
//! Output is built as a sequence of crossterm commands queued into a byte
//! buffer; nothing is written to stdout here. Each cell is two characters
//! wide so the grid keeps a roughly square aspect ratio.

use std::fmt::Write as _;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{Board, Effect, MoveResult};
use crate::types::{Color, Position};

/// How a tile value is drawn
pub trait TileGlyph {
    /// Single character shown for the value
    fn glyph(&self) -> char;

    /// Foreground color; `None` keeps the terminal default
    fn color(&self) -> Option<TermColor> {
        None
    }
}

impl TileGlyph for Color {
    fn glyph(&self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    fn color(&self) -> Option<TermColor> {
        Some(match self {
            Color::Yellow => TermColor::Yellow,
            Color::Red => TermColor::Red,
            Color::Blue => TermColor::Blue,
            Color::Green => TermColor::Green,
        })
    }
}

impl TileGlyph for char {
    fn glyph(&self) -> char {
        *self
    }
}

/// Glyph used for a cleared cell
pub const EMPTY_GLYPH: char = '.';

/// Encode the board as a grid with row and column indices.
pub fn encode_board_into<T: TileGlyph>(board: &Board<T>, out: &mut Vec<u8>) -> Result<()> {
    let mut header = String::from("   ");
    for col in 0..board.width() {
        let _ = write!(header, "{:>2}", col % 100);
    }
    out.queue(SetAttribute(Attribute::Dim))?;
    out.queue(Print(header))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\r\n"))?;

    for row in 0..board.height() {
        out.queue(SetAttribute(Attribute::Dim))?;
        out.queue(Print(format!("{:>2} ", row % 100)))?;
        out.queue(SetAttribute(Attribute::Reset))?;
        for tile in board.row(row) {
            match &tile.value {
                Some(value) => {
                    if let Some(color) = value.color() {
                        out.queue(SetForegroundColor(color))?;
                    }
                    out.queue(Print(format!(" {}", value.glyph())))?;
                    out.queue(ResetColor)?;
                }
                None => {
                    out.queue(Print(format!(" {}", EMPTY_GLYPH)))?;
                }
            }
        }
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

/// Encode one effect as a single summary line (refills also print the board).
pub fn encode_effect_into<T: TileGlyph>(effect: &Effect<T>, out: &mut Vec<u8>) -> Result<()> {
    match effect {
        Effect::Match { found } => {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print("match "))?;
            out.queue(SetAttribute(Attribute::Reset))?;
            if let Some(color) = found.matched.color() {
                out.queue(SetForegroundColor(color))?;
            }
            out.queue(Print(found.matched.glyph()))?;
            out.queue(ResetColor)?;
            out.queue(Print(format!(" x{} at {}\r\n", found.len(), format_positions(&found.positions))))?;
        }
        Effect::Refill { board } => {
            out.queue(SetAttribute(Attribute::Bold))?;
            out.queue(Print("refill\r\n"))?;
            out.queue(SetAttribute(Attribute::Reset))?;
            encode_board_into(board, out)?;
        }
    }
    Ok(())
}

/// Encode every effect of a move, or a notice when the move was rejected.
pub fn encode_result_into<T: TileGlyph>(result: &MoveResult<T>, out: &mut Vec<u8>) -> Result<()> {
    if !result.is_legal() {
        out.queue(Print("no match: move rejected\r\n"))?;
        return Ok(());
    }
    for effect in &result.effects {
        encode_effect_into(effect, out)?;
    }
    Ok(())
}

fn format_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text rendering without escape sequences, one line per row.
pub fn render_board_string<T: TileGlyph>(board: &Board<T>) -> String {
    let mut text = String::with_capacity(board.width() * board.height() + board.height());
    for row in 0..board.height() {
        for tile in board.row(row) {
            text.push(tile.value.as_ref().map_or(EMPTY_GLYPH, TileGlyph::glyph));
        }
        text.push('\n');
    }
    text
}
