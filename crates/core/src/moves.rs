//! Move validation
//!
//! A swap is legal when both positions are on the board, differ, share
//! exactly one coordinate (and are neighbours, if the rules demand it), and
//! the swapped board contains at least one match on either axis.
//!
//! The match check is speculative: the values are swapped in place, both
//! axes are scanned, and the values are swapped back. Effects produced by
//! those scans are discarded.

use crate::board::Board;
use crate::config::MoveRules;
use crate::matching::{scan_columns, scan_rows};
use crate::types::Position;

/// Geometric part of the legality check; does not look at values
pub fn is_shape_legal<T>(board: &Board<T>, first: Position, second: Position, rules: MoveRules) -> bool {
    if !board.is_in_bounds(first) || !board.is_in_bounds(second) {
        return false;
    }
    if !first.is_aligned_with(second) {
        return false;
    }
    !rules.adjacent_only || first.is_adjacent_to(second)
}

/// Full legality check. The board is identical before and after the call.
pub fn is_move_legal<T: Clone + PartialEq>(
    board: &mut Board<T>,
    first: Position,
    second: Position,
    rules: MoveRules,
) -> bool {
    if !is_shape_legal(board, first, second, rules) {
        return false;
    }

    board.swap(first, second);
    let creates_match = !scan_rows(board).is_empty() || !scan_columns(board).is_empty();
    board.swap(first, second);

    creates_match
}

/// Every legal swap, each unordered pair once with the first position
/// preceding the second in row-major order.
pub fn legal_moves<T: Clone + PartialEq>(
    board: &mut Board<T>,
    rules: MoveRules,
) -> Vec<(Position, Position)> {
    candidate_pairs(board, rules)
        .into_iter()
        .filter(|&(a, b)| is_move_legal(board, a, b, rules))
        .collect()
}

/// True when at least one legal swap exists
pub fn has_legal_move<T: Clone + PartialEq>(board: &mut Board<T>, rules: MoveRules) -> bool {
    candidate_pairs(board, rules)
        .into_iter()
        .any(|(a, b)| is_move_legal(board, a, b, rules))
}

fn candidate_pairs<T>(board: &Board<T>, rules: MoveRules) -> Vec<(Position, Position)> {
    let width = board.width() as i32;
    let height = board.height() as i32;
    let mut pairs = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let a = Position::new(row, col);
            for other in col + 1..width {
                pairs.push((a, Position::new(row, other)));
            }
            for other in row + 1..height {
                pairs.push((a, Position::new(other, col)));
            }
        }
    }
    if rules.adjacent_only {
        pairs.retain(|&(a, b)| a.is_adjacent_to(b));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn row_board(values: &str) -> Board<char> {
        let values: Vec<char> = values.chars().collect();
        Board::from_values(values.len(), 1, values).unwrap()
    }

    const ANY: MoveRules = MoveRules {
        adjacent_only: false,
    };
    const ADJACENT: MoveRules = MoveRules {
        adjacent_only: true,
    };

    #[test]
    fn rejects_out_of_bounds_and_identical_positions() {
        let mut b = row_board("abaa");
        assert!(!is_move_legal(&mut b, p(0, 0), p(0, 4), ANY));
        assert!(!is_move_legal(&mut b, p(-1, 0), p(0, 1), ANY));
        assert!(!is_move_legal(&mut b, p(0, 1), p(0, 1), ANY));
    }

    #[test]
    fn rejects_diagonal_swaps() {
        let mut b = Board::from_values(2, 2, vec!['a', 'b', 'b', 'a']).unwrap();
        assert!(!is_shape_legal(&b, p(0, 0), p(1, 1), ANY));
        assert!(!is_move_legal(&mut b, p(0, 0), p(1, 1), ANY));
    }

    #[test]
    fn accepts_swap_that_creates_a_run() {
        let mut b = row_board("abaa");
        let before = b.clone();
        assert!(is_move_legal(&mut b, p(0, 0), p(0, 1), ANY));
        assert_eq!(b, before);
    }

    #[test]
    fn rejects_swap_without_a_run() {
        let mut b = row_board("aba");
        let before = b.clone();
        assert!(!is_move_legal(&mut b, p(0, 0), p(0, 1), ANY));
        assert_eq!(b, before);
    }

    #[test]
    fn distant_aligned_swap_depends_on_rules() {
        // Swapping the ends gives "aaabb".
        let mut b = row_board("baaba");
        assert!(is_move_legal(&mut b, p(0, 0), p(0, 4), ANY));
        assert!(!is_move_legal(&mut b, p(0, 0), p(0, 4), ADJACENT));
    }

    #[test]
    fn legal_moves_enumerates_pairs_in_row_major_order() {
        let mut b = row_board("abaa");
        let moves = legal_moves(&mut b, ANY);
        assert_eq!(moves, vec![(p(0, 0), p(0, 1)), (p(0, 1), p(0, 3))]);
        assert!(has_legal_move(&mut b, ANY));
    }

    #[test]
    fn no_moves_on_two_value_line() {
        let mut b = row_board("aba");
        assert!(legal_moves(&mut b, ANY).is_empty());
        assert!(!has_legal_move(&mut b, ANY));
    }

    #[test]
    fn adjacent_rules_prune_candidates() {
        let b = Board::from_values(3, 3, vec![0u8; 9]).unwrap();
        assert_eq!(candidate_pairs(&b, ANY).len(), 18);
        assert_eq!(candidate_pairs(&b, ADJACENT).len(), 12);
    }
}
