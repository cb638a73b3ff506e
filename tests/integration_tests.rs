//! Integration tests for the public game operations

use match_three::core::{
    game, matching, Board, ColorSource, CyclingSource, Effect, EngineConfig, EngineError, Game,
};
use match_three::types::Position;

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Build a board from whitespace-separated rows of single-char values.
fn board(rows: &str) -> Board<char> {
    let lines: Vec<&str> = rows.split_whitespace().collect();
    let width = lines[0].len();
    let values: Vec<char> = lines.iter().flat_map(|l| l.chars()).collect();
    Board::from_values(width, lines.len(), values).unwrap()
}

fn all_pairs(board: &Board<char>) -> Vec<(Position, Position)> {
    let cells: Vec<Position> = board.tiles().iter().map(|t| t.position).collect();
    let mut pairs = Vec::new();
    for &a in &cells {
        for &b in &cells {
            pairs.push((a, b));
        }
    }
    pairs
}

#[test]
fn test_swap_leaving_run_of_two_is_illegal() {
    // [a, b, a] -> [b, a, a]: run of two only
    let mut b = board("aba");
    let mut source = || 'c';

    assert!(!game::can_move(&mut b, p(0, 0), p(0, 1)));
    let result = game::make_move(&mut source, &mut b, p(0, 0), p(0, 1)).unwrap();
    assert!(result.effects.is_empty());
    assert_eq!(b, board("aba"));
}

#[test]
fn test_swap_breaking_pair_is_illegal() {
    // [a, a, b] -> [a, b, a] during validation, then reverted
    let mut b = board("aab");
    assert!(!game::can_move(&mut b, p(0, 1), p(0, 2)));
    assert_eq!(b, board("aab"));
}

#[test]
fn test_two_value_line_has_no_legal_swap() {
    let mut b = board("aba");
    for (first, second) in all_pairs(&b) {
        assert!(
            !game::can_move(&mut b, first, second),
            "{} <-> {} should be illegal",
            first,
            second
        );
    }
    assert_eq!(b, board("aba"));
}

#[test]
fn test_cross_match_emits_row_then_column_then_refill() {
    let mut b = board(
        "bac
         ada
         cab
         bac",
    );
    // Moving the `a` from (3,1) into (1,1) completes row 1 and column 1.
    assert!(game::can_move(&mut b, p(1, 1), p(3, 1)));
    assert!(game::can_move(&mut b, p(3, 1), p(1, 1)));

    let mut source = CyclingSource::new(vec!['x', 'y', 'z', 'w']).unwrap();
    let result = game::make_move(&mut source, &mut b, p(1, 1), p(3, 1)).unwrap();

    assert_eq!(result.effects.len(), 3);
    let row = result.effects[0].as_match().unwrap();
    assert_eq!(row.matched, 'a');
    assert_eq!(row.positions, vec![p(1, 0), p(1, 1), p(1, 2)]);
    let column = result.effects[1].as_match().unwrap();
    assert_eq!(column.matched, 'a');
    assert_eq!(column.positions, vec![p(0, 1), p(1, 1), p(2, 1)]);

    let expected = board(
        "xwx
         bzc
         cyb
         bdc",
    );
    assert_eq!(result.effects[2].as_refill(), Some(&expected));
    assert_eq!(result.board, expected);
    assert_eq!(b, expected);
    // Five distinct cells were cleared even though (1,1) appears in both matches.
    assert_eq!(source.drawn(), 5);
}

#[test]
fn test_initial_scan_resolves_existing_matches() {
    let mut b = board(
        "aaa
         bcb
         cbc",
    );
    let mut source = CyclingSource::new(vec!['x', 'y', 'z']).unwrap();
    let result = game::initial_scan(&mut source, &mut b).unwrap();

    assert_eq!(result.effects.len(), 2);
    assert_eq!(
        result.effects[0].as_match().unwrap().positions,
        vec![p(0, 0), p(0, 1), p(0, 2)]
    );
    assert!(matches!(result.effects[1], Effect::Refill { .. }));
    assert_eq!(
        b,
        board(
            "xyz
             bcb
             cbc"
        )
    );
}

#[test]
fn test_initial_scan_on_stable_board_is_idempotent() {
    let mut b = board(
        "abc
         bca
         cab",
    );
    let before = b.clone();
    let mut source = || 'z';

    let result = game::initial_scan(&mut source, &mut b).unwrap();
    assert!(result.effects.is_empty());
    assert_eq!(b, before);
    assert_eq!(result.board, before);
}

#[test]
fn test_refill_effects_keep_their_own_snapshot() {
    let mut b = board("b a a a");
    assert_eq!(b.width(), 1);
    let mut source = CyclingSource::new(vec!['c', 'c', 'c', 'd', 'e', 'd']).unwrap();

    let result = game::initial_scan(&mut source, &mut b).unwrap();
    let refills: Vec<&Board<char>> = result.refills().collect();
    assert_eq!(refills.len(), 2);
    assert_eq!(*refills[0], board("c c c b"));
    assert_eq!(*refills[1], board("d e d b"));

    // Later moves do not rewrite earlier log entries.
    assert!(b.swap(p(0, 0), p(3, 0)));
    assert_eq!(*refills[0], board("c c c b"));
}

#[test]
fn test_runaway_cascade_is_fatal() {
    let b = board("aaa");
    let config = EngineConfig::default().with_max_cascade_passes(3);
    let mut game = Game::from_board(b, || 'a', config);

    assert_eq!(
        game.initial_scan().unwrap_err(),
        EngineError::CascadeLimitExceeded { limit: 3 }
    );
    assert!(game.board().is_full());
}

#[test]
fn test_color_game_settles_to_stable_board() {
    let config = EngineConfig::default();
    let mut game = Game::new(ColorSource::new(12345), 8, 8, config).unwrap();
    game.initial_scan().unwrap();

    assert!(game.board().is_full());
    assert!(matching::is_stable(game.board()));

    // Play a few hinted moves; each must leave a full, stable board.
    for _ in 0..5 {
        let Some(&(a, b)) = game.legal_moves().first() else {
            break;
        };
        let result = game.apply_move(a, b).unwrap();
        assert!(result.is_legal());
        assert!(matches!(result.effects.first(), Some(Effect::Match { .. })));
        assert!(matches!(result.effects.last(), Some(Effect::Refill { .. })));
        assert!(game.board().is_full());
        assert!(matching::is_stable(game.board()));
    }
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut game = Game::new(ColorSource::new(seed), 6, 6, EngineConfig::default()).unwrap();
        let first = game.initial_scan().unwrap();
        let moves = game.legal_moves();
        (first, moves, game.board().clone())
    };
    assert_eq!(run(99), run(99));
}
