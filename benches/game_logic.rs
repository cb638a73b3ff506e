use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match_three::core::{game, matching, moves, Board, ColorSource, MoveRules};
use match_three::types::{Color, Position};

fn settled_board(seed: u32) -> (Board<Color>, ColorSource) {
    let mut source = ColorSource::new(seed);
    let mut board = game::create(&mut source, 8, 8).unwrap();
    game::initial_scan(&mut source, &mut board).unwrap();
    (board, source)
}

fn bench_scan(c: &mut Criterion) {
    let (board, _) = settled_board(12345);

    c.bench_function("scan_rows_8x8", |b| {
        b.iter(|| matching::scan_rows(black_box(&board)))
    });
    c.bench_function("scan_columns_8x8", |b| {
        b.iter(|| matching::scan_columns(black_box(&board)))
    });
}

fn bench_can_move(c: &mut Criterion) {
    let (mut board, _) = settled_board(12345);

    c.bench_function("can_move", |b| {
        b.iter(|| game::can_move(&mut board, black_box(Position::new(3, 3)), Position::new(3, 4)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let (mut board, _) = settled_board(12345);
    let rules = MoveRules::default();

    c.bench_function("legal_moves_8x8", |b| {
        b.iter(|| moves::legal_moves(&mut board, black_box(rules)))
    });
}

fn bench_make_move(c: &mut Criterion) {
    let (mut board, source) = settled_board(12345);
    let hint = moves::legal_moves(&mut board, MoveRules::default()).first().copied();
    let Some((first, second)) = hint else {
        return;
    };

    c.bench_function("make_move_and_cascade", |b| {
        b.iter(|| {
            let mut board = board.clone();
            let mut source = source.clone();
            game::make_move(&mut source, &mut board, first, second).unwrap()
        })
    });
}

fn bench_initial_scan(c: &mut Criterion) {
    c.bench_function("create_and_settle_8x8", |b| {
        b.iter(|| settled_board(black_box(42)))
    });
}

criterion_group!(
    benches,
    bench_scan,
    bench_can_move,
    bench_legal_moves,
    bench_make_move,
    bench_initial_scan
);
criterion_main!(benches);
