//! Rule Engine Benchmarks
//!
//! Performance benchmarks for the hot engine paths using Criterion.

use custodial_engine::{
    find_captures, init_board, is_legal_move, legal_destinations, new_game, piece_counts, Board,
    Color, Position,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y).unwrap()
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_is_legal_move_long_slide(c: &mut Criterion) {
    let board = init_board();

    c.bench_function("is_legal_move_long_slide", |b| {
        b.iter(|| black_box(is_legal_move(&board, pos(0, 0), pos(0, 6), Color::Black)))
    });
}

fn bench_legal_destinations_all_pieces(c: &mut Criterion) {
    let board = init_board();

    c.bench_function("legal_destinations_all_black_pieces", |b| {
        b.iter(|| {
            let total: usize = (0..8)
                .map(|x| legal_destinations(&board, pos(x, 0), Color::Black).len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_find_captures_crowded(c: &mut Criterion) {
    let board = Board::with_pieces(&[
        (pos(4, 4), Color::White),
        (pos(4, 5), Color::Black),
        (pos(4, 6), Color::White),
        (pos(5, 4), Color::Black),
        (pos(6, 4), Color::White),
        (pos(3, 4), Color::Black),
        (pos(2, 4), Color::White),
    ]);

    c.bench_function("find_captures_three_way", |b| {
        b.iter(|| black_box(find_captures(&board, pos(4, 4), Color::White)))
    });
}

fn bench_piece_counts(c: &mut Criterion) {
    let board = init_board();

    c.bench_function("piece_counts", |b| b.iter(|| black_box(piece_counts(&board))));
}

fn bench_select_and_move(c: &mut Criterion) {
    c.bench_function("select_or_move_round_trip", |b| {
        b.iter(|| {
            let mut game = new_game();
            game.select_or_move(pos(3, 0));
            black_box(game.select_or_move(pos(3, 5)))
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_is_legal_move_long_slide,
    bench_legal_destinations_all_pieces,
    bench_find_captures_crowded,
    bench_piece_counts,
    bench_select_and_move
);
criterion_main!(benches);
