use criterion::{criterion_group, criterion_main, Criterion};
use wordgrid_engine::{best_move, rack_from_str, Board, Dictionary};

const WORDS: &[&str] = &[
    "cat", "cats", "dog", "dogs", "act", "acts", "scat", "cast", "cot", "cots", "cost", "case",
    "cash", "cart", "cars", "card", "cane", "came", "cake", "cake", "cove", "core", "bore",
];

fn bench_empty_board(c: &mut Criterion) {
    let board = Board::empty();
    let dict = Dictionary::from_words(WORDS);
    let rack = rack_from_str("CATDOGS").unwrap();
    c.bench_function("engine.best_move.empty_board", |b| {
        b.iter(|| best_move(&board, &dict, &rack))
    });
}

fn bench_midgame_board(c: &mut Criterion) {
    let mut rows = vec![" ".repeat(15); 15];
    rows[7].replace_range(6..9, "CAT");
    rows[6].replace_range(8..9, "O");
    rows[8].replace_range(8..9, "G");
    let board = Board::with_state_from_strings(&rows).unwrap();
    let dict = Dictionary::from_words(WORDS);
    let rack = rack_from_str("SCORE").unwrap();
    c.bench_function("engine.best_move.midgame_board", |b| {
        b.iter(|| best_move(&board, &dict, &rack))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_empty_board(c);
    bench_midgame_board(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
