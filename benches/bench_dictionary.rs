use criterion::{criterion_group, criterion_main, Criterion};
use wordgrid_engine::Dictionary;

const WORDS: &[&str] = &[
    "cat", "cats", "dog", "dogs", "act", "acts", "tac", "scat", "cast", "cots", "cost", "coats",
    "cot", "cots", "cast", "case", "cash", "cast", "cart", "cars", "card", "cane", "came", "cake",
];

fn bench_from_words() {
    let _dict = Dictionary::from_words(WORDS);
}

fn bench_is_word(c: &mut Criterion) {
    let dict = Dictionary::from_words(WORDS);
    c.bench_function("dictionary.is_word.hit", |b| b.iter(|| dict.is_word("scat")));
    c.bench_function("dictionary.is_word.miss", |b| b.iter(|| dict.is_word("xyzzy")));
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("dictionary.from_words", |b| b.iter(bench_from_words));
    bench_is_word(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
