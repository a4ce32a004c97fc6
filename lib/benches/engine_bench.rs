use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use wordle_game::*;

const WORDS: [&str; 24] = [
    "crane", "slate", "arise", "irate", "raise", "adieu", "aisle", "allow", "hello", "array",
    "radar", "sassy", "mesas", "eerie", "error", "train", "brace", "grace", "trace", "crone",
    "pilot", "world", "fizzy", "otter",
];

fn words() -> Vec<Word> {
    WORDS.iter().map(|word| Word::new(word).unwrap()).collect()
}

fn bench_get_result_for_guess(c: &mut Criterion) {
    let objective = Word::new("array").unwrap();
    let correct = Word::new("array").unwrap();
    let partial = Word::new("radar").unwrap();

    c.bench_function("get_result_for_guess correct", |b| {
        b.iter(|| get_result_for_guess(black_box(&objective), black_box(&correct)))
    });
    c.bench_function("get_result_for_guess partial", |b| {
        b.iter(|| get_result_for_guess(black_box(&objective), black_box(&partial)))
    });
}

fn bench_knowledge(c: &mut Criterion) {
    let objective = Word::new("crane").unwrap();
    let result = get_result_for_guess(&objective, &Word::new("arise").unwrap());
    let mut knowledge = Knowledge::from_result(&result);
    knowledge.update(&get_result_for_guess(&objective, &Word::new("trace").unwrap()));

    c.bench_function("knowledge update", |b| {
        b.iter(|| Knowledge::from_result(black_box(&result)))
    });
    c.bench_function("knowledge is_satisfied_by", |b| {
        b.iter(|| {
            words()
                .iter()
                .filter(|word| knowledge.is_satisfied_by(word))
                .count()
        })
    });
}

fn bench_candidate_words(c: &mut Criterion) {
    let all_words = words();
    let objective = Word::new("crane").unwrap();
    let knowledge = Knowledge::from_result(&get_result_for_guess(
        &objective,
        &Word::new("arise").unwrap(),
    ));
    let tried: HashSet<Word> = HashSet::from([Word::new("arise").unwrap()]);

    c.bench_function("candidate_words", |b| {
        b.iter(|| candidate_words(black_box(&knowledge), &tried, &all_words))
    });
}

criterion_group!(
    benches,
    bench_get_result_for_guess,
    bench_knowledge,
    bench_candidate_words
);
criterion_main!(benches);
