use card_shuffle::game::zones::Deck;
use card_shuffle::simulation::engine::{count_rounds_to_original_order, resume_in_hand, shuffle_one_round};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_standard_deck(c: &mut Criterion) {
    c.bench_function("rounds_52_cards", |b| {
        b.iter(|| count_rounds_to_original_order(black_box(52)))
    });
}

fn benchmark_single_round(c: &mut Criterion) {
    let mut hand = Deck::new_ordered(1000).expect("Failed to build deck");
    let mut table = Deck::with_capacity(1000).expect("Failed to reserve table");

    c.bench_function("one_round_1000_cards", |b| {
        b.iter(|| {
            shuffle_one_round(black_box(&mut hand), black_box(&mut table)).expect("round");
            resume_in_hand(&mut hand, &mut table);
        })
    });
}

fn benchmark_small_sweep(c: &mut Criterion) {
    c.bench_function("rounds_1_to_64", |b| {
        b.iter(|| {
            for size in 1..=64 {
                let _ = count_rounds_to_original_order(black_box(size));
            }
        })
    });
}

criterion_group!(benches, benchmark_standard_deck, benchmark_single_round, benchmark_small_sweep);
criterion_main!(benches);
