use criterion::{black_box, criterion_group, criterion_main, Criterion};
use surge_mulligan::odds::{Evaluator, Side, TopCard};

fn benchmark_surge_odds(c: &mut Criterion) {
    c.bench_function("surge_odds_cold_53_21", |b| {
        b.iter(|| Evaluator::new().surge_odds(black_box(53), black_box(21), 2, 2, TopCard::Unknown))
    });
}

fn benchmark_level_3(c: &mut Criterion) {
    c.bench_function("level_3_win_play_cold", |b| {
        b.iter(|| Evaluator::new().level_3_win_play(black_box(23)))
    });

    c.bench_function("level_3_win_draw_cold", |b| {
        b.iter(|| Evaluator::new().level_3_win_draw(black_box(23)))
    });
}

fn benchmark_mull_guide(c: &mut Criterion) {
    let mut warm = Evaluator::new();
    warm.mull_guide(23, Side::Play);

    c.bench_function("mull_guide_warm", |b| {
        b.iter(|| warm.mull_guide(black_box(23), Side::Play))
    });
}

criterion_group!(benches, benchmark_surge_odds, benchmark_level_3, benchmark_mull_guide);
criterion_main!(benches);
