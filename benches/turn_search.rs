use criterion::{criterion_group, criterion_main, Criterion};
use rust_baize::ai::{AiConfig, AiModel};
use rust_baize::games::baize::{BaizeGame, BaizeGameBuilder};
use std::hint::black_box;

/// Positions reached by seeded AI self-play, one per turn.
fn corpus() -> Vec<BaizeGame> {
    let mut positions = Vec::new();
    for seed in 0..8 {
        let mut game = BaizeGameBuilder::new().all_ai().build(seed);
        let mut ai = AiModel::new(AiConfig::default().with_seed(seed));
        for _ in 0..40 {
            positions.push(game.clone());
            game.play_ai_turn(&mut ai);
            if game.is_deal_over(true).is_some() {
                break;
            }
            game.end_of_turn();
            game.start_of_turn();
        }
    }
    positions
}

fn bench_turn_search(c: &mut Criterion) {
    let positions = corpus();

    c.bench_function("turn_search/find_one_turn_play", |b| {
        let mut ai = AiModel::new(AiConfig::default());
        b.iter(|| {
            let mut found = 0u32;
            for game in &positions {
                if ai
                    .find_one_turn_play(game.active_hand(), game.groups(), game.deck())
                    .is_some()
                {
                    found += 1;
                }
            }
            black_box(found)
        })
    });

    c.bench_function("turn_search/simple_only", |b| {
        let mut ai = AiModel::new(AiConfig::default().with_rearrangement(false));
        b.iter(|| {
            let mut found = 0u32;
            for game in &positions {
                if ai
                    .find_one_turn_play(game.active_hand(), game.groups(), game.deck())
                    .is_some()
                {
                    found += 1;
                }
            }
            black_box(found)
        })
    });

    c.bench_function("turn_search/full_deal", |b| {
        b.iter(|| {
            let mut game = BaizeGameBuilder::new().all_ai().build(black_box(7));
            let mut ai = AiModel::new(AiConfig::default());
            black_box(game.run_deal(&mut ai, 500))
        })
    });
}

criterion_group!(benches, bench_turn_search);
criterion_main!(benches);
