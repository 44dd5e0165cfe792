//! # OURPS Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | cast_vote | O(1) |
//! | end_round | O(1), independent of votes cast |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;

use ourps_core::{
    dominant_move, GameConfig, InMemoryTreasury, ManualTimeSource, Move, RecordingPublisher,
    RpsGameApi, RpsGameService, Team,
};

type Game = RpsGameService<Arc<ManualTimeSource>, InMemoryTreasury, RecordingPublisher>;

fn new_game(clock: &Arc<ManualTimeSource>) -> Game {
    RpsGameService::new(
        GameConfig::default(),
        Arc::clone(clock),
        InMemoryTreasury::new(),
        RecordingPublisher::new(),
    )
    .expect("valid config")
}

fn bench_cast_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast_vote");
    group.throughput(Throughput::Elements(1));

    let clock = Arc::new(ManualTimeSource::new(0));
    let mut game = new_game(&clock);
    let mut rng = rand::thread_rng();

    group.bench_function("random_vote", |b| {
        b.iter(|| {
            let team = Team::ALL[rng.gen_range(0..2)];
            let mv = Move::PLAYABLE[rng.gen_range(0..3)];
            black_box(game.cast_vote(&[1; 20], team, mv, 1))
        })
    });

    group.finish();
}

fn bench_end_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_round");

    for votes in [0u64, 100, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(votes), &votes, |b, &votes| {
            let clock = Arc::new(ManualTimeSource::new(0));
            let mut game = new_game(&clock);
            b.iter(|| {
                for i in 0..votes {
                    let _ = game.cast_vote(&[2; 20], Team::Red, Move::PLAYABLE[(i % 3) as usize], 1);
                }
                clock.advance(60);
                black_box(game.end_round())
            })
        });
    }

    group.finish();
}

fn bench_dominant_move(c: &mut Criterion) {
    c.bench_function("dominant_move", |b| {
        b.iter(|| dominant_move(black_box([7, 7, 3])))
    });
}

criterion_group!(benches, bench_cast_vote, bench_end_round, bench_dominant_move);
criterion_main!(benches);
