//! Engine micro-benchmarks.
//!
//! Focus:
//! - `reduce` on a populated state (persistent clone plus one action)
//! - Hard-drop throughput over a full skill cycle
//! - Resize with a changed budget (clear and respawn)

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use skill_blocks::core::{Action, BoardConfig, Direction, EngineState};
use skill_blocks::rules::{apply, reduce};
use skill_blocks::skills::portfolio_skills;

fn populated_state(seed: u64) -> EngineState {
    let mut state = EngineState::new(portfolio_skills(), BoardConfig::default(), seed);
    apply(&mut state, &Action::Start);
    for i in 0..24 {
        let direction = if i % 2 == 0 { Direction::Left } else { Direction::Right };
        for _ in 0..(i % 9) {
            apply(&mut state, &Action::Move(direction));
        }
        apply(&mut state, &Action::HardDrop);
    }
    state
}

fn bench_reduce(c: &mut Criterion) {
    let state = populated_state(7);

    c.bench_function("rules.reduce.move_left", |b| {
        b.iter(|| black_box(reduce(&state, &Action::Move(Direction::Left))));
    });

    c.bench_function("rules.reduce.hard_drop", |b| {
        b.iter(|| black_box(reduce(&state, &Action::HardDrop)));
    });
}

fn bench_skill_cycle(c: &mut Criterion) {
    c.bench_function("rules.apply.hard_drop_cycle", |b| {
        b.iter_batched(
            || {
                let mut state = EngineState::new(portfolio_skills(), BoardConfig::default(), 11);
                apply(&mut state, &Action::Resize { width_px: 3000.0, height_px: 3200.0 });
                apply(&mut state, &Action::Start);
                state
            },
            |mut state| {
                for i in 0..26 {
                    let direction = if i % 2 == 0 { Direction::Left } else { Direction::Right };
                    for _ in 0..(i % 40) {
                        apply(&mut state, &Action::Move(direction));
                    }
                    black_box(apply(&mut state, &Action::HardDrop));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("rules.apply.resize_changed", |b| {
        b.iter_batched(
            || populated_state(3),
            |mut state| black_box(apply(&mut state, &Action::Resize { width_px: 1800.0, height_px: 1400.0 })),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_reduce, bench_skill_cycle, bench_resize);
criterion_main!(benches);
