//! Benchmarks for state transitions and full setup playouts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use homeworlds::core::{Action, Color, GameRng, GameState, Player, Size};
use homeworlds::rules::{random_setup, replay_records, RulesEngine, SetupRules};

fn bench_apply(c: &mut Criterion) {
    let rules = SetupRules::default();
    let state = GameState::initial();
    let action = Action::TakeStar {
        color: Color::Blue,
        size: Size::Medium,
        player: Player::Player1,
    };

    c.bench_function("validate_take_star", |b| {
        b.iter(|| rules.validate(black_box(&state), black_box(&action)))
    });
    c.bench_function("apply_take_star", |b| {
        b.iter(|| rules.apply(black_box(&state), black_box(&action)).into_owned())
    });
}

fn bench_playout(c: &mut Criterion) {
    let rules = SetupRules::default();

    c.bench_function("random_setup", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| random_setup(&rules, &mut rng.fork()))
    });

    let log = random_setup(&rules, &mut GameRng::new(7)).log;
    c.bench_function("replay_setup_log", |b| {
        b.iter(|| replay_records(&rules, black_box(&log)))
    });
}

criterion_group!(benches, bench_apply, bench_playout);
criterion_main!(benches);
