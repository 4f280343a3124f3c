use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::NaiveDate;
use playoff_core::error::Stage;
use playoff_core::game::play_game;
use playoff_core::rng::FixedSource;
use playoff_core::series::simulate_series;
use playoff_core::{compute_ratings, PlayoffField, RunLabel, TeamStatLine, WeightingConfig};

fn create_league(per_conference: u32) -> Vec<TeamStatLine> {
    let mut stats = Vec::new();
    for (conference, prefix) in [("Eastern", "E"), ("Western", "W")] {
        for i in 0..per_conference {
            stats.push(TeamStatLine::new(
                format!("{prefix}{:02}", i + 1),
                conference,
                118.0 - i as f64 * 0.7,
                108.0 + i as f64 * 0.4,
                0.38 - i as f64 * 0.003,
                58 - i * 2,
                24 + i * 2,
            ));
        }
    }
    stats
}

fn create_field() -> PlayoffField {
    let weighting = WeightingConfig::default();
    let teams = compute_ratings(&create_league(12), &weighting).unwrap();
    PlayoffField::new(teams, weighting, true, true)
}

fn run_label() -> RunLabel {
    RunLabel::new("2025-26", NaiveDate::from_ymd_opt(2026, 4, 18).unwrap())
}

fn bench_compute_ratings(c: &mut Criterion) {
    let stats = create_league(15);
    let weighting = WeightingConfig::default();

    c.bench_function("compute_ratings_30_teams", |b| {
        b.iter(|| compute_ratings(black_box(&stats), black_box(&weighting)).unwrap())
    });
}

fn bench_single_game(c: &mut Criterion) {
    let weighting = WeightingConfig::default();
    let teams = compute_ratings(&create_league(1), &weighting).unwrap();

    c.bench_function("play_game", |b| {
        b.iter(|| {
            play_game(
                black_box(&teams[0]),
                black_box(&teams[1]),
                true,
                true,
                Stage::Exhibition,
                &mut FixedSource(0.42),
            )
            .unwrap()
        })
    });
}

fn bench_single_series(c: &mut Criterion) {
    let weighting = WeightingConfig::default();
    let teams = compute_ratings(&create_league(1), &weighting).unwrap();

    c.bench_function("simulate_series", |b| {
        b.iter(|| {
            simulate_series(
                black_box(&teams[0]),
                black_box(&teams[1]),
                true,
                true,
                Stage::Exhibition,
                &mut FixedSource(0.42),
            )
            .unwrap()
        })
    });
}

fn bench_full_playoffs(c: &mut Criterion) {
    let field = create_field();
    let label = run_label();

    c.bench_function("playoff_single_run", |b| {
        b.iter(|| black_box(&field).simulate(&label, Some(42)).unwrap())
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let field = create_field();
    let label = run_label();

    c.bench_function("playoff_1000_trials_batch", |b| {
        b.iter(|| black_box(&field).run_simulations(&label, 1000, Some(42)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_compute_ratings,
    bench_single_game,
    bench_single_series,
    bench_full_playoffs,
    bench_monte_carlo,
);
criterion_main!(benches);
