use criterion::{criterion_group, criterion_main, Criterion};
use raceline::{RewardEvaluator, StepState};

fn circular_track(points: usize) -> Vec<[f64; 2]> {
    (0..points)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / points as f64;
            [50.0 * theta.cos(), 50.0 * theta.sin()]
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = RewardEvaluator::new();
    let state = StepState {
        waypoints: circular_track(120),
        closest_waypoints: [40, 41],
        heading: 210.0,
        distance_from_center: 0.2,
        track_width: 1.2,
        speed: 3.0,
        steering_angle: -5.0,
    };

    c.bench_function("evaluate_step", |b| {
        b.iter(|| evaluator.evaluate(&state).unwrap());
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
