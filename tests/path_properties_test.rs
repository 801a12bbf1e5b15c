use approx::assert_relative_eq;
use proptest::prelude::*;
use wiener_walk::error::WalkError;
use wiener_walk::models::random_walk::{generate_path, RandomWalk};
use wiener_walk::rng::{seed_rng_from_u64, ReplaySource};

#[test]
fn test_recorded_draws_example() {
    let mut source = ReplaySource::new(vec![0.05, -0.02, 0.03]);
    let path = generate_path(0.1, 0.0, 3, &mut source).expect("Valid parameters");

    println!("\nTimes: {:?}", path.times());
    println!("Values: {:?}", path.values());

    assert_eq!(path.times(), &[0, 1, 2, 3]);
    let expected = [0.0, 0.05, 0.03, 0.06];
    for (got, want) in path.values().iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_steps_boundary() {
    let mut rng = seed_rng_from_u64(0);
    let path = generate_path(0.1, 7.25, 0, &mut rng).expect("Valid parameters");

    assert_eq!(path.len(), 1);
    assert_eq!(path.values(), &[7.25]);
    assert_eq!(path.times(), &[0]);
}

#[test]
fn test_invalid_parameters_perform_no_draws() {
    let mut source = ReplaySource::new(vec![0.1, 0.2, 0.3]);

    let cases: [(f64, f64, i64, &str); 4] = [
        (0.1, 0.0, -3, "steps"),
        (0.0, 0.0, 3, "dt"),
        (-1.0, 0.0, 3, "dt"),
        (0.1, f64::NAN, 3, "x0"),
    ];

    for (dt, x0, steps, field) in cases {
        match generate_path(dt, x0, steps, &mut source) {
            Err(WalkError::InvalidParameters { parameter, .. }) => assert_eq!(parameter, field),
            other => panic!("expected InvalidParameters for {}, got {:?}", field, other),
        }
    }
    assert_eq!(source.remaining(), 3);
}

#[test]
fn test_increment_statistics_over_many_trials() {
    let dt = 0.25;
    let walk = RandomWalk::standard(dt).unwrap();
    let trials = 200;
    let steps = 500;

    let mut increments = Vec::with_capacity(trials * steps);
    for trial in 0..trials {
        let path = walk
            .generate(steps, &mut seed_rng_from_u64(1_000 + trial as u64))
            .expect("Valid parameters");
        increments.extend(path.increments());
    }

    let n = increments.len() as f64;
    let mean = increments.iter().sum::<f64>() / n;
    let variance = increments.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

    println!("\nIncrement mean: {}", mean);
    println!("Increment variance: {} (dt² = {})", variance, dt * dt);

    assert!(mean.abs() < 0.005, "Increment mean too far from 0: {}", mean);
    assert!(
        (variance - dt * dt).abs() / (dt * dt) < 0.02,
        "Increment variance {} too far from dt² = {}",
        variance,
        dt * dt
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_grid_and_initial_value(
        dt in 1e-3..10.0f64,
        x0 in -1e3..1e3f64,
        steps in 0i64..300,
        seed in any::<u64>(),
    ) {
        let path = generate_path(dt, x0, steps, &mut seed_rng_from_u64(seed)).unwrap();

        prop_assert_eq!(path.len(), steps as usize + 1);
        prop_assert!(path.times().iter().enumerate().all(|(i, &t)| t == i));
        prop_assert_eq!(path.values()[0], x0);
        prop_assert!(path.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn prop_same_seed_same_path(
        dt in 1e-3..10.0f64,
        x0 in -1e3..1e3f64,
        steps in 0i64..300,
        seed in any::<u64>(),
    ) {
        let first = generate_path(dt, x0, steps, &mut seed_rng_from_u64(seed)).unwrap();
        let second = generate_path(dt, x0, steps, &mut seed_rng_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_values_are_prefix_sums(
        draws in prop::collection::vec(-5.0..5.0f64, 0..100),
        x0 in -100.0..100.0f64,
    ) {
        let steps = draws.len() as i64;
        let path = generate_path(1.0, x0, steps, &mut ReplaySource::new(draws.clone())).unwrap();

        let mut expected = x0;
        for (i, dw) in draws.iter().enumerate() {
            expected += dw;
            prop_assert!((path.values()[i + 1] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_negative_steps_rejected(steps in i64::MIN..0i64) {
        let result = generate_path(0.1, 0.0, steps, &mut seed_rng_from_u64(1));
        let is_invalid_parameter = matches!(result, Err(WalkError::InvalidParameters { .. }));
        prop_assert!(is_invalid_parameter);
    }
}
