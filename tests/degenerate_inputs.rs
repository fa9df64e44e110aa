//! Error-path tests: invalid parameters and degenerate weight vectors.

use chopthin_rs::{chopthin_with_rng, ChopthinConfig, ChopthinError, SimpleRng};

#[test]
fn test_zero_target_is_a_configuration_error() {
    let mut rng = SimpleRng::new(42);
    let err = chopthin_with_rng(&mut rng, &[1.0], &ChopthinConfig::with_default_eta(0)).unwrap_err();
    assert!(matches!(err, ChopthinError::Configuration { .. }));
}

#[test]
fn test_small_eta_is_a_configuration_error() {
    let mut rng = SimpleRng::new(42);
    let err = chopthin_with_rng(&mut rng, &[1.0], &ChopthinConfig::new(5, 3.9)).unwrap_err();
    assert!(matches!(
        err,
        ChopthinError::Configuration { description } if description.contains("eta")
    ));
}

#[test]
fn test_eta_at_the_boundary_is_accepted() {
    let mut rng = SimpleRng::new(42);
    let out = chopthin_with_rng(&mut rng, &[1.0, 2.0, 3.0], &ChopthinConfig::new(3, 4.0)).unwrap();
    assert_eq!(out.len(), 3);
}

#[test]
fn test_empty_weights_is_a_configuration_error() {
    let mut rng = SimpleRng::new(42);
    let err = chopthin_with_rng(&mut rng, &[], &ChopthinConfig::with_default_eta(3)).unwrap_err();
    assert!(matches!(err, ChopthinError::Configuration { .. }));
}

#[test]
fn test_no_positive_mass_is_fatal() {
    let mut rng = SimpleRng::new(42);
    let err =
        chopthin_with_rng(&mut rng, &[0.0, -1.0], &ChopthinConfig::with_default_eta(3)).unwrap_err();
    assert_eq!(err, ChopthinError::NoPositiveWeights);
}

#[test]
fn test_all_negative_weights_are_fatal_across_seeds() {
    for seed in 1..=20 {
        let mut rng = SimpleRng::new(seed);
        let err = chopthin_with_rng(
            &mut rng,
            &[-0.5, -2.0, -0.1],
            &ChopthinConfig::with_default_eta(2),
        )
        .unwrap_err();
        assert_eq!(err, ChopthinError::NoPositiveWeights, "seed {}", seed);
    }
}

#[test]
fn test_parameters_are_validated_before_weights() {
    // Bad eta and a degenerate vector together: the parameter error wins.
    let mut rng = SimpleRng::new(42);
    let err =
        chopthin_with_rng(&mut rng, &[0.0, -1.0], &ChopthinConfig::new(3, 1.0)).unwrap_err();
    assert!(matches!(err, ChopthinError::Configuration { .. }));
}

#[test]
fn test_single_zero_weight_is_fatal() {
    let mut rng = SimpleRng::new(42);
    let err = chopthin_with_rng(&mut rng, &[0.0], &ChopthinConfig::with_default_eta(1)).unwrap_err();
    assert_eq!(err, ChopthinError::NoPositiveWeights);
}
