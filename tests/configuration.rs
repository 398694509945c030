use std::collections::HashMap;

use approx::{
    assert_abs_diff_eq,
    assert_relative_eq
};

use numint::configuration::Configuration;
use numint::manager::manager::IManager;

fn demo_results() -> HashMap<String, f64> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config.json");
    let config = Configuration::new();
    config.from_reader(path).unwrap();
    config
        .run_jobs()
        .into_iter()
        .map(|outcome| {
            let value = outcome.result().clone().unwrap();
            (outcome.name().to_owned(), value)
        })
        .collect()
}

#[test]
fn demo_configuration_registers_everything() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/config.json");
    let config = Configuration::new();
    config.from_reader(path).unwrap();
    assert_eq!(
        config.integrand_manager().names(),
        vec!["length_measurement", "quadratic", "sin", "std_normal"]
    );
    assert_eq!(config.jobs().len(), 7);
}

#[test]
fn demo_newton_cotes_jobs() {
    let results = demo_results();
    assert_relative_eq!(results["linear_trap"], 2.0, epsilon = 1e-12);
    assert_relative_eq!(results["square_simp"], 1.0 / 3.0, epsilon = 1e-12);
    assert_eq!(results["square_simp_unsorted"], results["square_simp"]);
}

#[test]
fn demo_gauss_legendre_jobs() {
    let results = demo_results();
    assert_abs_diff_eq!(results["sin_half_period"], 2.0, epsilon = 1e-5);
    assert_relative_eq!(results["quadratic_two_points"], 26.0 / 3.0, epsilon = 1e-12);
    // Magnitude 4 with mean 1.5 and std 0.5 is z = 5; the upper tail there is
    // 2.8665e-7 and five nodes on [5, 10] give 2.6802e-7.
    assert_abs_diff_eq!(results["magnitude_above_4"], 2.866515718791939e-7, epsilon = 3e-8);
    assert_relative_eq!(results["magnitude_above_4"], 2.6802098058272266e-7, max_relative = 1e-9);
    assert_abs_diff_eq!(results["length_in_band"], 0.6449902230161553, epsilon = 1e-6);
}

#[test]
fn missing_configuration_file() {
    let config = Configuration::new();
    assert!(config.from_reader("/nonexistent/config.json").is_err());
}
