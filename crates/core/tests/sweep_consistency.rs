//! Sweep and chart-data consistency
//!
//! Parallel sweeps must agree exactly with direct model calls.

use aeroponic_core::{
    compute, compute_default, sweep::DEFAULT_SWEEP_POINTS, sweep_droplet_size,
    sweep_nutrient_concentration, AbsorptionFigure, AeroponicConfig, MetersPerSecond, Micrometers,
    PartsPerMillion,
};

#[test]
fn test_droplet_sweep_matches_direct_calls() {
    let config = AeroponicConfig::default();
    let ppm = PartsPerMillion::new(800.0);
    let sweep = sweep_droplet_size(ppm, &config, DEFAULT_SWEEP_POINTS).unwrap();

    assert_eq!(sweep.len(), DEFAULT_SWEEP_POINTS);
    for point in &sweep {
        let direct = compute(Micrometers::new(point.input), ppm, &config).unwrap();
        assert_eq!(point.result, direct);
    }
}

#[test]
fn test_concentration_sweep_matches_direct_calls() {
    let config = AeroponicConfig::default();
    let size = Micrometers::new(42.0);
    let sweep = sweep_nutrient_concentration(size, &config, 25).unwrap();

    assert_eq!(sweep.first().unwrap().input, 100.0);
    assert_eq!(sweep.last().unwrap().input, 2000.0);
    for point in &sweep {
        let direct = compute(size, PartsPerMillion::new(point.input), &config).unwrap();
        assert_eq!(point.result, direct);
    }
}

/// Rate falls by exactly 10% relative once concentration crosses 1000 ppm
#[test]
fn test_rate_curve_saturation_step() {
    let config = AeroponicConfig::default();
    let size = Micrometers::new(35.0);
    let below = compute(size, PartsPerMillion::new(1000.0), &config).unwrap();
    let above = compute(size, PartsPerMillion::new(1000.5), &config).unwrap();
    let ratio = above.absorption_rate / below.absorption_rate;
    assert!((ratio - 0.9).abs() < 1e-12);
}

#[test]
fn test_figure_highlights_query() {
    let config = AeroponicConfig::default();
    let size = Micrometers::new(28.0);
    let ppm = PartsPerMillion::new(1500.0);
    let result = compute(size, ppm, &config).unwrap();
    let figure = AbsorptionFigure::build(size, ppm, &result).unwrap();

    assert_eq!(figure.efficiency_curve.highlight, (28.0, result.efficiency));
    assert_eq!(figure.rate_curve.highlight, (1500.0, result.absorption_rate));
    assert_eq!(figure.components[1].value, result.parameters.impaction_efficiency);
}

/// Chart curves describe the default chamber whatever conditions the query used
#[test]
fn test_figure_curves_use_default_chamber() {
    let config = AeroponicConfig::default().with_airflow_velocity(MetersPerSecond::new(0.3));
    let size = Micrometers::new(35.0);
    let ppm = PartsPerMillion::new(500.0);
    let result = compute(size, ppm, &config).unwrap();
    let figure = AbsorptionFigure::build(size, ppm, &result).unwrap();

    let first = figure.efficiency_curve.points[0];
    assert_eq!(first.0, 20.0);
    assert_eq!(
        first.1,
        compute_default(Micrometers::new(20.0), ppm).unwrap().efficiency
    );

    let defaults = AeroponicConfig::default();
    let size_sweep = sweep_droplet_size(ppm, &defaults, DEFAULT_SWEEP_POINTS).unwrap();
    let expected: Vec<(f64, f64)> = size_sweep
        .iter()
        .map(|p| (p.input, p.result.efficiency))
        .collect();
    assert_eq!(figure.efficiency_curve.points, expected);

    let concentration_sweep =
        sweep_nutrient_concentration(size, &defaults, DEFAULT_SWEEP_POINTS).unwrap();
    let expected: Vec<(f64, f64)> = concentration_sweep
        .iter()
        .map(|p| (p.input, p.result.absorption_rate))
        .collect();
    assert_eq!(figure.rate_curve.points, expected);

    // The highlight still reports the queried chamber
    assert_eq!(figure.efficiency_curve.highlight, (35.0, result.efficiency));
}
