//! Parameter sweeps over the absorption model
//!
//! A sweep is nothing more than independent calls to [`compute`] across an
//! evenly spaced range. Points are evaluated in parallel; output order always
//! follows input order.

use crate::core_types::config::AeroponicConfig;
use crate::core_types::units::{Micrometers, PartsPerMillion};
use crate::model::{compute, AbsorptionError, AbsorptionResult, MAX_DROPLET_SIZE, MIN_DROPLET_SIZE};
use rayon::prelude::*;
use tracing::debug;

/// Number of points used by chart sweeps
pub const DEFAULT_SWEEP_POINTS: usize = 100;

/// Lower end of the concentration sweep (ppm)
pub const MIN_SWEEP_CONCENTRATION: f64 = 100.0;

/// Upper end of the concentration sweep (ppm)
pub const MAX_SWEEP_CONCENTRATION: f64 = 2000.0;

/// One evaluated point of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Swept input value (μm or ppm depending on the sweep)
    pub input: f64,
    /// Model output at that input
    pub result: AbsorptionResult,
}

/// Evenly spaced values from `start` to `stop`, both included
///
/// A single point yields `[start]`; zero points yield an empty vector.
pub fn linspace(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Efficiency and rate across the full droplet size range (20-50 μm)
///
/// # Errors
/// Propagates the first [`AbsorptionError`] from [`compute`]. Every swept
/// size lies inside the accepted range, so this only fails if the range
/// constants change.
pub fn sweep_droplet_size(
    nutrient_concentration: PartsPerMillion,
    config: &AeroponicConfig,
    points: usize,
) -> Result<Vec<SweepPoint>, AbsorptionError> {
    debug!(points, "Sweeping droplet size");
    linspace(MIN_DROPLET_SIZE, MAX_DROPLET_SIZE, points)
        .into_par_iter()
        .map(|size| {
            compute(Micrometers::new(size), nutrient_concentration, config)
                .map(|result| SweepPoint { input: size, result })
        })
        .collect()
}

/// Efficiency and rate across nutrient concentrations (100-2000 ppm)
///
/// # Errors
/// Returns [`AbsorptionError::InvalidDropletSize`] if `droplet_size` is out
/// of range.
pub fn sweep_nutrient_concentration(
    droplet_size: Micrometers,
    config: &AeroponicConfig,
    points: usize,
) -> Result<Vec<SweepPoint>, AbsorptionError> {
    debug!(points, "Sweeping nutrient concentration");
    linspace(MIN_SWEEP_CONCENTRATION, MAX_SWEEP_CONCENTRATION, points)
        .into_par_iter()
        .map(|concentration| {
            compute(droplet_size, PartsPerMillion::new(concentration), config).map(|result| {
                SweepPoint {
                    input: concentration,
                    result,
                }
            })
        })
        .collect()
}
