//! Steady-state droplet absorption model
//!
//! Combines the flow regime, the three capture mechanisms and the bulk
//! corrections into a single efficiency, then converts it into absorbed
//! volume and nutrient mass per minute.
//!
//! # Usage
//! ```
//! use aeroponic_core::{compute, AeroponicConfig, Micrometers, PartsPerMillion};
//!
//! let result = compute(
//!     Micrometers::new(35.0),
//!     PartsPerMillion::new(500.0),
//!     &AeroponicConfig::default(),
//! )
//! .unwrap();
//! assert!(result.absorption_rate > 0.0);
//! assert_eq!(result.parameters.concentration_factor, 1.0);
//! ```

mod error;
mod result;

pub use error::AbsorptionError;
pub use result::{AbsorptionDiagnostics, AbsorptionParameters, AbsorptionResult};

use crate::core_types::config::AeroponicConfig;
use crate::core_types::units::{Micrometers, PartsPerMillion};
use crate::physics::capture::{
    impaction_efficiency, interception_efficiency, sedimentation_efficiency, CaptureEfficiencies,
};
use crate::physics::corrections::{bounce_factor, concentration_factor, film_formation_factor};
use crate::physics::fluid::FlowRegime;
use crate::physics::flux;
use tracing::debug;

/// Smallest droplet size the model accepts (μm)
pub const MIN_DROPLET_SIZE: f64 = 20.0;

/// Largest droplet size the model accepts (μm)
pub const MAX_DROPLET_SIZE: f64 = 50.0;

/// Compute absorption of a nutrient mist onto aeroponic roots
///
/// Pure function of its inputs: identical arguments always give identical
/// results.
///
/// # Arguments
/// * `droplet_size` - Droplet diameter, must lie in [20, 50] μm
/// * `nutrient_concentration` - Nutrient concentration of the mist (ppm)
/// * `config` - Chamber geometry and environment
///
/// # Errors
/// Returns [`AbsorptionError::InvalidDropletSize`] if `droplet_size` is
/// outside [20, 50] μm or NaN. No other input is checked.
pub fn compute(
    droplet_size: Micrometers,
    nutrient_concentration: PartsPerMillion,
    config: &AeroponicConfig,
) -> Result<AbsorptionResult, AbsorptionError> {
    if !(MIN_DROPLET_SIZE..=MAX_DROPLET_SIZE).contains(&*droplet_size) {
        return Err(AbsorptionError::InvalidDropletSize { droplet_size });
    }

    let droplet_diameter = *droplet_size.to_meters();
    let root_diameter = *config.root_diameter.to_meters();
    let airflow_velocity = *config.airflow_velocity;

    let regime = FlowRegime::new(
        droplet_diameter,
        root_diameter,
        airflow_velocity,
        *config.temperature,
    );

    let capture = CaptureEfficiencies {
        interception: interception_efficiency(droplet_diameter, root_diameter),
        impaction: impaction_efficiency(regime.stokes_number),
        sedimentation: sedimentation_efficiency(regime.settling_velocity, airflow_velocity),
    };

    let bounce = bounce_factor(*droplet_size);
    let single_fiber_efficiency = capture.total() * bounce;

    let concentration = concentration_factor(*nutrient_concentration);
    let film = film_formation_factor(*droplet_size, *config.exposure_time);
    let efficiency = single_fiber_efficiency * concentration * film;

    let root_surface_area = flux::root_surface_area(root_diameter, config.root_density);
    let droplet_volume = flux::droplet_volume(droplet_diameter);
    let water_flow_rate = flux::water_flow_rate(airflow_velocity, droplet_volume);
    let absorption_rate = flux::absorption_rate(water_flow_rate, efficiency, root_surface_area);
    let total_nutrients_absorbed = flux::nutrients_absorbed(absorption_rate, *nutrient_concentration);

    debug!(
        droplet_size = *droplet_size,
        stokes = regime.stokes_number,
        efficiency,
        absorption_rate,
        "Computed droplet absorption"
    );

    Ok(AbsorptionResult {
        absorption_rate,
        efficiency,
        total_nutrients_absorbed,
        parameters: AbsorptionParameters {
            stokes_number: regime.stokes_number,
            reynolds_number: regime.reynolds_number,
            interception_efficiency: capture.interception,
            impaction_efficiency: capture.impaction,
            sedimentation_efficiency: capture.sedimentation,
            film_formation_factor: film,
            concentration_factor: concentration,
        },
        diagnostics: AbsorptionDiagnostics {
            air_viscosity: regime.air_viscosity,
            settling_velocity: regime.settling_velocity,
            impact_time: regime.impact_time,
            bounce_factor: bounce,
            single_fiber_efficiency,
            root_surface_area,
            droplet_volume,
            water_flow_rate,
        },
    })
}

/// [`compute`] with [`AeroponicConfig::default`]
///
/// # Errors
/// Same as [`compute`].
pub fn compute_default(
    droplet_size: Micrometers,
    nutrient_concentration: PartsPerMillion,
) -> Result<AbsorptionResult, AbsorptionError> {
    compute(droplet_size, nutrient_concentration, &AeroponicConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(droplet_size: f64, concentration: f64) -> AbsorptionResult {
        compute_default(
            Micrometers::new(droplet_size),
            PartsPerMillion::new(concentration),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_out_of_range() {
        for size in [19.999, 50.001, 0.0, -35.0, f64::NAN] {
            let err = compute_default(Micrometers::new(size), PartsPerMillion::new(500.0));
            assert!(
                matches!(err, Err(AbsorptionError::InvalidDropletSize { .. })),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_inclusive_bounds() {
        run(20.0, 500.0);
        run(50.0, 500.0);
    }

    #[test]
    fn test_efficiency_is_product_of_stages() {
        let result = run(45.0, 1500.0);
        let expected = result.diagnostics.single_fiber_efficiency
            * result.parameters.concentration_factor
            * result.parameters.film_formation_factor;
        assert_eq!(result.efficiency, expected);
    }

    #[test]
    fn test_bounce_reduces_single_fiber_efficiency() {
        let result = run(25.0, 500.0);
        let p = result.parameters;
        let raw = p.interception_efficiency + p.impaction_efficiency + p.sedimentation_efficiency;
        assert_relative_eq!(result.diagnostics.bounce_factor, 0.95, max_relative = 1e-12);
        assert_relative_eq!(
            result.diagnostics.single_fiber_efficiency,
            raw * 0.95,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_other_inputs_are_not_validated() {
        let config = AeroponicConfig::default()
            .with_airflow_velocity(crate::core_types::units::MetersPerSecond::new(0.0));
        let result = compute(Micrometers::new(35.0), PartsPerMillion::new(500.0), &config).unwrap();
        assert!(result.parameters.sedimentation_efficiency.is_infinite());
        assert!(result.diagnostics.impact_time.is_infinite());
    }
}
