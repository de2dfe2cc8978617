//! Fluid properties and dimensionless flow numbers
//!
//! Describes how a mist droplet moves through the air stream around a root,
//! treated as a cylinder in cross-flow.
//!
//! # Scientific References
//! - Hinds, W.C. (1999). "Aerosol Technology", 2nd ed., Chapters 3 and 5
//! - Sutherland, W. (1893). "The viscosity of gases and molecular force"
//!   Philosophical Magazine, 36(223), 507-531 (linearized near 20°C)

use serde::{Deserialize, Serialize};

/// Density of liquid water used for droplet inertia (kg/m³)
pub const WATER_DENSITY: f64 = 998.0;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Dynamic viscosity of air at the 20°C reference point (Pa·s)
const AIR_VISCOSITY_REFERENCE: f64 = 1.8e-5;

/// Fractional viscosity change per °C away from the reference point
const AIR_VISCOSITY_TEMPERATURE_COEFFICIENT: f64 = 0.00284;

/// Reference temperature for the viscosity correction (°C)
const AIR_VISCOSITY_REFERENCE_TEMPERATURE: f64 = 20.0;

/// Calculate dynamic viscosity of air with a linear temperature correction
///
/// μ = 1.8×10⁻⁵ × (1 + 0.00284 × (T - 20))
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
///
/// # Returns
/// Dynamic viscosity (Pa·s)
pub fn air_viscosity(temperature: f64) -> f64 {
    AIR_VISCOSITY_REFERENCE
        * (1.0
            + AIR_VISCOSITY_TEMPERATURE_COEFFICIENT
                * (temperature - AIR_VISCOSITY_REFERENCE_TEMPERATURE))
}

/// Stokes number of a droplet approaching a cylindrical obstacle
///
/// Stk = ρ_w × d² × U / (18 × μ × D)
///
/// # Arguments
/// * `droplet_diameter` - Droplet diameter (m)
/// * `airflow_velocity` - Free-stream velocity (m/s)
/// * `viscosity` - Air dynamic viscosity (Pa·s)
/// * `root_diameter` - Obstacle diameter (m)
pub fn stokes_number(
    droplet_diameter: f64,
    airflow_velocity: f64,
    viscosity: f64,
    root_diameter: f64,
) -> f64 {
    (WATER_DENSITY * droplet_diameter.powi(2) * airflow_velocity)
        / (18.0 * viscosity * root_diameter)
}

/// Flow Reynolds number around the root
///
/// Re = ρ_w × U × D / μ
///
/// Uses water density, matching the calibrated model. Reported as a
/// diagnostic only; no downstream formula consumes it.
pub fn reynolds_number(airflow_velocity: f64, root_diameter: f64, viscosity: f64) -> f64 {
    (WATER_DENSITY * airflow_velocity * root_diameter) / viscosity
}

/// Stokes-law terminal settling velocity of a droplet
///
/// v_s = ρ_w × d² × g / (18 × μ)
///
/// # Returns
/// Settling velocity (m/s)
pub fn settling_velocity(droplet_diameter: f64, viscosity: f64) -> f64 {
    (WATER_DENSITY * droplet_diameter.powi(2) * GRAVITY) / (18.0 * viscosity)
}

/// Time for the air stream to travel one root diameter (s)
pub fn impact_time(root_diameter: f64, airflow_velocity: f64) -> f64 {
    root_diameter / airflow_velocity
}

/// Flow state around a single root for one droplet size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowRegime {
    /// Air dynamic viscosity (Pa·s)
    pub air_viscosity: f64,
    /// Droplet Stokes number (dimensionless)
    pub stokes_number: f64,
    /// Root Reynolds number (dimensionless)
    pub reynolds_number: f64,
    /// Terminal settling velocity (m/s)
    pub settling_velocity: f64,
    /// Air transit time across the root (s)
    pub impact_time: f64,
}

impl FlowRegime {
    /// Derive every flow quantity from SI geometry and conditions
    ///
    /// # Arguments
    /// * `droplet_diameter` - Droplet diameter (m)
    /// * `root_diameter` - Root diameter (m)
    /// * `airflow_velocity` - Air velocity (m/s)
    /// * `temperature` - Air temperature (°C)
    pub fn new(
        droplet_diameter: f64,
        root_diameter: f64,
        airflow_velocity: f64,
        temperature: f64,
    ) -> Self {
        let viscosity = air_viscosity(temperature);

        FlowRegime {
            air_viscosity: viscosity,
            stokes_number: stokes_number(
                droplet_diameter,
                airflow_velocity,
                viscosity,
                root_diameter,
            ),
            reynolds_number: reynolds_number(airflow_velocity, root_diameter, viscosity),
            settling_velocity: settling_velocity(droplet_diameter, viscosity),
            impact_time: impact_time(root_diameter, airflow_velocity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viscosity_at_reference_temperature() {
        assert_relative_eq!(air_viscosity(20.0), 1.8e-5, max_relative = 1e-12);
    }

    #[test]
    fn test_viscosity_increases_with_temperature() {
        assert!(air_viscosity(35.0) > air_viscosity(25.0));
        // 25°C: 1.8e-5 × (1 + 0.0142)
        assert_relative_eq!(air_viscosity(25.0), 1.82556e-5, max_relative = 1e-10);
    }

    #[test]
    fn test_stokes_number_scales_with_diameter_squared() {
        let mu = air_viscosity(25.0);
        let small = stokes_number(20e-6, 0.1, mu, 5e-4);
        let large = stokes_number(40e-6, 0.1, mu, 5e-4);
        assert_relative_eq!(large / small, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_reynolds_independent_of_droplet() {
        let a = FlowRegime::new(20e-6, 5e-4, 0.1, 25.0);
        let b = FlowRegime::new(50e-6, 5e-4, 0.1, 25.0);
        assert_eq!(a.reynolds_number, b.reynolds_number);
    }

    #[test]
    fn test_impact_time() {
        assert_relative_eq!(impact_time(5e-4, 0.1), 5e-3, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_airflow_is_not_guarded() {
        let regime = FlowRegime::new(35e-6, 5e-4, 0.0, 25.0);
        assert!(regime.impact_time.is_infinite());
        assert_eq!(regime.stokes_number, 0.0);
    }
}
