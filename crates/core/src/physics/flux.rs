//! Conversion from capture efficiency to absorbed volume and nutrient mass

use std::f64::consts::PI;

/// Calibrated droplet number density of the mist (droplets per m³)
///
/// Not the density of water, which is `WATER_DENSITY` in the fluid module.
pub const DROPLET_DENSITY: f64 = 5e8;

/// Effective root length per root used for surface area (m)
const ROOT_EFFECTIVE_LENGTH: f64 = 0.01;

/// Seconds per minute
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Cubic meters to milliliters
const CUBIC_METERS_TO_ML: f64 = 1e6;

/// Parts per million × ml gives mg after this divisor
const PPM_ML_TO_MG: f64 = 1000.0;

/// Lateral surface area of the root bundle (m²)
///
/// A = π × D × 0.01 × n
pub fn root_surface_area(root_diameter: f64, root_density: f64) -> f64 {
    PI * root_diameter * ROOT_EFFECTIVE_LENGTH * root_density
}

/// Volume of a spherical droplet (m³)
pub fn droplet_volume(droplet_diameter: f64) -> f64 {
    (4.0 / 3.0) * PI * (droplet_diameter / 2.0).powi(3)
}

/// Volumetric water flux carried by the mist (m³/s per m²)
pub fn water_flow_rate(airflow_velocity: f64, droplet_volume: f64) -> f64 {
    airflow_velocity * droplet_volume * DROPLET_DENSITY
}

/// Absorbed liquid volume per minute (ml/min)
pub fn absorption_rate(water_flow_rate: f64, efficiency: f64, root_surface_area: f64) -> f64 {
    water_flow_rate * efficiency * root_surface_area * SECONDS_PER_MINUTE * CUBIC_METERS_TO_ML
}

/// Nutrient mass absorbed per minute (mg/min)
pub fn nutrients_absorbed(absorption_rate: f64, nutrient_concentration: f64) -> f64 {
    absorption_rate * nutrient_concentration / PPM_ML_TO_MG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_surface_area_defaults() {
        // π × 5e-4 × 0.01 × 1000
        assert_relative_eq!(
            root_surface_area(5e-4, 1000.0),
            PI * 5e-3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_droplet_volume_scales_cubically() {
        let ratio = droplet_volume(40e-6) / droplet_volume(20e-6);
        assert_relative_eq!(ratio, 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_nutrients_identity() {
        assert_relative_eq!(nutrients_absorbed(2.0, 500.0), 1.0);
    }

    #[test]
    fn test_absorption_rate_linear_in_efficiency() {
        let base = absorption_rate(1e-6, 0.5, 0.01);
        let doubled = absorption_rate(1e-6, 1.0, 0.01);
        assert_relative_eq!(doubled, 2.0 * base, max_relative = 1e-12);
    }
}
