//! Growing-chamber configuration
//!
//! Geometric and environmental parameters shared by every absorption
//! calculation. Droplet size and nutrient concentration are passed to
//! [`crate::compute`] directly; everything else lives here.

use crate::core_types::units::{Celsius, MetersPerSecond, Millimeters, Seconds};
use serde::{Deserialize, Serialize};

/// Environmental and geometric parameters of an aeroponic chamber
///
/// None of the fields are range-checked. Zero `root_diameter` or
/// `airflow_velocity` produce infinite or NaN results instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroponicConfig {
    /// Root diameter (mm)
    pub root_diameter: Millimeters,
    /// Mean airflow velocity past the roots (m/s)
    pub airflow_velocity: MetersPerSecond,
    /// Air temperature (°C), drives air viscosity
    pub temperature: Celsius,
    /// Time the roots have been exposed to the mist (s)
    pub exposure_time: Seconds,
    /// Roots per unit area
    pub root_density: f64,
}

impl AeroponicConfig {
    /// Default root diameter (mm)
    pub const DEFAULT_ROOT_DIAMETER: f64 = 0.5;
    /// Default airflow velocity (m/s)
    pub const DEFAULT_AIRFLOW_VELOCITY: f64 = 0.1;
    /// Default air temperature (°C)
    pub const DEFAULT_TEMPERATURE: f64 = 25.0;
    /// Default exposure time (s)
    pub const DEFAULT_EXPOSURE_TIME: f64 = 60.0;
    /// Default root density (roots per unit area)
    pub const DEFAULT_ROOT_DENSITY: f64 = 1000.0;

    /// Override the root diameter
    pub fn with_root_diameter(mut self, root_diameter: Millimeters) -> Self {
        self.root_diameter = root_diameter;
        self
    }

    /// Override the airflow velocity
    pub fn with_airflow_velocity(mut self, airflow_velocity: MetersPerSecond) -> Self {
        self.airflow_velocity = airflow_velocity;
        self
    }

    /// Override the air temperature
    pub fn with_temperature(mut self, temperature: Celsius) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the exposure time
    pub fn with_exposure_time(mut self, exposure_time: Seconds) -> Self {
        self.exposure_time = exposure_time;
        self
    }

    /// Override the root density
    pub fn with_root_density(mut self, root_density: f64) -> Self {
        self.root_density = root_density;
        self
    }
}

impl Default for AeroponicConfig {
    fn default() -> Self {
        AeroponicConfig {
            root_diameter: Millimeters::new(Self::DEFAULT_ROOT_DIAMETER),
            airflow_velocity: MetersPerSecond::new(Self::DEFAULT_AIRFLOW_VELOCITY),
            temperature: Celsius::new(Self::DEFAULT_TEMPERATURE),
            exposure_time: Seconds::new(Self::DEFAULT_EXPOSURE_TIME),
            root_density: Self::DEFAULT_ROOT_DENSITY,
        }
    }
}
