//! C ABI for the aeroponic absorption model
//!
//! Exposes a single stateless computation. Inputs and outputs are flat
//! `#[repr(C)]` structs of `f64`, and failures are reported through
//! [`AeroponicErrorCode`] plus a thread-local message.

mod error;
mod helpers;

pub use error::{aeroponic_get_last_error, aeroponic_get_last_error_code, AeroponicErrorCode};

use aeroponic_core::{
    compute, AbsorptionResult, AeroponicConfig, Celsius, MetersPerSecond, Micrometers,
    Millimeters, PartsPerMillion, Seconds,
};

use crate::error::DefaultAeroponicError;
use crate::helpers::{clear_last_error, track_error};

/// C-compatible model inputs
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorptionInputs {
    /// Droplet diameter (μm), valid range 20-50
    pub droplet_size: f64,
    /// Nutrient concentration (ppm)
    pub nutrient_concentration: f64,
    /// Root diameter (mm)
    pub root_diameter: f64,
    /// Airflow velocity (m/s)
    pub airflow_velocity: f64,
    /// Air temperature (°C)
    pub temperature: f64,
    /// Exposure time (s)
    pub exposure_time: f64,
    /// Roots per unit area
    pub root_density: f64,
}

impl AbsorptionInputs {
    fn config(&self) -> AeroponicConfig {
        AeroponicConfig {
            root_diameter: Millimeters::new(self.root_diameter),
            airflow_velocity: MetersPerSecond::new(self.airflow_velocity),
            temperature: Celsius::new(self.temperature),
            exposure_time: Seconds::new(self.exposure_time),
            root_density: self.root_density,
        }
    }
}

/// C-compatible model outputs
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AbsorptionOutputs {
    /// Absorbed liquid volume (ml/min)
    pub absorption_rate: f64,
    /// Combined absorption efficiency
    pub efficiency: f64,
    /// Absorbed nutrient mass (mg/min)
    pub total_nutrients_absorbed: f64,
    pub stokes_number: f64,
    pub reynolds_number: f64,
    pub interception_efficiency: f64,
    pub impaction_efficiency: f64,
    pub sedimentation_efficiency: f64,
    pub film_formation_factor: f64,
    pub concentration_factor: f64,
}

impl From<&AbsorptionResult> for AbsorptionOutputs {
    fn from(result: &AbsorptionResult) -> Self {
        let p = &result.parameters;
        Self {
            absorption_rate: result.absorption_rate,
            efficiency: result.efficiency,
            total_nutrients_absorbed: result.total_nutrients_absorbed,
            stokes_number: p.stokes_number,
            reynolds_number: p.reynolds_number,
            interception_efficiency: p.interception_efficiency,
            impaction_efficiency: p.impaction_efficiency,
            sedimentation_efficiency: p.sedimentation_efficiency,
            film_formation_factor: p.film_formation_factor,
            concentration_factor: p.concentration_factor,
        }
    }
}

/// Inputs with the default chamber configuration
///
/// Root diameter 0.5 mm, airflow 0.1 m/s, 25°C, 60 s exposure, 1000 roots.
#[no_mangle]
pub extern "C" fn aeroponic_default_inputs(
    droplet_size: f64,
    nutrient_concentration: f64,
) -> AbsorptionInputs {
    let config = AeroponicConfig::default();
    AbsorptionInputs {
        droplet_size,
        nutrient_concentration,
        root_diameter: config.root_diameter.value(),
        airflow_velocity: config.airflow_velocity.value(),
        temperature: config.temperature.value(),
        exposure_time: config.exposure_time.value(),
        root_density: config.root_density,
    }
}

/// Compute droplet absorption for one set of inputs.
///
/// Stateless and safe to call concurrently from any thread.
///
/// Returns
/// - `AeroponicErrorCode::Ok` (0) on success with `out` filled in
/// - `AeroponicErrorCode::NullPointer` if `inputs` or `out` is null
/// - `AeroponicErrorCode::InvalidDropletSize` if the droplet size is outside 20-50 μm
///
/// `out` is left untouched on failure. Call `aeroponic_get_last_error` for details.
///
/// # Safety
///
/// - `inputs` must be null or point to a valid `AbsorptionInputs`.
/// - `out` must be null or point to writable memory for an `AbsorptionOutputs`.
///
/// # Example Usage (C++)
/// ```cpp
/// AbsorptionInputs in = aeroponic_default_inputs(35.0, 500.0);
/// AbsorptionOutputs out;
/// if (aeroponic_compute(&in, &out) == AeroponicErrorCode::Ok) {
///     printf("%.4f ml/min\n", out.absorption_rate);
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn aeroponic_compute(
    inputs: *const AbsorptionInputs,
    out: *mut AbsorptionOutputs,
) -> AeroponicErrorCode {
    if inputs.is_null() {
        return track_error(&DefaultAeroponicError::null_pointer("inputs"));
    }
    if out.is_null() {
        return track_error(&DefaultAeroponicError::null_pointer("out"));
    }

    // SAFETY: `inputs` is non-null and the caller guarantees it is valid
    let inputs = unsafe { &*inputs };

    match compute(
        Micrometers::new(inputs.droplet_size),
        PartsPerMillion::new(inputs.nutrient_concentration),
        &inputs.config(),
    ) {
        Ok(result) => {
            // SAFETY: `out` is non-null and the caller guarantees it is writable
            unsafe {
                out.write(AbsorptionOutputs::from(&result));
            }
            clear_last_error();
            AeroponicErrorCode::Ok
        }
        Err(e) => track_error(&DefaultAeroponicError::from(e)),
    }
}
