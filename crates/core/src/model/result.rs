use serde::{Deserialize, Serialize};

/// Outcome of one absorption calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionResult {
    /// Absorbed liquid volume (ml/min)
    pub absorption_rate: f64,
    /// Combined absorption efficiency (dimensionless, not clamped)
    pub efficiency: f64,
    /// Absorbed nutrient mass (mg/min)
    pub total_nutrients_absorbed: f64,
    /// Per-mechanism breakdown
    pub parameters: AbsorptionParameters,
    /// Remaining intermediate quantities
    pub diagnostics: AbsorptionDiagnostics,
}

/// Dimensionless numbers, capture efficiencies and correction factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionParameters {
    pub stokes_number: f64,
    pub reynolds_number: f64,
    pub interception_efficiency: f64,
    pub impaction_efficiency: f64,
    pub sedimentation_efficiency: f64,
    pub film_formation_factor: f64,
    pub concentration_factor: f64,
}

/// Intermediate values that do not appear in [`AbsorptionParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionDiagnostics {
    /// Air dynamic viscosity (Pa·s)
    pub air_viscosity: f64,
    /// Droplet settling velocity (m/s)
    pub settling_velocity: f64,
    /// Air transit time across one root diameter (s)
    pub impact_time: f64,
    /// Small-droplet bounce correction
    pub bounce_factor: f64,
    /// Capture efficiency after bounce, before bulk corrections
    pub single_fiber_efficiency: f64,
    /// Root bundle surface area (m²)
    pub root_surface_area: f64,
    /// Single droplet volume (m³)
    pub droplet_volume: f64,
    /// Mist volumetric flux (m³/s per m²)
    pub water_flow_rate: f64,
}
