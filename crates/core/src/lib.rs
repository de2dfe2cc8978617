//! Aeroponic Absorption Core Library
//!
//! Steady-state model of nutrient mist droplets being captured by plant roots
//! in an aeroponic chamber. Roots are treated as collecting fibers in the
//! sense of aerosol filtration theory.
//!
//! ## Model Stages
//!
//! - Flow regime: air viscosity, Stokes and Reynolds numbers, settling velocity
//! - Capture: interception, inertial impaction and sedimentation efficiencies
//! - Corrections: small-droplet bounce, concentration saturation, film formation
//! - Flux: root surface area and mist flux to ml/min and mg/min
//!
//! Sweeps and chart data are thin layers of repeated [`compute`] calls.

// Core types and utilities
pub mod core_types;

// Physics sub-models and the composed model
pub mod model;
pub mod physics;

// Repeated evaluation for charts
pub mod sweep;
pub mod visualization;

// Re-export core types
pub use core_types::{
    AeroponicConfig, Celsius, Meters, MetersPerSecond, Micrometers, Millimeters, PartsPerMillion,
    Seconds,
};

// Re-export the model
pub use model::{
    compute, compute_default, AbsorptionDiagnostics, AbsorptionError, AbsorptionParameters,
    AbsorptionResult, MAX_DROPLET_SIZE, MIN_DROPLET_SIZE,
};

pub use sweep::{linspace, sweep_droplet_size, sweep_nutrient_concentration, SweepPoint};
pub use visualization::{AbsorptionFigure, Bar, Curve};
