//! Semantic unit types for the aeroponic absorption inputs
//!
//! Newtype wrappers keep droplet sizes (micrometers) apart from root diameters
//! (millimeters) and make every conversion to SI meters explicit.
//!
//! # Design Philosophy
//! - All quantities use f64 so sweep results are reproducible bit-for-bit
//! - Constructors never validate; range checks belong to the model
//! - `Deref` to the raw value for arithmetic inside physics formulas
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use aeroponic_core::core_types::units::{Micrometers, Millimeters};
//!
//! let droplet = Micrometers::new(35.0);
//! assert!((*droplet.to_meters() - 35.0e-6).abs() < 1e-18);
//!
//! let root = Millimeters::new(0.5);
//! assert!((*root.to_meters() - 5.0e-4).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

// ============================================================================
// LENGTH TYPES
// ============================================================================

/// Length in meters (SI base unit used by every physics formula)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Meters {
    /// Create a new length in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e} m", self.0)
    }
}

/// Length in micrometers (droplet diameters)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Micrometers(f64);

impl Micrometers {
    /// Micrometers to meters conversion factor
    const TO_METERS: f64 = 1e-6;

    /// Create a new length in micrometers
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Micrometers(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * Self::TO_METERS)
    }
}

impl Deref for Micrometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Micrometers {
    fn from(v: f64) -> Self {
        Micrometers(v)
    }
}

impl fmt::Display for Micrometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} μm", self.0)
    }
}

/// Length in millimeters (root diameters)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Millimeters(f64);

impl Millimeters {
    /// Millimeters to meters conversion factor
    const TO_METERS: f64 = 1e-3;

    /// Create a new length in millimeters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Millimeters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to meters
    #[inline]
    #[must_use]
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * Self::TO_METERS)
    }
}

impl Deref for Millimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Millimeters {
    fn from(v: f64) -> Self {
        Millimeters(v)
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

// ============================================================================
// TEMPERATURE, VELOCITY, TIME
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Celsius {
    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius(v)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Velocity in meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl MetersPerSecond {
    /// Create a new velocity
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for MetersPerSecond {
    fn from(v: f64) -> Self {
        MetersPerSecond(v)
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m/s", self.0)
    }
}

/// Time duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Seconds(f64);

impl Seconds {
    /// Create a new duration
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Seconds(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Deref for Seconds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for Seconds {
    fn from(v: f64) -> Self {
        Seconds(v)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} s", self.0)
    }
}

// ============================================================================
// CONCENTRATION
// ============================================================================

/// Nutrient concentration in parts per million
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PartsPerMillion(f64);

impl PartsPerMillion {
    /// Create a new concentration
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        PartsPerMillion(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Deref for PartsPerMillion {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<f64> for PartsPerMillion {
    fn from(v: f64) -> Self {
        PartsPerMillion(v)
    }
}

impl fmt::Display for PartsPerMillion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ppm", self.0)
    }
}
