use crate::core_types::units::Micrometers;

/// Failure of an absorption calculation
///
/// Only the droplet size is validated. Every other input is accepted as
/// given and degenerate values propagate as infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbsorptionError {
    /// Droplet size outside the modeled 20-50 μm range (NaN included)
    InvalidDropletSize {
        /// The rejected droplet size
        droplet_size: Micrometers,
    },
}

impl std::fmt::Display for AbsorptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsorptionError::InvalidDropletSize { droplet_size } => write!(
                f,
                "Droplet size must be between 20-50 μm, got {}",
                droplet_size.value()
            ),
        }
    }
}

impl std::error::Error for AbsorptionError {}
