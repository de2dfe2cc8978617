//! Single-fiber capture mechanisms
//!
//! Each root is treated as a collecting fiber. A droplet can reach it by
//! interception (finite size on a streamline), inertial impaction (leaving
//! the streamline) or gravitational sedimentation.
//!
//! None of the efficiencies are clamped to [0, 1]. Sedimentation in
//! particular exceeds 1 whenever the settling velocity outruns the airflow.
//!
//! # Scientific References
//! - Friedlander, S.K. (2000). "Smoke, Dust, and Haze", 2nd ed., Chapter 4
//! - Hinds, W.C. (1999). "Aerosol Technology", Chapter 9 (filtration)

/// Interception prefactor for a cylinder in potential flow
const INTERCEPTION_COEFFICIENT: f64 = 0.6;

/// Stokes number at or below which impaction is treated as negligible
pub const IMPACTION_STOKES_THRESHOLD: f64 = 0.1;

/// Half-efficiency constant of the impaction curve (Stk² at 50%)
const IMPACTION_HALF_POINT: f64 = 0.25;

/// Interception efficiency
///
/// R = d / D
/// η_R = 0.6 × R² / (1 + R)
///
/// # Arguments
/// * `droplet_diameter` - Droplet diameter (m)
/// * `root_diameter` - Root diameter (m)
pub fn interception_efficiency(droplet_diameter: f64, root_diameter: f64) -> f64 {
    let interception_param = droplet_diameter / root_diameter;
    INTERCEPTION_COEFFICIENT * interception_param.powi(2) / (1.0 + interception_param)
}

/// Inertial impaction efficiency
///
/// η_I = Stk² / (Stk² + 0.25) for Stk > 0.1, otherwise 0
///
/// The step at the threshold is intentional: below it droplets follow the
/// streamlines around the root.
pub fn impaction_efficiency(stokes_number: f64) -> f64 {
    if stokes_number > IMPACTION_STOKES_THRESHOLD {
        let stk_squared = stokes_number.powi(2);
        stk_squared / (stk_squared + IMPACTION_HALF_POINT)
    } else {
        0.0
    }
}

/// Gravitational sedimentation efficiency
///
/// η_G = v_s / U
pub fn sedimentation_efficiency(settling_velocity: f64, airflow_velocity: f64) -> f64 {
    settling_velocity / airflow_velocity
}

/// The three capture efficiencies for one droplet/root pairing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureEfficiencies {
    pub interception: f64,
    pub impaction: f64,
    pub sedimentation: f64,
}

impl CaptureEfficiencies {
    /// Sum of all mechanisms, before bounce correction
    pub fn total(&self) -> f64 {
        self.interception + self.impaction + self.sedimentation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interception_small_ratio() {
        // R = 35e-6 / 5e-4 = 0.07
        let eta = interception_efficiency(35e-6, 5e-4);
        assert_relative_eq!(eta, 0.6 * 0.07 * 0.07 / 1.07, max_relative = 1e-9);
    }

    #[test]
    fn test_impaction_zero_at_threshold() {
        assert_eq!(impaction_efficiency(0.1), 0.0);
        assert_eq!(impaction_efficiency(0.05), 0.0);
        assert!(impaction_efficiency(0.1001) > 0.0);
    }

    #[test]
    fn test_impaction_half_point() {
        assert_relative_eq!(impaction_efficiency(0.5), 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_impaction_approaches_unity() {
        assert!(impaction_efficiency(100.0) > 0.9999);
        assert!(impaction_efficiency(100.0) < 1.0);
    }

    #[test]
    fn test_sedimentation_unbounded() {
        assert_relative_eq!(sedimentation_efficiency(0.2, 0.1), 2.0);
    }

    #[test]
    fn test_total_sums_mechanisms() {
        let capture = CaptureEfficiencies {
            interception: 0.1,
            impaction: 0.25,
            sedimentation: 0.5,
        };
        assert_relative_eq!(capture.total(), 0.85, max_relative = 1e-12);
    }
}
