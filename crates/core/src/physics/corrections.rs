//! Correction factors applied on top of single-fiber capture
//!
//! - Bounce: small droplets adhere less and partly rebound
//! - Concentration: saturating nutrient solutions absorb relatively less
//! - Film formation: a saturated liquid film on the root surface cuts
//!   marginal uptake once exposure runs long enough

/// Droplet size below which bounce losses start (μm)
const BOUNCE_THRESHOLD_SIZE: f64 = 30.0;

/// Efficiency lost per μm below the bounce threshold
const BOUNCE_LOSS_PER_MICROMETER: f64 = 0.01;

/// Concentration above which the saturation penalty applies (ppm)
pub const SATURATION_CONCENTRATION: f64 = 1000.0;

/// Relative absorption above the saturation concentration
const SATURATED_CONCENTRATION_FACTOR: f64 = 0.9;

/// Droplet size above which films can form (μm)
pub const FILM_MIN_DROPLET_SIZE: f64 = 40.0;

/// Minimum exposure before films can form (s)
pub const FILM_MIN_EXPOSURE: f64 = 30.0;

/// Largest droplet size of the model (μm); film saturation time is measured from it
const FILM_REFERENCE_SIZE: f64 = 50.0;

/// Maximum fractional efficiency loss from a fully formed film
const FILM_MAX_PENALTY: f64 = 0.3;

/// Bounce correction for small droplets
///
/// f_b = 1 - 0.01 × (30 - d) for d < 30 μm, otherwise 1
///
/// # Arguments
/// * `droplet_size` - Droplet diameter (μm)
pub fn bounce_factor(droplet_size: f64) -> f64 {
    if droplet_size < BOUNCE_THRESHOLD_SIZE {
        1.0 - BOUNCE_LOSS_PER_MICROMETER * (BOUNCE_THRESHOLD_SIZE - droplet_size)
    } else {
        1.0
    }
}

/// Concentration saturation correction
///
/// 0.9 strictly above 1000 ppm, otherwise 1.0
pub fn concentration_factor(nutrient_concentration: f64) -> f64 {
    if nutrient_concentration > SATURATION_CONCENTRATION {
        SATURATED_CONCENTRATION_FACTOR
    } else {
        1.0
    }
}

/// Exposure time after which a film saturates the root surface (s)
///
/// t_sat = 30 + (50 - d)
pub fn film_saturation_time(droplet_size: f64) -> f64 {
    FILM_MIN_EXPOSURE + (FILM_REFERENCE_SIZE - droplet_size)
}

/// Film formation correction
///
/// Engages only for d > 40 μm and exposure > 30 s. Past the saturation time:
///
/// excess = (t - t_sat) / t
/// f_film = 1 - 0.3 × excess
///
/// # Arguments
/// * `droplet_size` - Droplet diameter (μm)
/// * `exposure_time` - Exposure duration (s)
pub fn film_formation_factor(droplet_size: f64, exposure_time: f64) -> f64 {
    if droplet_size <= FILM_MIN_DROPLET_SIZE || exposure_time <= FILM_MIN_EXPOSURE {
        return 1.0;
    }

    let saturation_time = film_saturation_time(droplet_size);
    if exposure_time > saturation_time {
        let excess_time = (exposure_time - saturation_time) / exposure_time;
        1.0 - FILM_MAX_PENALTY * excess_time
    } else {
        1.0
    }
}
