//! Athletic performance profiles.
//!
//! Profiles define realistic speeds for each workout kind and know how the
//! sensor unit would encode a session of that kind as positional readings.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::WorkoutKind;

use crate::generators::GeneratedAthlete;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The workout kind they produce packages for
/// - Base speed
/// - Day-to-day variance
/// - The package encoding of a session
pub trait AthleteProfile: Send + Sync {
    fn kind(&self) -> WorkoutKind;

    /// Base speed in meters per second.
    fn base_speed_mps(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;

    /// Encodes a session at `speed_mps` for `duration_hours` in the sensor's
    /// positional order for [`Self::kind`].
    fn readings(&self, athlete: &GeneratedAthlete, duration_hours: f64, speed_mps: f64)
    -> Vec<f64>;
}

/// Meters covered at `speed_mps` over `duration_hours`.
pub fn distance_m(speed_mps: f64, duration_hours: f64) -> f64 {
    speed_mps * duration_hours * 3600.0
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}
