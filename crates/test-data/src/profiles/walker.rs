//! Race-walker athletic profile.

use workouts::WorkoutKind;

use super::{AthleteProfile, distance_m};
use crate::generators::GeneratedAthlete;

/// Race-walking stride as counted by the step sensor, in meters.
const STRIDE_M: f64 = 0.65;

/// Athletic profile for sports walking.
///
/// Based on typical club race-walker performance:
/// - Base speed: ~6.5 km/h (1.8 m/s)
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base speed in m/s.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 1.8, // ~6.5 km/h
            variance: 0.1,
        }
    }
}

impl WalkerProfile {
    /// Creates a new walker profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h
    pub fn with_speed(speed_kmh: f64) -> Self {
        let base_speed = speed_kmh / 3.6;
        Self {
            base_speed,
            ..Default::default()
        }
    }

    /// Creates a competitive race-walker profile (~12 km/h).
    pub fn competitive() -> Self {
        Self::with_speed(12.0)
    }

    /// Creates a leisurely walker profile (~4.5 km/h).
    pub fn leisurely() -> Self {
        Self::with_speed(4.5)
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn readings(
        &self,
        athlete: &GeneratedAthlete,
        duration_hours: f64,
        speed_mps: f64,
    ) -> Vec<f64> {
        let steps = (distance_m(speed_mps, duration_hours) / STRIDE_M).round();
        vec![steps, duration_hours, athlete.weight_kg, athlete.height_cm]
    }
}
