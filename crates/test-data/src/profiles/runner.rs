//! Runner athletic profile.

use workouts::WorkoutKind;

use super::{AthleteProfile, distance_m};
use crate::generators::GeneratedAthlete;

/// Average running stride picked up by the step counter, in meters.
const STRIDE_M: f64 = 0.65;

/// Athletic profile for running activities.
///
/// Based on typical recreational to competitive runner performance:
/// - Base pace: ~6:00/km (2.8 m/s)
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base speed in m/s on flat terrain.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.8, // ~6:00/km
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        let base_speed = 1000.0 / (pace_min_per_km * 60.0);
        Self {
            base_speed,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }

    /// Creates a recreational runner profile (~7:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(7.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
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
        vec![steps, duration_hours, athlete.weight_kg]
    }
}
