//! Pool swimmer athletic profile.

use workouts::WorkoutKind;

use super::{AthleteProfile, distance_m};
use crate::generators::GeneratedAthlete;

/// Distance per stroke counted by the wrist sensor, in meters.
const STROKE_M: f64 = 1.38;

/// Athletic profile for pool swimming.
///
/// Based on typical fitness swimmer performance:
/// - Base pace: ~2:30/100m (0.67 m/s)
/// - 25 m pool unless configured otherwise
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Base speed in m/s.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Pool length in meters.
    pool_length_m: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 0.67, // ~2:30/100m
            variance: 0.1,
            pool_length_m: 25.0,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile with a pace given per 100 m.
    ///
    /// # Arguments
    /// * `pace_sec_per_100m` - Seconds per 100 m (e.g., 120.0 for 2:00/100m)
    pub fn with_pace(pace_sec_per_100m: f64) -> Self {
        Self {
            base_speed: 100.0 / pace_sec_per_100m,
            ..Default::default()
        }
    }

    /// Same swimmer in a different pool.
    pub fn in_pool(self, pool_length_m: f64) -> Self {
        Self {
            pool_length_m,
            ..self
        }
    }

    /// Creates a masters swimmer profile (~1:40/100m).
    pub fn masters() -> Self {
        Self::with_pace(100.0)
    }

    /// Creates a beginner swimmer profile (~3:00/100m).
    pub fn beginner() -> Self {
        Self::with_pace(180.0)
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
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
        let distance = distance_m(speed_mps, duration_hours);
        // Only completed lengths count.
        let pool_count = (distance / self.pool_length_m).floor();
        let strokes = (distance / STROKE_M).round();
        vec![
            strokes,
            duration_hours,
            athlete.weight_kg,
            self.pool_length_m,
            pool_count,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masters_in_long_course() {
        let athlete = GeneratedAthlete {
            weight_kg: 80.0,
            height_cm: 175.0,
        };
        let profile = SwimmerProfile::masters().in_pool(50.0);
        assert!((profile.base_speed_mps() - 1.0).abs() < 1e-9);
        // 3600 m in an hour: 72 full 50 m lengths
        let readings = profile.readings(&athlete, 1.0, 1.0);
        assert_eq!(readings[3], 50.0);
        assert_eq!(readings[4], 72.0);
        assert!(SwimmerProfile::beginner().base_speed_mps() < profile.base_speed_mps());
    }

    #[test]
    fn test_readings_count_full_lengths() {
        let athlete = GeneratedAthlete {
            weight_kg: 80.0,
            height_cm: 175.0,
        };
        // 1010 m in an hour: 40 full 25 m lengths
        let readings = SwimmerProfile::default().readings(&athlete, 1.0, 1010.0 / 3600.0);
        assert_eq!(readings.len(), WorkoutKind::Swimming.arity());
        assert_eq!(readings[3], 25.0);
        assert_eq!(readings[4], 40.0);
    }
}
