//! Athlete generation with body measurements.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::GeneratorError;

/// Body measurements the sensor packages need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAthlete {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Configuration for athlete generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteGenConfig {
    /// Mean body weight in kg.
    pub weight_mean: f64,
    /// Standard deviation of body weight.
    pub weight_std: f64,
    /// Mean height in cm.
    pub height_mean: f64,
    /// Standard deviation of height.
    pub height_std: f64,
}

impl Default for AthleteGenConfig {
    fn default() -> Self {
        Self {
            // Fitness app users tend to be in shape
            weight_mean: 70.0,
            weight_std: 12.0,
            height_mean: 172.0,
            height_std: 9.0,
        }
    }
}

/// Generates realistic athletes for testing.
pub struct AthleteGenerator {
    weight: Normal<f64>,
    height: Normal<f64>,
}

impl AthleteGenerator {
    /// Creates a new athlete generator with default configuration.
    pub fn new() -> Result<Self, GeneratorError> {
        Self::with_config(&AthleteGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    ///
    /// Standard deviations must be finite and non-negative.
    pub fn with_config(config: &AthleteGenConfig) -> Result<Self, GeneratorError> {
        for (field, value) in [("weight", config.weight_std), ("height", config.height_std)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GeneratorError::Spread { field, value });
            }
        }
        Ok(Self {
            weight: Normal::new(config.weight_mean, config.weight_std)?,
            height: Normal::new(config.height_mean, config.height_std)?,
        })
    }

    /// Generates a single athlete.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedAthlete {
        let weight_kg: f64 = self.weight.sample(rng);
        let height_cm: f64 = self.height.sample(rng);
        GeneratedAthlete {
            weight_kg: weight_kg.clamp(45.0, 120.0),
            height_cm: height_cm.clamp(145.0, 205.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_athlete() {
        let athlete_gen = AthleteGenerator::new().unwrap();
        let mut rng = rand::thread_rng();
        let athlete = athlete_gen.generate(&mut rng);

        assert!((45.0..=120.0).contains(&athlete.weight_kg));
        assert!((145.0..=205.0).contains(&athlete.height_cm));
    }

    #[test]
    fn test_negative_std_rejected() {
        let config = AthleteGenConfig {
            weight_std: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            AthleteGenerator::with_config(&config),
            Err(GeneratorError::Spread {
                field: "weight",
                ..
            })
        ));
    }

    #[test]
    fn test_nan_height_std_rejected() {
        let config = AthleteGenConfig {
            height_std: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            AthleteGenerator::with_config(&config),
            Err(GeneratorError::Spread {
                field: "height",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_std_is_constant() {
        let config = AthleteGenConfig {
            weight_std: 0.0,
            height_std: 0.0,
            ..Default::default()
        };
        let athlete_gen = AthleteGenerator::with_config(&config).unwrap();
        let athlete = athlete_gen.generate(&mut rand::thread_rng());
        assert_eq!(athlete.weight_kg, 70.0);
        assert_eq!(athlete.height_cm, 172.0);
    }
}
