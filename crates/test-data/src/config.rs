//! Configuration types for test data generation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GeneratorError;
use crate::generators::AthleteGenConfig;

/// Which profile presets the generator draws speeds from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AthleteLevel {
    /// Slow pace, leisurely walking, beginner swimming.
    Recreational,
    /// Default profiles.
    #[default]
    Club,
    /// Fast pace, competitive race-walking, masters swimming.
    Elite,
}

impl FromStr for AthleteLevel {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recreational" => Ok(AthleteLevel::Recreational),
            "club" => Ok(AthleteLevel::Club),
            "elite" => Ok(AthleteLevel::Elite),
            other => Err(GeneratorError::UnknownLevel(other.to_string())),
        }
    }
}

/// Configuration for package generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// RNG seed, so runs are reproducible.
    pub seed: u64,

    /// Number of packages to generate.
    pub package_count: usize,

    /// Session duration range in hours (min, max).
    pub duration_hours: (f64, f64),

    /// Pool length used for swimming packages.
    pub pool_length_m: f64,

    /// Profile presets to generate with.
    pub level: AthleteLevel,

    /// Body measurement distributions.
    pub athlete: AthleteGenConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            package_count: 10,
            duration_hours: (0.25, 2.0),
            pool_length_m: 25.0,
            level: AthleteLevel::default(),
            athlete: AthleteGenConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!("elite".parse::<AthleteLevel>().unwrap(), AthleteLevel::Elite);
        assert!(matches!(
            "pro".parse::<AthleteLevel>(),
            Err(GeneratorError::UnknownLevel(ref level)) if level == "pro"
        ));
    }

    #[test]
    fn test_level_serde_name() {
        let config: GeneratorConfig = serde_json::from_value(serde_json::json!({
            "seed": 1,
            "package_count": 3,
            "duration_hours": [0.5, 1.0],
            "pool_length_m": 50.0,
            "level": "recreational",
            "athlete": AthleteGenConfig::default(),
        }))
        .unwrap();
        assert_eq!(config.level, AthleteLevel::Recreational);
    }
}
