use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Three-letter code the sensor unit sends for this kind.
    pub const fn tag(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown in the report line.
    pub const fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional readings a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw package as delivered by the sensor unit: a tag plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_per_kind() {
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(WorkoutKind::SportsWalking.to_string(), "SportsWalking");
    }

    #[test]
    fn test_package_from_json() {
        let package: SensorPackage =
            serde_json::from_str(r#"{"workout_type": "RUN", "data": [15000, 1, 75]}"#).unwrap();
        assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
    }
}
