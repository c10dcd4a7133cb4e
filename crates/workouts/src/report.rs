//! Human-readable workout summary.

use std::fmt;

use serde::Serialize;

use crate::models::WorkoutKind;

/// Computed summary of one workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: WorkoutKind,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type.label(),
            self.duration,
            self.distance,
            self.speed,
            self.calories,
        )
    }
}

pub fn format(report: &InfoMessage) -> String {
    report.get_message()
}
