//! Maps a package tag to its workout kind and binds the positional readings.

use tracing::{debug, warn};

use crate::errors::{Result, WorkoutError};
use crate::models::{SensorPackage, WorkoutKind};
use crate::training::{Running, Session, SportsWalking, Swimming, Workout};

/// Tags understood by the sensor unit.
pub static TRAINING_TYPES: [(&str, WorkoutKind); 3] = [
    ("RUN", WorkoutKind::Running),
    ("WLK", WorkoutKind::SportsWalking),
    ("SWM", WorkoutKind::Swimming),
];

pub fn lookup(tag: &str) -> Option<WorkoutKind> {
    TRAINING_TYPES
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, kind)| *kind)
}

/// Builds the workout context for `tag` from readings in sensor order.
///
/// Readings are bound as:
/// - `RUN`: steps, duration (h), weight (kg)
/// - `WLK`: steps, duration (h), weight (kg), height (cm)
/// - `SWM`: strokes, duration (h), weight (kg), pool length (m), pool count
pub fn resolve(tag: &str, readings: &[f64]) -> Result<Workout> {
    let Some(kind) = lookup(tag) else {
        warn!("Unknown training type: {tag}");
        return Err(WorkoutError::UnknownWorkoutType {
            tag: tag.to_string(),
        });
    };

    if readings.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: readings.len(),
        });
    }

    let session = Session::new(count("action", readings[0])?, readings[1], readings[2])?;
    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::new(session)),
        WorkoutKind::SportsWalking => {
            Workout::SportsWalking(SportsWalking::new(session, readings[3])?)
        }
        WorkoutKind::Swimming => Workout::Swimming(Swimming::new(
            session,
            readings[3],
            count("pool_count", readings[4])?,
        )),
    };

    debug!(%kind, ?readings, "resolved training package");
    Ok(workout)
}

pub fn read_package(package: &SensorPackage) -> Result<Workout> {
    resolve(&package.workout_type, &package.data)
}

/// Counters arrive as numbers but must be whole and non-negative.
fn count(field: &'static str, value: f64) -> Result<u32> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::invalid(field, value))
    }
}
