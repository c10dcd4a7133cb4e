use thiserror::Error;

use crate::models::WorkoutKind;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown training type: {tag}")]
    UnknownWorkoutType { tag: String },

    #[error("{kind} expects {expected} readings, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid measurement for {field}: {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Package file error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkoutError {
    pub(crate) fn invalid(field: &'static str, value: f64) -> Self {
        WorkoutError::InvalidMeasurement { field, value }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
