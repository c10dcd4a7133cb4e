//! Distance, speed and calorie reports from workout sensor packages.
//!
//! The sensor unit sends a three-letter tag and a list of readings. The tag
//! picks the workout kind, the readings are bound in a fixed order, and the
//! kind's formula set produces a one-line summary.
//!
//! ```rust
//! let line = workouts::compute_report("RUN", &[15000.0, 1.0, 75.0])?;
//! assert!(line.starts_with("Тип тренировки: Running;"));
//! # Ok::<(), workouts::WorkoutError>(())
//! ```

pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod report;
pub mod training;

pub use dispatcher::{read_package, resolve};
pub use errors::{Result, WorkoutError};
pub use models::{SensorPackage, WorkoutKind};
pub use report::InfoMessage;
pub use training::{Training, Workout};

/// Resolves the package and renders its report line.
pub fn compute_report(tag: &str, readings: &[f64]) -> Result<String> {
    let workout = resolve(tag, readings)?;
    Ok(report::format(&workout.show_training_info()))
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::compute_report;
    pub use crate::config::{load_packages, sample_packages};
    pub use crate::dispatcher::{TRAINING_TYPES, read_package, resolve};
    pub use crate::errors::WorkoutError;
    pub use crate::models::{SensorPackage, WorkoutKind};
    pub use crate::report::InfoMessage;
    pub use crate::training::{Running, Session, SportsWalking, Swimming, Training, Workout};
}
