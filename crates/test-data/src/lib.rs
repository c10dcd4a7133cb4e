//! Test data generation for workouts.
//!
//! This crate generates realistic athletes and the sensor packages they would
//! produce, to drive property tests and manual checks of the report binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use test_data::prelude::*;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let packages = PackageGenerator::new()?.generate_batch(10, &mut rng);
//! for package in &packages {
//!     println!("{}", workouts::compute_report(&package.workout_type, &package.data)?);
//! }
//! ```

use thiserror::Error;

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::{SensorPackage, WorkoutKind};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Invalid {field} spread: {value}")]
    Spread { field: &'static str, value: f64 },

    #[error("Invalid duration range: {min}..{max} h")]
    DurationRange { min: f64, max: f64 },

    #[error("Invalid pool length: {0} m")]
    PoolLength(f64),

    #[error("Unknown athlete level: {0}")]
    UnknownLevel(String),
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{AthleteLevel, GeneratorConfig};
    pub use crate::generators::{
        AthleteGenConfig, AthleteGenerator, GeneratedAthlete, PackageGenerator,
    };
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{GeneratorError, SensorPackage, WorkoutKind};
}
