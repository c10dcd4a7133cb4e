//! Prints one report line per sensor package.
//!
//! Run with:
//! ```
//! cargo run -p workouts --bin workout-report [packages.json]
//! ```
//!
//! Without an argument the built-in sample packages are reported.

use std::env;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::config::{load_packages, sample_packages};
use workouts::{read_package, report};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let packages = match env::args().nth(1) {
        Some(path) => {
            load_packages(&path).with_context(|| format!("Failed to load packages from {path}"))?
        }
        None => sample_packages(),
    };

    for package in &packages {
        let workout = read_package(package)
            .with_context(|| format!("Failed to read {} package", package.workout_type))?;
        println!("{}", report::format(&workout.show_training_info()));
    }

    tracing::debug!("Reported {} workouts", packages.len());

    Ok(())
}
