//! Entity generators for test data.
//!
//! - [`AthleteGenerator`]: Generate athletes with body measurements
//! - [`PackageGenerator`]: Generate sensor packages from athlete profiles

pub mod athlete;
pub mod package;

pub use athlete::{AthleteGenConfig, AthleteGenerator, GeneratedAthlete};
pub use package::PackageGenerator;
