//! Sensor package generation.

use rand::Rng;
use tracing::debug;
use workouts::{SensorPackage, WorkoutKind};

use crate::GeneratorError;
use crate::config::{AthleteLevel, GeneratorConfig};
use crate::generators::AthleteGenerator;
use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
};

/// Generates sensor packages the way the sensor unit would send them.
pub struct PackageGenerator {
    config: GeneratorConfig,
    athletes: AthleteGenerator,
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl PackageGenerator {
    /// Creates a new package generator with default configuration.
    pub fn new() -> Result<Self, GeneratorError> {
        Self::with_config(GeneratorConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let (min, max) = config.duration_hours;
        if !(min > 0.0 && min < max) {
            return Err(GeneratorError::DurationRange { min, max });
        }
        // Lap counts are distance / pool length.
        if !(config.pool_length_m.is_finite() && config.pool_length_m > 0.0) {
            return Err(GeneratorError::PoolLength(config.pool_length_m));
        }

        let (runner, walker, swimmer) = match config.level {
            AthleteLevel::Recreational => (
                RunnerProfile::recreational(),
                WalkerProfile::leisurely(),
                SwimmerProfile::beginner(),
            ),
            AthleteLevel::Club => (
                RunnerProfile::default(),
                WalkerProfile::default(),
                SwimmerProfile::default(),
            ),
            AthleteLevel::Elite => (
                RunnerProfile::elite(),
                WalkerProfile::competitive(),
                SwimmerProfile::masters(),
            ),
        };

        Ok(Self {
            athletes: AthleteGenerator::with_config(&config.athlete)?,
            swimmer: swimmer.in_pool(config.pool_length_m),
            runner,
            walker,
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn profile(&self, kind: WorkoutKind) -> &dyn AthleteProfile {
        match kind {
            WorkoutKind::Running => &self.runner,
            WorkoutKind::SportsWalking => &self.walker,
            WorkoutKind::Swimming => &self.swimmer,
        }
    }

    /// Generates a single package of the given kind.
    pub fn generate(&self, kind: WorkoutKind, rng: &mut impl Rng) -> SensorPackage {
        let profile = self.profile(kind);
        let athlete = self.athletes.generate(rng);
        let (min, max) = self.config.duration_hours;
        let duration_hours = rng.gen_range(min..max);
        let speed_mps = profile.base_speed_mps() * sample_variance(profile, rng);

        let readings = profile.readings(&athlete, duration_hours, speed_mps);
        debug!(%kind, ?readings, "generated package");
        SensorPackage::new(kind.tag(), readings)
    }

    /// Generates `count` packages with kinds chosen uniformly.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<SensorPackage> {
        (0..count)
            .map(|_| {
                let kind = WorkoutKind::ALL[rng.gen_range(0..WorkoutKind::ALL.len())];
                self.generate(kind, rng)
            })
            .collect()
    }
}
