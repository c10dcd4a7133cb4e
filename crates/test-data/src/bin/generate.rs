//! Prints generated sensor packages as JSON.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin generate [count] [seed] [recreational|club|elite] > packages.json
//! cargo run -p workouts --bin workout-report packages.json
//! ```

use anyhow::Context as _;
use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GeneratorConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(count) = args.next() {
        config.package_count = count.parse().context("count must be a number")?;
    }
    if let Some(seed) = args.next() {
        config.seed = seed.parse().context("seed must be a number")?;
    }
    if let Some(level) = args.next() {
        config.level = level.parse()?;
    }

    let package_gen = PackageGenerator::with_config(config)?;
    let config = package_gen.config();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let packages = package_gen.generate_batch(config.package_count, &mut rng);

    println!("{}", serde_json::to_string_pretty(&packages)?);
    tracing::info!(
        "Generated {} {:?} packages (seed {})",
        packages.len(),
        config.level,
        config.seed
    );

    Ok(())
}
