//! Package sources for the report binary.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::models::SensorPackage;

/// The three packages the sensor unit ships with as a demo.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Reads a JSON array of packages, e.g.
/// `[{"workout_type": "RUN", "data": [15000, 1, 75]}]`.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<SensorPackage>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&raw)?;
    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
