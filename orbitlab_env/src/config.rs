//! Experiment configuration consumed by the emulation backend.

use crate::error::EmuError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lowest hello interval the emulated routing protocol accepts, in seconds.
pub const HELLO_INTERVAL_MIN: u32 = 1;

/// Highest hello interval the emulated routing protocol accepts, in seconds.
pub const HELLO_INTERVAL_MAX: u32 = 200;

/// A fixed-location terrestrial satellite-communication facility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundStation {
    /// Latitude in degrees, positive north
    pub lat_deg: f64,
    /// Longitude in degrees, positive east
    pub lon_deg: f64,
}

impl GroundStation {
    /// Creates a ground station at the given coordinates.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Everything the backend needs for one emulation run.
///
/// Validated on construction so that out-of-range values never reach the
/// emulator, whose behavior on them is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Path to the topology description file. Opaque to the driver; the
    /// backend owns its schema.
    pub configuration_file: PathBuf,

    /// Ground stations to attach to the constellation
    pub ground_stations: Vec<GroundStation>,

    /// Routing-protocol hello interval in seconds (1-200)
    pub hello_interval_secs: u32,

    /// Override for the number of satellites per orbital plane
    pub sats_per_orbit: u64,
}

impl ExperimentConfig {
    /// Builds a config, rejecting values the emulator does not accept.
    pub fn new(
        configuration_file: impl Into<PathBuf>,
        ground_stations: Vec<GroundStation>,
        hello_interval_secs: u32,
        sats_per_orbit: u64,
    ) -> Result<Self, EmuError> {
        if !(HELLO_INTERVAL_MIN..=HELLO_INTERVAL_MAX).contains(&hello_interval_secs) {
            return Err(EmuError::invalid_config(format!(
                "hello interval must be {HELLO_INTERVAL_MIN}-{HELLO_INTERVAL_MAX} seconds, got {hello_interval_secs}"
            )));
        }
        if sats_per_orbit == 0 {
            return Err(EmuError::invalid_config(
                "satellites per orbit must be at least 1",
            ));
        }
        Ok(Self {
            configuration_file: configuration_file.into(),
            ground_stations,
            hello_interval_secs,
            sats_per_orbit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<GroundStation> {
        vec![
            GroundStation::new(50.002352, 5.148141),
            GroundStation::new(32.500649, -106.608803),
        ]
    }

    #[test]
    fn accepts_hello_interval_bounds() {
        assert!(ExperimentConfig::new("./config.json", stations(), 1, 3).is_ok());
        assert!(ExperimentConfig::new("./config.json", stations(), 200, 3).is_ok());
    }

    #[test]
    fn rejects_hello_interval_out_of_range() {
        let low = ExperimentConfig::new("./config.json", stations(), 0, 3);
        let high = ExperimentConfig::new("./config.json", stations(), 201, 3);
        assert!(matches!(low, Err(EmuError::InvalidConfig(_))));
        assert!(matches!(high, Err(EmuError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_sats_per_orbit() {
        let config = ExperimentConfig::new("./config.json", stations(), 1, 0);
        assert!(matches!(config, Err(EmuError::InvalidConfig(_))));
    }
}
