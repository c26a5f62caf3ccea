//! Named experiment settings.
//!
//! Every topology assumption the driver makes is an explicit field here
//! rather than an inline literal, so it is visible and testable without
//! touching the emulator.

use orbitlab_env::GroundStation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Orbital-plane count encoded in the default topology file.
///
/// The total constellation size is `orbital_planes * sats_per_orbit`.
/// The driver does not verify that the topology file actually encodes
/// this many planes; the file is opaque to it.
pub const DEFAULT_ORBITAL_PLANES: u32 = 72;

/// Settings for one emulation experiment.
///
/// [`Default`] reproduces the standard run: a 72-plane constellation
/// described by `./config.json`, two ground stations, and a 1-second
/// hello interval. A JSON settings file may override any subset of
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentSettings {
    /// Topology description consumed by the emulator. Opaque here.
    pub configuration_file: PathBuf,

    /// Ground stations to attach to the constellation
    pub ground_stations: Vec<GroundStation>,

    /// Routing-protocol hello interval in seconds
    pub hello_interval_secs: u32,

    /// Orbital planes assumed to be encoded in the topology file
    pub orbital_planes: u32,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            configuration_file: PathBuf::from("./config.json"),
            ground_stations: vec![
                // ESA Estrack core station in Redu, Belgium
                GroundStation::new(50.002352, 5.148141),
                // NASA Near Space Network station in White Sands, New Mexico
                GroundStation::new(32.500649, -106.608803),
            ],
            hello_interval_secs: 1,
            orbital_planes: DEFAULT_ORBITAL_PLANES,
        }
    }
}

impl ExperimentSettings {
    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses settings from a JSON string. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Errors loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for this schema
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_run() {
        let settings = ExperimentSettings::default();
        assert_eq!(settings.configuration_file, PathBuf::from("./config.json"));
        assert_eq!(settings.orbital_planes, 72);
        assert_eq!(settings.hello_interval_secs, 1);
        assert_eq!(settings.ground_stations.len(), 2);
        assert_eq!(settings.ground_stations[0].lat_deg, 50.002352);
        assert_eq!(settings.ground_stations[1].lon_deg, -106.608803);
    }

    #[test]
    fn json_overrides_subset_of_fields() {
        let settings =
            ExperimentSettings::from_json(r#"{"orbital_planes": 24, "hello_interval_secs": 10}"#)
                .unwrap();
        assert_eq!(settings.orbital_planes, 24);
        assert_eq!(settings.hello_interval_secs, 10);
        // untouched fields keep their defaults
        assert_eq!(settings.configuration_file, PathBuf::from("./config.json"));
        assert_eq!(settings.ground_stations.len(), 2);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(ExperimentSettings::from_json("{not json").is_err());
    }
}
