//! OrbitLab Experiment Driver
//!
//! Translates a command-line satellite count into one LEO-constellation
//! emulation run against an external emulation backend.
//!
//! # Flow
//!
//! ```text
//! CLI argument
//!   → validated satellite count
//!   → sats_per_orbit = ceil(count / orbital_planes)
//!   → ExperimentConfig (topology file, ground stations, hello interval)
//!   → five ordered lifecycle calls on the backend session
//!   → elapsed-seconds report
//! ```
//!
//! The driver owns no emulation logic. Orbital mechanics, link-state
//! computation, and routing-daemon orchestration all live behind the
//! [`orbitlab_env::EmulationBackend`] seam; the driver is configuration
//! assembly plus a strictly sequential lifecycle with a wall-clock
//! measurement around it.

pub mod cli;
mod experiment;
mod settings;
mod topology;

pub use experiment::{DriverError, Experiment, ExperimentReport};
pub use settings::{ExperimentSettings, SettingsError, DEFAULT_ORBITAL_PLANES};
pub use topology::sats_per_orbit;
