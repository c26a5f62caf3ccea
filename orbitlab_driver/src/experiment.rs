//! Experiment runner - drives one emulation lifecycle end to end.

use crate::settings::ExperimentSettings;
use crate::topology;
use orbitlab_env::{EmuError, EmulationBackend, ExperimentConfig};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by the driver before or during a run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Requested constellation size is not a positive count
    #[error("Satellite count must be at least 1, got {0}")]
    InvalidSatCount(i64),

    /// Settings describe a constellation with no orbital planes
    #[error("Orbital plane count must be at least 1")]
    NoOrbitalPlanes,

    /// The emulation backend rejected the config or failed mid-lifecycle
    #[error(transparent)]
    Emu(#[from] EmuError),
}

/// Results from one completed emulation run.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Satellite count that was requested
    pub sat_count: u64,

    /// Derived per-plane satellite count handed to the emulator
    pub sats_per_orbit: u64,

    /// Wall-clock time from session construction through emulation stop
    pub elapsed: Duration,
}

/// One configured emulation experiment.
#[derive(Debug)]
pub struct Experiment {
    settings: ExperimentSettings,
    sat_count: u64,
}

impl Experiment {
    /// Creates an experiment for the requested constellation size.
    ///
    /// Zero and negative counts are rejected here: the backend's behavior
    /// on an empty constellation is undefined, so they never reach it.
    pub fn new(settings: ExperimentSettings, sat_count: i64) -> Result<Self, DriverError> {
        if sat_count < 1 {
            return Err(DriverError::InvalidSatCount(sat_count));
        }
        if settings.orbital_planes == 0 {
            return Err(DriverError::NoOrbitalPlanes);
        }
        Ok(Self {
            settings,
            sat_count: sat_count as u64,
        })
    }

    /// Runs the full lifecycle against the given backend.
    ///
    /// The five stage calls are strictly ordered, each blocking until the
    /// emulator finishes. The first failure aborts the run; no cleanup of
    /// earlier stages is attempted. Elapsed time is measured from
    /// immediately before session construction to immediately after
    /// emulation stop.
    pub fn run(&self, backend: &dyn EmulationBackend) -> Result<ExperimentReport, DriverError> {
        let sats_per_orbit = topology::sats_per_orbit(self.sat_count, self.settings.orbital_planes);
        let config = ExperimentConfig::new(
            self.settings.configuration_file.clone(),
            self.settings.ground_stations.clone(),
            self.settings.hello_interval_secs,
            sats_per_orbit,
        )?;

        info!(
            "Emulating {} satellites: {} per orbit across {} planes, {} ground stations",
            self.sat_count,
            sats_per_orbit,
            self.settings.orbital_planes,
            config.ground_stations.len(),
        );

        let start = Instant::now();
        let mut session = backend.open_session(&config)?;

        debug!("Creating nodes");
        session.create_nodes()?;
        debug!("Creating links");
        session.create_links()?;
        debug!("Starting routing daemon");
        session.run_routing_daemon()?;
        debug!("Starting emulation window");
        session.start_emulation()?;
        debug!("Stopping emulation");
        session.stop_emulation()?;

        let elapsed = start.elapsed();
        info!("Emulation lifecycle complete in {:.3}s", elapsed.as_secs_f64());

        Ok(ExperimentReport {
            sat_count: self.sat_count,
            sats_per_orbit,
            elapsed,
        })
    }
}
