//! Production backend driving an external emulator program.

use crate::config::ExperimentConfig;
use crate::error::EmuError;
use crate::session::{EmulationBackend, EmulationSession, LifecycleStage};
use std::path::PathBuf;
use std::process::Command;

/// Drives an emulator binary through blocking subprocess calls.
///
/// Each lifecycle stage becomes one invocation of the configured program
/// with the stage name as the subcommand and the experiment configuration
/// passed as flags. The emulator keeps all run state on its side (the
/// containers and namespaces it manages); this handle only carries what is
/// needed to issue the next call.
pub struct CommandBackend {
    program: PathBuf,
}

impl CommandBackend {
    /// Creates a backend around the given emulator program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl EmulationBackend for CommandBackend {
    fn open_session(&self, config: &ExperimentConfig) -> Result<Box<dyn EmulationSession>, EmuError> {
        Ok(Box::new(CommandSession {
            program: self.program.clone(),
            args: config_args(config),
        }))
    }
}

/// Flag rendering of an [`ExperimentConfig`], shared by every stage call.
fn config_args(config: &ExperimentConfig) -> Vec<String> {
    let mut args = vec![
        "--config".to_string(),
        config.configuration_file.display().to_string(),
        "--hello-interval".to_string(),
        config.hello_interval_secs.to_string(),
        "--sats-per-orbit".to_string(),
        config.sats_per_orbit.to_string(),
    ];
    for gs in &config.ground_stations {
        args.push("--ground-station".to_string());
        args.push(format!("{},{}", gs.lat_deg, gs.lon_deg));
    }
    args
}

struct CommandSession {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSession {
    /// Runs one stage subcommand and blocks until it exits.
    fn invoke(&self, stage: LifecycleStage) -> Result<(), EmuError> {
        let status = Command::new(&self.program)
            .arg(stage.name())
            .args(&self.args)
            .status()
            .map_err(|source| EmuError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(EmuError::lifecycle(
                stage,
                format!("emulator exited with {status}"),
            ))
        }
    }
}

impl EmulationSession for CommandSession {
    fn create_nodes(&mut self) -> Result<(), EmuError> {
        self.invoke(LifecycleStage::CreateNodes)
    }

    fn create_links(&mut self) -> Result<(), EmuError> {
        self.invoke(LifecycleStage::CreateLinks)
    }

    fn run_routing_daemon(&mut self) -> Result<(), EmuError> {
        self.invoke(LifecycleStage::RunRoutingDaemon)
    }

    fn start_emulation(&mut self) -> Result<(), EmuError> {
        self.invoke(LifecycleStage::StartEmulation)
    }

    fn stop_emulation(&mut self) -> Result<(), EmuError> {
        self.invoke(LifecycleStage::StopEmulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroundStation;

    fn sample_config() -> ExperimentConfig {
        ExperimentConfig::new(
            "./config.json",
            vec![
                GroundStation::new(50.002352, 5.148141),
                GroundStation::new(32.500649, -106.608803),
            ],
            1,
            3,
        )
        .unwrap()
    }

    #[test]
    fn renders_config_as_flags() {
        let args = config_args(&sample_config());
        assert_eq!(
            args,
            vec![
                "--config",
                "./config.json",
                "--hello-interval",
                "1",
                "--sats-per-orbit",
                "3",
                "--ground-station",
                "50.002352,5.148141",
                "--ground-station",
                "32.500649,-106.608803",
            ]
        );
    }

    #[test]
    fn missing_emulator_reports_launch_error() {
        let backend = CommandBackend::new("/nonexistent/orbitlab-emulator");
        let mut session = backend.open_session(&sample_config()).unwrap();
        let err = session.create_nodes().unwrap_err();
        assert!(matches!(err, EmuError::Launch { .. }));
    }
}
