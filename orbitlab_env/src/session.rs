//! The lifecycle contract between the driver and the emulator.

use crate::config::ExperimentConfig;
use crate::error::EmuError;
use std::fmt;

/// One step of the fixed emulation lifecycle.
///
/// The driver invokes the stages strictly in declaration order; each stage
/// is a precondition for the next, with no retry or skip path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStage {
    /// Instantiate the satellite and ground-station nodes
    CreateNodes,
    /// Establish inter-satellite and ground-station links
    CreateLinks,
    /// Start the OSPF-like routing daemon on every node
    RunRoutingDaemon,
    /// Begin the emulation window
    StartEmulation,
    /// End the emulation window and tear the run down
    StopEmulation,
}

impl LifecycleStage {
    /// All stages in invocation order.
    pub fn all() -> [LifecycleStage; 5] {
        [
            Self::CreateNodes,
            Self::CreateLinks,
            Self::RunRoutingDaemon,
            Self::StartEmulation,
            Self::StopEmulation,
        ]
    }

    /// Stable machine-readable name, also used as the emulator subcommand.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateNodes => "create-nodes",
            Self::CreateLinks => "create-links",
            Self::RunRoutingDaemon => "run-routing-daemon",
            Self::StartEmulation => "start-emulation",
            Self::StopEmulation => "stop-emulation",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One running emulation instance.
///
/// The handle is opaque: the driver never inspects backend state, it only
/// drives the five ordered transitions. Every method blocks the calling
/// thread until the emulator completes (or fails) internally.
pub trait EmulationSession {
    /// Instantiates the satellite constellation and ground-station nodes.
    fn create_nodes(&mut self) -> Result<(), EmuError>;

    /// Establishes inter-satellite and satellite-to-ground links.
    ///
    /// Nodes created by a preceding `create_nodes` are not torn down if
    /// this fails.
    fn create_links(&mut self) -> Result<(), EmuError>;

    /// Starts the routing daemon on every emulated node.
    fn run_routing_daemon(&mut self) -> Result<(), EmuError>;

    /// Runs the emulation window. Returns once the window has elapsed.
    fn start_emulation(&mut self) -> Result<(), EmuError>;

    /// Stops the emulation and releases backend resources.
    fn stop_emulation(&mut self) -> Result<(), EmuError>;
}

/// Constructor seam for emulation sessions.
///
/// # Implementations
///
/// - **Production**: [`crate::CommandBackend`] - drives an external
///   emulator program, one blocking subprocess per lifecycle stage
/// - **Tests**: recording mocks that capture the invocation order
pub trait EmulationBackend {
    /// Opens a session for one emulation run.
    ///
    /// The configuration is consumed as-is; the backend owns all further
    /// interpretation (including the topology file the config points at).
    fn open_session(&self, config: &ExperimentConfig) -> Result<Box<dyn EmulationSession>, EmuError>;
}
