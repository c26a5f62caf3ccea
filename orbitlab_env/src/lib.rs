//! OrbitLab Emulation Backend Abstraction Layer
//!
//! This crate defines the narrow lifecycle contract between the experiment
//! driver and the LEO-network emulator. The emulator itself (orbital
//! mechanics, inter-satellite link computation, routing-daemon
//! orchestration, namespace/container management) lives outside this
//! workspace; the driver only ever talks to it through the traits here.
//!
//! # Lifecycle
//!
//! ```text
//! EmulationBackend::open_session(config)
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ EmulationSession                                         │
//! │   create_nodes → create_links → run_routing_daemon       │
//! │        → start_emulation → stop_emulation                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call blocks until the emulator finishes (or fails) internally.
//! There is no partial-rollback guarantee: if link creation fails after
//! nodes were created, the nodes stay up.

mod command;
mod config;
mod error;
mod session;

pub use command::CommandBackend;
pub use config::{ExperimentConfig, GroundStation, HELLO_INTERVAL_MAX, HELLO_INTERVAL_MIN};
pub use error::EmuError;
pub use session::{EmulationBackend, EmulationSession, LifecycleStage};
