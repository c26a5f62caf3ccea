//! Error types for the emulation backend abstraction.

use crate::session::LifecycleStage;
use thiserror::Error;

/// Errors that can occur at the emulation backend boundary.
#[derive(Debug, Error)]
pub enum EmuError {
    /// Experiment configuration was rejected before reaching the backend
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The emulator could not be launched at all
    #[error("Failed to launch emulator `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A lifecycle operation failed inside the emulator
    #[error("Emulator failed during {stage}: {message}")]
    Lifecycle {
        stage: LifecycleStage,
        message: String,
    },
}

impl EmuError {
    /// Creates a configuration-rejection error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates a lifecycle-stage failure.
    pub fn lifecycle(stage: LifecycleStage, msg: impl Into<String>) -> Self {
        Self::Lifecycle {
            stage,
            message: msg.into(),
        }
    }
}
