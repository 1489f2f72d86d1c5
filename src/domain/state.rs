// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Lifecycle State

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::EnumError;

/// Lifecycle state reported by the remote API for instances and load
/// balancers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Creating,
    Destroyed,
    Destroying,
    Failed,
    Running,
    Starting,
    Stopped,
    Stopping,
    Unknown,
}

impl State {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Destroyed => "DESTROYED",
            Self::Destroying => "DESTROYING",
            Self::Failed => "FAILED",
            Self::Running => "RUNNING",
            Self::Starting => "STARTING",
            Self::Stopped => "STOPPED",
            Self::Stopping => "STOPPING",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "CREATING" => Ok(Self::Creating),
            "DESTROYED" => Ok(Self::Destroyed),
            "DESTROYING" => Ok(Self::Destroying),
            "FAILED" => Ok(Self::Failed),
            "RUNNING" => Ok(Self::Running),
            "STARTING" => Ok(Self::Starting),
            "STOPPED" => Ok(Self::Stopped),
            "STOPPING" => Ok(Self::Stopping),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(EnumError::cannot_find(value)),
        }
    }

    /// All declared states
    pub fn all() -> &'static [State] {
        &[
            Self::Creating,
            Self::Destroyed,
            Self::Destroying,
            Self::Failed,
            Self::Running,
            Self::Starting,
            Self::Stopped,
            Self::Stopping,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
