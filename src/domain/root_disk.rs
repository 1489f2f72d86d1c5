// Copyright (c) 2025 - Cowboy AI, Inc.
//! Root Disk Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::validation::EnumError;

/// Root disk validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RootDiskSizeError {
    #[error("root disk size {0} is too small (minimum is 5 GB)")]
    TooSmall(i64),

    #[error("root disk size {0} is too large (maximum is 1000 GB)")]
    TooLarge(i64),
}

/// Root disk size in gigabytes.
///
/// # Invariants
/// - 5 ≤ value ≤ 1000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootDiskSize(i64);

impl RootDiskSize {
    /// Minimum root disk size in GB
    pub const MIN: i64 = 5;

    /// Maximum root disk size in GB
    pub const MAX: i64 = 1000;

    /// Create a new root disk size with validation
    pub fn new(value: i64) -> Result<Self, RootDiskSizeError> {
        if value < Self::MIN {
            return Err(RootDiskSizeError::TooSmall(value));
        }
        if value > Self::MAX {
            return Err(RootDiskSizeError::TooLarge(value));
        }
        Ok(Self(value))
    }

    /// Size in gigabytes
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RootDiskSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the OS disk lives: on the host or on networked storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RootDiskStorageType {
    Local,
    Central,
}

impl RootDiskStorageType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Central => "CENTRAL",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "LOCAL" => Ok(Self::Local),
            "CENTRAL" => Ok(Self::Central),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for RootDiskStorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
