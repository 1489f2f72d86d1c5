// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Identifier Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Uuid validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    #[error("cannot convert value {0} to UUID")]
    CouldNotConvert(String),
}

/// Opaque resource identifier handed out by the remote API.
///
/// Wraps a 128-bit UUID. Constructed either by parsing the canonical
/// hyphenated form or by generating a fresh random identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// Parse a canonical UUID string
    pub fn new(value: &str) -> Result<Self, UuidError> {
        uuid::Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| UuidError::CouldNotConvert(value.to_string()))
    }

    /// Generate a fresh random (v4) identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl TryFrom<&str> for Uuid {
    type Error = UuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
