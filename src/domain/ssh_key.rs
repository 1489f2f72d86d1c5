// Copyright (c) 2025 - Cowboy AI, Inc.
//! SSH Public Key Value Object

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Accepted key grammar: a known key-type prefix, whitespace, the base64
/// payload (standard padding) and an optional printable comment.
static SSH_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:ssh-dss|ecdsa-sha2-nistp256|ssh-ed25519|ssh-rsa)\s+[A-Za-z0-9+/]+={0,2}(?:\s+[[:print:]]+)?$",
    )
    .expect("ssh key pattern is valid")
});

/// SSH key validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SshKeyError {
    #[error("invalid ssh key: {0}")]
    Invalid(String),
}

/// Validated OpenSSH public key.
///
/// # Examples
///
/// ```rust
/// use publiccloud_infrastructure::domain::SshKey;
///
/// let key = SshKey::new("ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABgQ user@host").unwrap();
/// assert!(key.as_str().starts_with("ssh-rsa"));
///
/// assert!(SshKey::new("tralala").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SshKey(String);

impl SshKey {
    /// Create a new SSH key with validation
    pub fn new(value: impl Into<String>) -> Result<Self, SshKeyError> {
        let value = value.into();
        if !SSH_KEY_PATTERN.is_match(&value) {
            return Err(SshKeyError::Invalid(value));
        }
        Ok(Self(value))
    }

    /// Get the key material as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SshKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SshKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SshKey {
    type Error = SshKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
