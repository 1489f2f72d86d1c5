// Copyright (c) 2025 - Cowboy AI, Inc.
//! IP Address Entity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::EnumError;

/// Which network an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkType {
    Internal,
    Public,
}

impl NetworkType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "INTERNAL",
            Self::Public => "PUBLIC",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "INTERNAL" => Ok(Self::Internal),
            "PUBLIC" => Ok(Self::Public),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// DDoS mitigation settings attached to an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ddos {
    pub detection_profile: String,
    pub protection_type: String,
}

/// Address assigned to an instance or load balancer.
///
/// A null-routed address is one the provider has administratively dropped
/// traffic to as part of DDoS mitigation. `reverse_lookup` and `ddos` are
/// only delivered by detail endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ip {
    pub ip: String,
    pub prefix_length: i64,
    pub version: i64,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: NetworkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_lookup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddos: Option<Ddos>,
}
