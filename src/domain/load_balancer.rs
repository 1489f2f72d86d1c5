// Copyright (c) 2025 - Cowboy AI, Inc.
//! Load Balancer Entity
//!
//! A load balancer fronts the instances of an auto-scaling group. Its
//! configuration (balancing policy, health check, sticky sessions) is only
//! delivered by the detail endpoint; summary payloads embedded in an
//! auto-scaling group leave it unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::contract::Contract;
use super::instance_type::InstanceType;
use super::ip::Ip;
use super::private_network::PrivateNetwork;
use super::region::Region;
use super::resources::Resources;
use super::state::State;
use super::uuid::Uuid;
use super::validation::EnumError;

/// HTTP method used by a health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Method {
    Get,
    Head,
    Post,
    Options,
}

impl Method {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Options => "OPTIONS",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "GET" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            "POST" => Ok(Self::Post),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Balancing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Balance {
    Roundrobin,
    Leastconn,
    Source,
}

impl Balance {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roundrobin => "ROUNDROBIN",
            Self::Leastconn => "LEASTCONN",
            Self::Source => "SOURCE",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "ROUNDROBIN" => Ok(Self::Roundrobin),
            "LEASTCONN" => Ok(Self::Leastconn),
            "SOURCE" => Ok(Self::Source),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Back-end health probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub method: Method,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub port: i64,
}

/// Client-to-backend pinning policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickySession {
    pub enabled: bool,
    pub max_life_time: i64,
}

/// Listener configuration of a load balancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerConfiguration {
    pub balance: Balance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky_session: Option<StickySession>,
    pub x_forwarded_for: bool,
    pub idle_timeout: i64,
    pub target_port: i64,
}

/// Load balancer fronting an auto-scaling group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub id: Uuid,
    pub load_balancer_type: InstanceType,
    pub resources: Resources,
    pub region: Region,
    pub state: State,
    pub contract: Contract,
    pub ips: Vec<Ip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network: Option<PrivateNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<LoadBalancerConfiguration>,
}
