// Copyright (c) 2025 - Cowboy AI, Inc.
//! Auto-Scaling Group Entity
//!
//! Controls how many instances run, based on a schedule or CPU load, and
//! may own a load balancer. The load balancer is owned by value: the
//! summary embedded in an instance payload carries none, and the service
//! layer substitutes the detail fetched from the dedicated endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::load_balancer::LoadBalancer;
use super::region::Region;
use super::state::State;
use super::uuid::Uuid;
use super::validation::EnumError;

/// Reference validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("reference can only be 255 characters long")]
    TooLong,
}

/// Customer-chosen label on an auto-scaling group.
///
/// # Invariants
/// - At most 255 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutoScalingGroupReference(String);

impl AutoScalingGroupReference {
    /// Maximum reference length in characters
    pub const MAX_LENGTH: usize = 255;

    /// Create a new reference with validation
    pub fn new(value: impl Into<String>) -> Result<Self, ReferenceError> {
        let value = value.into();
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(ReferenceError::TooLong);
        }
        Ok(Self(value))
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AutoScalingGroupReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for AutoScalingGroupReference {
    type Error = ReferenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Scaling policy of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoScalingGroupType {
    Manual,
    Scheduled,
    CpuBased,
}

impl AutoScalingGroupType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "MANUAL",
            Self::Scheduled => "SCHEDULED",
            Self::CpuBased => "CPU_BASED",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "MANUAL" => Ok(Self::Manual),
            "SCHEDULED" => Ok(Self::Scheduled),
            "CPU_BASED" => Ok(Self::CpuBased),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for AutoScalingGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scaling policy object controlling the instance count of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScalingGroup {
    pub id: Uuid,
    pub group_type: AutoScalingGroupType,
    pub state: State,
    pub region: Region,
    pub reference: AutoScalingGroupReference,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmup_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<LoadBalancer>,
}
