// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hardware Resources Entity

use serde::{Deserialize, Serialize};

/// CPU allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub value: i64,
    pub unit: String,
}

/// Memory allocation. The remote API reports fractional sizes, so the value
/// is a 64-bit float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub value: f64,
    pub unit: String,
}

/// Network throughput on one side of the instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpeed {
    pub value: i64,
    pub unit: String,
}

/// Hardware allocated to an instance or load balancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}
