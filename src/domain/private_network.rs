// Copyright (c) 2025 - Cowboy AI, Inc.
//! Private Network Attachment

use serde::{Deserialize, Serialize};

/// Private network an instance or load balancer is attached to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateNetwork {
    pub id: String,
    pub status: String,
    pub subnet: String,
}
