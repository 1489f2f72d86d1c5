// Copyright (c) 2025 - Cowboy AI, Inc.
//! Attached ISO Image

use serde::{Deserialize, Serialize};

/// ISO currently mounted on an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iso {
    pub id: String,
    pub name: String,
}
