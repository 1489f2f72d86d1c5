// Copyright (c) 2025 - Cowboy AI, Inc.
//! Region Entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment region offered by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub location: String,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Collection of regions with membership lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Regions(Vec<Region>);

impl Regions {
    pub fn new(regions: Vec<Region>) -> Self {
        Self(regions)
    }

    /// Whether a region with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|region| region.name == name)
    }

    /// Project the region names
    pub fn to_string_vec(&self) -> Vec<String> {
        self.0.iter().map(|region| region.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Region>> for Regions {
    fn from(regions: Vec<Region>) -> Self {
        Self(regions)
    }
}
