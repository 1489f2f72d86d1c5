// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Type Value Object
//!
//! Instance types are catalog names (`lsw.m3.large`, `lsw.c3.4xlarge`, …)
//! identifying a hardware class. The set of valid names is owned by the
//! remote API, so the validating constructor takes an allow-list; the
//! unvalidated constructor exists for values materialised from server
//! payloads, where the allow-list is not known yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Instance type validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstanceTypeError {
    #[error("instance type {0:?} is not allowed")]
    NotAllowed(String),
}

/// Catalog name identifying a hardware class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceType(String);

impl InstanceType {
    /// Create an instance type, checking the name against an allow-list
    pub fn new(
        name: impl Into<String>,
        allowed: &InstanceTypes,
    ) -> Result<Self, InstanceTypeError> {
        let name = name.into();
        if !allowed.contains(&name) {
            return Err(InstanceTypeError::NotAllowed(name));
        }
        Ok(Self(name))
    }

    /// Create an instance type without an allow-list check.
    ///
    /// Used when materialising entities from server data, where the server
    /// is the authority on valid names.
    pub fn new_unvalidated(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the catalog name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for InstanceType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Collection of instance types, typically the allowed target types for an
/// existing instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceTypes(Vec<InstanceType>);

impl InstanceTypes {
    pub fn new(types: Vec<InstanceType>) -> Self {
        Self(types)
    }

    /// Whether the collection holds a type with the given name
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t.as_str() == name)
    }

    /// Project the catalog names
    pub fn to_string_vec(&self) -> Vec<String> {
        self.0.iter().map(|t| t.as_str().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstanceType> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<InstanceType>> for InstanceTypes {
    fn from(types: Vec<InstanceType>) -> Self {
        Self(types)
    }
}
