// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remote ↔ Domain Adapter
//!
//! Total translation between the wire shapes of [`crate::sdk::model`] and
//! the domain entities of [`crate::domain`]. Every enumerated value
//! received from the remote is parsed through the domain enums and
//! rejected if unknown; every structural id is parsed as a UUID; every
//! nullable primitive is flattened to an `Option`.
//!
//! Converters never fetch data: embedded aggregates are converted
//! recursively from the payload given, and composition across endpoints is
//! the service layer's job.
//!
//! Failures are wrapped with the converting operation's name so a wire
//! payload that fails to translate points at the offending sub-object
//! (`convert_instance: convert_contract: …`).

mod to_domain;
mod to_sdk;

pub use to_domain::{
    auto_scaling_group_from_details, auto_scaling_group_from_summary, contract_from,
    image_from_details, image_from_summary, instance_from_details, instance_from_summary,
    instance_types_from, ip_from_details, ip_from_summary, load_balancer_from_details,
    load_balancer_from_summary, prices_from, regions_from,
};
pub use to_sdk::{to_launch_instance_request, to_update_instance_request};

use thiserror::Error;

use crate::domain::ValidationError;

/// Conversion failure, naming the operation that rejected the payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A field of the payload failed domain validation
    #[error("{operation}: {source}")]
    Validation {
        operation: &'static str,
        #[source]
        source: ValidationError,
    },

    /// An embedded object failed to convert
    #[error("{operation}: {source}")]
    Nested {
        operation: &'static str,
        #[source]
        source: Box<AdapterError>,
    },
}

impl AdapterError {
    pub(crate) fn validation(
        operation: &'static str,
        source: impl Into<ValidationError>,
    ) -> Self {
        Self::Validation {
            operation,
            source: source.into(),
        }
    }

    pub(crate) fn nested(operation: &'static str, source: AdapterError) -> Self {
        Self::Nested {
            operation,
            source: Box::new(source),
        }
    }

    /// Name of the outermost converting operation
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Validation { operation, .. } | Self::Nested { operation, .. } => operation,
        }
    }
}
