// Copyright (c) 2025 - Cowboy AI, Inc.
//! Aggregated Domain Validation Errors
//!
//! Every value object and entity constructor reports its own error type;
//! this module sums them so the adapter layer can wrap any domain
//! construction failure behind a single source type.

use thiserror::Error;

use super::auto_scaling_group::ReferenceError;
use super::contract::ContractError;
use super::image::ImageError;
use super::instance_type::InstanceTypeError;
use super::root_disk::RootDiskSizeError;
use super::ssh_key::SshKeyError;
use super::uuid::UuidError;

/// Closed-enum lookup error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnumError {
    #[error("cannot find enum for value {0}")]
    CannotFindEnumForValue(String),
}

impl EnumError {
    pub(crate) fn cannot_find(value: impl ToString) -> Self {
        Self::CannotFindEnumForValue(value.to_string())
    }
}

/// Validation result with detailed error information
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Union of every domain validation failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Uuid(#[from] UuidError),

    #[error(transparent)]
    SshKey(#[from] SshKeyError),

    #[error(transparent)]
    RootDiskSize(#[from] RootDiskSizeError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    InstanceType(#[from] InstanceTypeError),

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_error_message() {
        let err = EnumError::cannot_find("BOGUS");
        assert_eq!(err.to_string(), "cannot find enum for value BOGUS");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: ValidationError = UuidError::CouldNotConvert("tralala".to_string()).into();
        assert_eq!(err.to_string(), "cannot convert value tralala to UUID");
    }
}
