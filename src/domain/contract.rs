// Copyright (c) 2025 - Cowboy AI, Inc.
//! Contract Entity with Billing Invariants
//!
//! A contract is the billing attachment on an instance or load balancer.
//! The term interlock is the one cross-field invariant of the domain:
//!
//! - `MONTHLY` contracts must carry a non-zero term
//! - `HOURLY` contracts must carry a zero term
//!
//! The constructor is the final gate for this rule; the plan-time validator
//! re-checks it early so the host can reject a configuration before any
//! remote call is made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::validation::EnumError;

/// Contract validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("contract term cannot be 0 when contract type is MONTHLY")]
    TermCannotBeZero,

    #[error("contract term must be 0 when contract type is HOURLY")]
    TermMustBeZero,
}

/// Billing model of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Hourly,
    Monthly,
}

impl ContractType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "HOURLY",
            Self::Monthly => "MONTHLY",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "HOURLY" => Ok(Self::Hourly),
            "MONTHLY" => Ok(Self::Monthly),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contract term in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ContractTerm {
    Zero,
    One,
    Three,
    Six,
    Twelve,
}

impl ContractTerm {
    /// Term length in months
    pub fn value(&self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }

    /// Look up the term for a month count
    pub fn try_from_value(value: i64) -> Result<Self, EnumError> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl TryFrom<i64> for ContractTerm {
    type Error = EnumError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl From<ContractTerm> for i64 {
    fn from(term: ContractTerm) -> Self {
        term.value()
    }
}

impl fmt::Display for ContractTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Billing frequency in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ContractBillingFrequency {
    Zero,
    One,
    Three,
    Six,
    Twelve,
}

impl ContractBillingFrequency {
    /// Billing interval in months
    pub fn value(&self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }

    /// Look up the billing frequency for a month count
    pub fn try_from_value(value: i64) -> Result<Self, EnumError> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            6 => Ok(Self::Six),
            12 => Ok(Self::Twelve),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl TryFrom<i64> for ContractBillingFrequency {
    type Error = EnumError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

impl From<ContractBillingFrequency> for i64 {
    fn from(frequency: ContractBillingFrequency) -> Self {
        frequency.value()
    }
}

impl fmt::Display for ContractBillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Administrative state of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractState {
    Active,
    DeleteScheduled,
}

impl ContractState {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::DeleteScheduled => "DELETE_SCHEDULED",
        }
    }

    /// Parse from the canonical string representation
    pub fn try_from_str(value: &str) -> Result<Self, EnumError> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "DELETE_SCHEDULED" => Ok(Self::DeleteScheduled),
            _ => Err(EnumError::cannot_find(value)),
        }
    }
}

impl fmt::Display for ContractState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Billing attachment on an instance or load balancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub billing_frequency: ContractBillingFrequency,
    pub term: ContractTerm,
    pub contract_type: ContractType,
    pub state: ContractState,
    pub created_at: DateTime<Utc>,
    pub renewals_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Contract {
    /// Create a new contract with validation
    ///
    /// # Invariants
    /// - MONTHLY contracts must have a non-zero term
    /// - HOURLY contracts must have a zero term
    pub fn new(
        billing_frequency: ContractBillingFrequency,
        term: ContractTerm,
        contract_type: ContractType,
        state: ContractState,
        created_at: DateTime<Utc>,
        renewals_at: DateTime<Utc>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ContractError> {
        Self::validate_term(term, contract_type)?;

        Ok(Self {
            billing_frequency,
            term,
            contract_type,
            state,
            created_at,
            renewals_at,
            ends_at,
        })
    }

    /// Check the term interlock without constructing a contract.
    ///
    /// Shared with the plan-time validator so the host rejects an invalid
    /// combination before any remote call.
    pub fn validate_term(
        term: ContractTerm,
        contract_type: ContractType,
    ) -> Result<(), ContractError> {
        match contract_type {
            ContractType::Monthly if term == ContractTerm::Zero => {
                Err(ContractError::TermCannotBeZero)
            }
            ContractType::Hourly if term != ContractTerm::Zero => {
                Err(ContractError::TermMustBeZero)
            }
            _ => Ok(()),
        }
    }
}
