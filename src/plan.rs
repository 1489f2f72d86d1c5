// Copyright (c) 2025 - Cowboy AI, Inc.
//! Plan-Time Predicates
//!
//! Pure functions the host plugin evaluates at plan-diff time, before any
//! remote call is made. All functions operate on the raw attribute strings
//! the host holds; the domain constructors remain the final gate at apply
//! time.

use crate::domain::{Contract, ContractError, ContractTerm, ContractType, InstanceTypes};

/// Whether the planned type differs from the current one.
///
/// Not a change when the resource is being created (empty state id), when
/// the plan carries no type (import), or when both types are equal.
pub fn has_instance_type_changed(state_id: &str, state_type: &str, plan_type: &str) -> bool {
    if state_id.is_empty() {
        return false;
    }
    if plan_type.is_empty() {
        return false;
    }
    state_type != plan_type
}

/// Whether the planned type is in the allowed target set
pub fn is_instance_type_allowed(plan_type: &str, allowed: &InstanceTypes) -> bool {
    allowed.contains(plan_type)
}

/// Whether the resource is being created (no state id yet)
pub fn is_being_created(state_id: &str) -> bool {
    state_id.is_empty()
}

/// Re-check the contract term interlock at plan time.
///
/// Same rule as the `Contract` constructor: MONTHLY requires a non-zero
/// term, HOURLY requires a zero term.
pub fn validate_contract_term(
    term: ContractTerm,
    contract_type: ContractType,
) -> Result<(), ContractError> {
    Contract::validate_term(term, contract_type)
}
