// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain → Wire Request Builders
//!
//! Build the launch/update request bodies from the write-side projections.
//! The builders are total functions: the projections carry typed enums and
//! validated value objects, so no out-of-set value can reach this point —
//! the domain constructors are the single validation gate.

use crate::domain::{CreateInstance, UpdateInstance};
use crate::sdk::model::{LaunchInstanceOpts, UpdateInstanceOpts};

/// Build the `POST /instances` body
pub fn to_launch_instance_request(create: &CreateInstance) -> LaunchInstanceOpts {
    LaunchInstanceOpts {
        region: create.region.clone(),
        instance_type: create.instance_type.as_str().to_string(),
        image_id: create.image_id.as_str().to_string(),
        contract_type: create.contract_type.as_str().to_string(),
        contract_term: create.contract_term.value() as i32,
        billing_frequency: create.billing_frequency.value() as i32,
        root_disk_storage_type: create.root_disk_storage_type.as_str().to_string(),
        market_app_id: create.market_app_id.clone(),
        reference: create.reference.clone(),
        ssh_key: create.ssh_key.as_ref().map(|key| key.as_str().to_string()),
        root_disk_size: create.root_disk_size.map(|size| size.value() as i32),
    }
}

/// Build the `PUT /instances/{id}` body; only set fields are emitted
pub fn to_update_instance_request(update: &UpdateInstance) -> UpdateInstanceOpts {
    UpdateInstanceOpts {
        instance_type: update
            .instance_type
            .as_ref()
            .map(|instance_type| instance_type.as_str().to_string()),
        reference: update.reference.clone(),
        contract_type: update
            .contract_type
            .map(|contract_type| contract_type.as_str().to_string()),
        contract_term: update.contract_term.map(|term| term.value() as i32),
        billing_frequency: update
            .billing_frequency
            .map(|frequency| frequency.value() as i32),
        root_disk_size: update.root_disk_size.map(|size| size.value() as i32),
    }
}
