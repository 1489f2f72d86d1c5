// Copyright (c) 2025 - Cowboy AI, Inc.
//! Compute Instance Entity
//!
//! `Instance` is the aggregate root of this domain: it owns its contract,
//! image, addresses and (optionally) the auto-scaling group that manages
//! it, which in turn may own a load balancer. All ownership is by value
//! and acyclic.
//!
//! `CreateInstance` and `UpdateInstance` are the write-side projections:
//! they carry exactly the fields the remote launch/update operations
//! accept, validated at construction through their field types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auto_scaling_group::AutoScalingGroup;
use super::contract::{Contract, ContractBillingFrequency, ContractTerm, ContractType};
use super::image::{Image, ImageId};
use super::instance_type::InstanceType;
use super::ip::Ip;
use super::iso::Iso;
use super::private_network::PrivateNetwork;
use super::region::Region;
use super::resources::Resources;
use super::root_disk::{RootDiskSize, RootDiskStorageType};
use super::ssh_key::SshKey;
use super::state::State;
use super::uuid::Uuid;

/// Compute instance as reported by the remote API.
///
/// Layers above never mutate an instance; enrichment produces a new value
/// with a richer sub-tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: Uuid,
    pub region: Region,
    pub resources: Resources,
    pub image: Image,
    pub state: State,
    pub product_type: String,
    pub has_public_ipv4: bool,
    pub has_private_network: bool,
    pub instance_type: InstanceType,
    pub root_disk_size: RootDiskSize,
    pub root_disk_storage_type: RootDiskStorageType,
    pub ips: Vec<Ip>,
    pub contract: Contract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<Iso>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network: Option<PrivateNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<SshKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group: Option<AutoScalingGroup>,
}

/// Desired state for launching a new instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInstance {
    pub region: String,
    pub instance_type: InstanceType,
    pub root_disk_storage_type: RootDiskStorageType,
    pub image_id: ImageId,
    pub contract_type: ContractType,
    pub contract_term: ContractTerm,
    pub billing_frequency: ContractBillingFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<SshKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<RootDiskSize>,
}

impl CreateInstance {
    /// Create a launch projection with the required fields; optional fields
    /// start unset
    pub fn new(
        region: impl Into<String>,
        instance_type: InstanceType,
        root_disk_storage_type: RootDiskStorageType,
        image_id: ImageId,
        contract_type: ContractType,
        contract_term: ContractTerm,
        billing_frequency: ContractBillingFrequency,
    ) -> Self {
        Self {
            region: region.into(),
            instance_type,
            root_disk_storage_type,
            image_id,
            contract_type,
            contract_term,
            billing_frequency,
            market_app_id: None,
            reference: None,
            ssh_key: None,
            root_disk_size: None,
        }
    }

    pub fn with_market_app_id(mut self, market_app_id: impl Into<String>) -> Self {
        self.market_app_id = Some(market_app_id.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_ssh_key(mut self, ssh_key: SshKey) -> Self {
        self.ssh_key = Some(ssh_key);
        self
    }

    pub fn with_root_disk_size(mut self, root_disk_size: RootDiskSize) -> Self {
        self.root_disk_size = Some(root_disk_size);
        self
    }
}

/// Desired changes to an existing instance.
///
/// Only set fields are sent to the remote API; an all-unset update is a
/// remote no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInstance {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_term: Option<ContractTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_frequency: Option<ContractBillingFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<RootDiskSize>,
}

impl UpdateInstance {
    /// Create an empty update projection for an instance
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            instance_type: None,
            reference: None,
            contract_type: None,
            contract_term: None,
            billing_frequency: None,
            root_disk_size: None,
        }
    }

    pub fn with_instance_type(mut self, instance_type: InstanceType) -> Self {
        self.instance_type = Some(instance_type);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_contract_type(mut self, contract_type: ContractType) -> Self {
        self.contract_type = Some(contract_type);
        self
    }

    pub fn with_contract_term(mut self, contract_term: ContractTerm) -> Self {
        self.contract_term = Some(contract_term);
        self
    }

    pub fn with_billing_frequency(mut self, billing_frequency: ContractBillingFrequency) -> Self {
        self.billing_frequency = Some(billing_frequency);
        self
    }

    pub fn with_root_disk_size(mut self, root_disk_size: RootDiskSize) -> Self {
        self.root_disk_size = Some(root_disk_size);
        self
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        self.instance_type.is_none()
            && self.reference.is_none()
            && self.contract_type.is_none()
            && self.contract_term.is_none()
            && self.billing_frequency.is_none()
            && self.root_disk_size.is_none()
    }
}
