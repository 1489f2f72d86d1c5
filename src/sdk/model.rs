// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remote API Wire Shapes
//!
//! Serde mirrors of the JSON payloads exchanged with the public-cloud
//! endpoints. List/summary and detail variants are kept separate because
//! the remote API delivers different field sets per endpoint; the adapter
//! layer owns the translation into domain entities and performs all
//! validation — nothing here is checked beyond JSON well-formedness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pagination block delivered by list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_count: i32,
    pub limit: i32,
    pub offset: i32,
}

/// `GET /instances` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceList {
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
    pub instances: Vec<Instance>,
}

/// `GET /regions` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionList {
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
    pub regions: Vec<Region>,
}

/// `GET /instances/{id}/instanceTypesUpdate` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTypeList {
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
    pub instance_types: Vec<InstanceType>,
}

/// Deployment region
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Hardware resources block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    pub value: i32,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpeed {
    pub value: i32,
    pub unit: String,
}

/// Billing contract block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub billing_frequency: i32,
    pub term: i32,
    #[serde(rename = "type")]
    pub contract_type: String,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub renewals_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// Address block as delivered by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ip {
    pub ip: String,
    pub prefix_length: i32,
    pub version: i32,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: String,
}

/// Address block as delivered by detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpDetails {
    pub ip: String,
    pub prefix_length: i32,
    pub version: i32,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_lookup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddos: Option<Ddos>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ddos {
    pub detection_profile: String,
    pub protection_type: String,
}

/// Image block as delivered by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub family: String,
    pub flavour: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

/// Image block as delivered by detail endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub family: String,
    pub flavour: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(default)]
    pub market_apps: Vec<String>,
    #[serde(default)]
    pub storage_types: Vec<String>,
}

/// Attached ISO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iso {
    pub id: String,
    pub name: String,
}

/// Private network attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateNetwork {
    pub private_network_id: String,
    pub status: String,
    pub subnet: String,
}

/// Instance as delivered by the list endpoint and by the launch call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub resources: Resources,
    pub region: Region,
    pub state: String,
    pub product_type: String,
    #[serde(rename = "hasPublicIpV4")]
    pub has_public_ip_v4: bool,
    pub has_private_network: bool,
    pub root_disk_size: i32,
    pub root_disk_storage_type: String,
    pub contract: Contract,
    pub ips: Vec<Ip>,
    pub image: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
}

/// Instance as delivered by the detail endpoint and by the update call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDetails {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub resources: Resources,
    pub region: Region,
    pub state: String,
    pub product_type: String,
    #[serde(rename = "hasPublicIpV4")]
    pub has_public_ip_v4: bool,
    pub has_private_network: bool,
    pub root_disk_size: i32,
    pub root_disk_storage_type: String,
    pub contract: Contract,
    pub ips: Vec<IpDetails>,
    pub image: ImageDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso: Option<Iso>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_network: Option<PrivateNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group: Option<AutoScalingGroup>,
}

/// Auto-scaling group as embedded in an instance detail payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingGroup {
    pub id: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub state: String,
    pub region: Region,
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_amount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown_time: Option<i32>,
}

/// Auto-scaling group as delivered by its own endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingGroupDetails {
    pub id: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub state: String,
    pub region: Region,
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_amount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_threshold: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<LoadBalancer>,
}

/// Load balancer as embedded in an auto-scaling group detail payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    pub id: String,
    #[serde(rename = "type")]
    pub load_balancer_type: String,
    pub resources: Resources,
    pub region: Region,
    pub state: String,
    pub contract: Contract,
    pub ips: Vec<Ip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

/// Load balancer as delivered by its own endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerDetails {
    pub id: String,
    #[serde(rename = "type")]
    pub load_balancer_type: String,
    pub resources: Resources,
    pub region: Region,
    pub state: String,
    pub contract: Contract,
    pub ips: Vec<IpDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_network: Option<PrivateNetwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<LoadBalancerConfiguration>,
}

/// Listener configuration block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerConfiguration {
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky_session: Option<StickySession>,
    pub x_forwarded_for: bool,
    pub idle_time_out: i32,
    pub target_port: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub method: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub port: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickySession {
    pub enabled: bool,
    pub max_life_time: i32,
}

/// Catalog instance type as delivered by the update-type-list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceType {
    pub name: String,
    pub resources: Resources,
    pub prices: Prices,
    #[serde(default)]
    pub storage_types: Vec<String>,
}

/// Price card of a catalog instance type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prices {
    pub currency: String,
    pub currency_symbol: String,
    pub compute: Price,
    pub storage: Storage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub local: Price,
    pub central: Price,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub hourly_price: String,
    pub monthly_price: String,
}

/// `POST /instances` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceOpts {
    pub region: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub image_id: String,
    pub contract_type: String,
    pub contract_term: i32,
    pub billing_frequency: i32,
    pub root_disk_storage_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i32>,
}

/// `PUT /instances/{id}` request body; only set fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceOpts {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_term: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_frequency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i32>,
}

/// Structured error body returned by the remote API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub correlation_id: String,
    pub error_code: String,
    pub error_message: String,
    #[serde(default)]
    pub error_details: HashMap<String, Vec<String>>,
}
