// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared test fixtures: wire payload builders and the domain entities
//! derived from them.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use publiccloud_infrastructure::adapter;
use publiccloud_infrastructure::domain::{AutoScalingGroup, Instance, LoadBalancer};
use publiccloud_infrastructure::sdk::model;

pub const INSTANCE_ID: &str = "5d7f8262-d77f-4476-8da8-6a84f8f2ae8d";
pub const GROUP_ID: &str = "90b9f2cc-c655-40ea-b01a-58c00e175c96";
pub const LOAD_BALANCER_ID: &str = "1e788b2d-6a2a-44c2-8b24-0b0c0d0e0f10";

pub fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn wire_contract() -> model::Contract {
    model::Contract {
        billing_frequency: 1,
        term: 3,
        contract_type: "MONTHLY".to_string(),
        state: "ACTIVE".to_string(),
        created_at: timestamp("2025-01-01T12:00:00Z"),
        renewals_at: timestamp("2025-04-01T12:00:00Z"),
        ends_at: None,
    }
}

pub fn wire_resources() -> model::Resources {
    model::Resources {
        cpu: model::Cpu {
            value: 2,
            unit: "cpu".to_string(),
        },
        memory: model::Memory {
            value: 4.0,
            unit: "GB".to_string(),
        },
        public_network_speed: model::NetworkSpeed {
            value: 1,
            unit: "Gbps".to_string(),
        },
        private_network_speed: model::NetworkSpeed {
            value: 1,
            unit: "Gbps".to_string(),
        },
    }
}

pub fn wire_region() -> model::Region {
    model::Region {
        name: "eu-west-3".to_string(),
        location: Some("Amsterdam".to_string()),
    }
}

pub fn wire_instance_summary(id: &str) -> model::Instance {
    model::Instance {
        id: id.to_string(),
        instance_type: "lsw.m3.large".to_string(),
        resources: wire_resources(),
        region: wire_region(),
        state: "RUNNING".to_string(),
        product_type: "publicCloud".to_string(),
        has_public_ip_v4: true,
        has_private_network: false,
        root_disk_size: 50,
        root_disk_storage_type: "CENTRAL".to_string(),
        contract: wire_contract(),
        ips: vec![model::Ip {
            ip: "10.32.60.12".to_string(),
            prefix_length: 24,
            version: 4,
            null_routed: false,
            main_ip: true,
            network_type: "PUBLIC".to_string(),
        }],
        image: model::Image {
            id: "UBUNTU_24_04_64BIT".to_string(),
            name: "Ubuntu 24.04 LTS (x86_64)".to_string(),
            version: Some("24.04".to_string()),
            family: "Ubuntu".to_string(),
            flavour: "ubuntu".to_string(),
            architecture: Some("64bit".to_string()),
        },
        reference: Some("web-01".to_string()),
        started_at: Some(timestamp("2025-02-01T08:00:00Z")),
        market_app_id: None,
    }
}

pub fn wire_instance_details(
    id: &str,
    auto_scaling_group: Option<model::AutoScalingGroup>,
) -> model::InstanceDetails {
    model::InstanceDetails {
        id: id.to_string(),
        instance_type: "lsw.m3.large".to_string(),
        resources: wire_resources(),
        region: wire_region(),
        state: "RUNNING".to_string(),
        product_type: "publicCloud".to_string(),
        has_public_ip_v4: true,
        has_private_network: false,
        root_disk_size: 50,
        root_disk_storage_type: "CENTRAL".to_string(),
        contract: wire_contract(),
        ips: vec![model::IpDetails {
            ip: "10.32.60.12".to_string(),
            prefix_length: 24,
            version: 4,
            null_routed: false,
            main_ip: true,
            network_type: "PUBLIC".to_string(),
            reverse_lookup: None,
            ddos: None,
        }],
        image: model::ImageDetails {
            id: "UBUNTU_24_04_64BIT".to_string(),
            name: "Ubuntu 24.04 LTS (x86_64)".to_string(),
            version: Some("24.04".to_string()),
            family: "Ubuntu".to_string(),
            flavour: "ubuntu".to_string(),
            architecture: Some("64bit".to_string()),
            market_apps: vec![],
            storage_types: vec!["LOCAL".to_string(), "CENTRAL".to_string()],
        },
        reference: Some("web-01".to_string()),
        started_at: Some(timestamp("2025-02-01T08:00:00Z")),
        market_app_id: None,
        iso: None,
        private_network: None,
        auto_scaling_group,
    }
}

pub fn wire_auto_scaling_group_summary(id: &str) -> model::AutoScalingGroup {
    model::AutoScalingGroup {
        id: id.to_string(),
        group_type: "CPU_BASED".to_string(),
        state: "RUNNING".to_string(),
        region: wire_region(),
        reference: "asg-web".to_string(),
        created_at: timestamp("2025-01-01T12:00:00Z"),
        updated_at: timestamp("2025-01-02T12:00:00Z"),
        desired_amount: Some(3),
        starts_at: None,
        ends_at: None,
        minimum_amount: Some(1),
        maximum_amount: Some(6),
        cpu_threshold: Some(70),
        warmup_time: Some(120),
        cooldown_time: Some(300),
    }
}

pub fn wire_auto_scaling_group_details(
    id: &str,
    load_balancer: Option<model::LoadBalancer>,
) -> model::AutoScalingGroupDetails {
    model::AutoScalingGroupDetails {
        id: id.to_string(),
        group_type: "CPU_BASED".to_string(),
        state: "RUNNING".to_string(),
        region: wire_region(),
        reference: "asg-web".to_string(),
        created_at: timestamp("2025-01-01T12:00:00Z"),
        updated_at: timestamp("2025-01-02T12:00:00Z"),
        desired_amount: Some(3),
        starts_at: None,
        ends_at: None,
        minimum_amount: Some(1),
        maximum_amount: Some(6),
        cpu_threshold: Some(70),
        warmup_time: Some(120),
        cooldown_time: Some(300),
        load_balancer,
    }
}

pub fn wire_load_balancer_summary(id: &str) -> model::LoadBalancer {
    model::LoadBalancer {
        id: id.to_string(),
        load_balancer_type: "lsw.m3.large".to_string(),
        resources: wire_resources(),
        region: wire_region(),
        state: "RUNNING".to_string(),
        contract: wire_contract(),
        ips: vec![],
        reference: Some("lb-web".to_string()),
        started_at: None,
    }
}

pub fn wire_load_balancer_details(id: &str) -> model::LoadBalancerDetails {
    model::LoadBalancerDetails {
        id: id.to_string(),
        load_balancer_type: "lsw.m3.large".to_string(),
        resources: wire_resources(),
        region: wire_region(),
        state: "RUNNING".to_string(),
        contract: wire_contract(),
        ips: vec![],
        reference: Some("lb-web".to_string()),
        started_at: None,
        private_network: None,
        configuration: Some(model::LoadBalancerConfiguration {
            balance: "ROUNDROBIN".to_string(),
            health_check: None,
            sticky_session: None,
            x_forwarded_for: false,
            idle_time_out: 60,
            target_port: 80,
        }),
    }
}

// Domain entities, produced through the adapter the way the repository
// produces them.

pub fn domain_instance_summary(id: &str) -> Instance {
    adapter::instance_from_summary(wire_instance_summary(id)).unwrap()
}

pub fn domain_instance_details(
    id: &str,
    auto_scaling_group: Option<model::AutoScalingGroup>,
) -> Instance {
    adapter::instance_from_details(wire_instance_details(id, auto_scaling_group)).unwrap()
}

pub fn domain_auto_scaling_group(
    id: &str,
    load_balancer: Option<model::LoadBalancer>,
) -> AutoScalingGroup {
    adapter::auto_scaling_group_from_details(wire_auto_scaling_group_details(id, load_balancer))
        .unwrap()
}

pub fn domain_load_balancer(id: &str) -> LoadBalancer {
    adapter::load_balancer_from_details(wire_load_balancer_details(id)).unwrap()
}
