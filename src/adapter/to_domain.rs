// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire → Domain Converters
//!
//! Summary and detail payloads get parallel converters because the remote
//! API delivers different field sets per endpoint. Summary conversions
//! leave detail-only fields at their zero value (`None` / empty vec)
//! rather than fabricating data.
//!
//! Wire integers arrive as 32-bit and are widened to `i64`; memory is the
//! only floating-point quantity.

use crate::domain::{
    AutoScalingGroup, AutoScalingGroupReference, AutoScalingGroupType, Balance, Contract,
    ContractBillingFrequency, ContractState, ContractTerm, ContractType, Cpu, Ddos, HealthCheck,
    Image, ImageId, Instance, InstanceType, InstanceTypes, Ip, Iso, LoadBalancer,
    LoadBalancerConfiguration, Memory, Method, NetworkSpeed, NetworkType, Price, Prices,
    PrivateNetwork, Region, Regions, Resources, RootDiskSize, RootDiskStorageType, State,
    StickySession, StoragePrices, Uuid,
};
use crate::sdk::model;

use super::AdapterError;

/// Convert an instance from a list payload.
///
/// The embedded image and addresses carry only their summary fields.
pub fn instance_from_summary(payload: model::Instance) -> Result<Instance, AdapterError> {
    const OP: &str = "convert_instance";

    let id = Uuid::new(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;
    let state = State::try_from_str(&payload.state).map_err(|e| AdapterError::validation(OP, e))?;
    let root_disk_size = RootDiskSize::new(i64::from(payload.root_disk_size))
        .map_err(|e| AdapterError::validation(OP, e))?;
    let root_disk_storage_type = RootDiskStorageType::try_from_str(&payload.root_disk_storage_type)
        .map_err(|e| AdapterError::validation(OP, e))?;
    let contract = contract_from(payload.contract).map_err(|e| AdapterError::nested(OP, e))?;
    let image = image_from_summary(payload.image).map_err(|e| AdapterError::nested(OP, e))?;
    let ips = payload
        .ips
        .into_iter()
        .map(ip_from_summary)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AdapterError::nested(OP, e))?;

    Ok(Instance {
        id,
        region: region_from(payload.region),
        resources: resources_from(payload.resources),
        image,
        state,
        product_type: payload.product_type,
        has_public_ipv4: payload.has_public_ip_v4,
        has_private_network: payload.has_private_network,
        instance_type: InstanceType::new_unvalidated(payload.instance_type),
        root_disk_size,
        root_disk_storage_type,
        ips,
        contract,
        reference: payload.reference,
        started_at: payload.started_at,
        iso: None,
        market_app_id: payload.market_app_id,
        private_network: None,
        ssh_key: None,
        auto_scaling_group: None,
    })
}

/// Convert an instance from a detail payload, including any embedded
/// auto-scaling group summary.
pub fn instance_from_details(payload: model::InstanceDetails) -> Result<Instance, AdapterError> {
    const OP: &str = "convert_instance";

    let id = Uuid::new(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;
    let state = State::try_from_str(&payload.state).map_err(|e| AdapterError::validation(OP, e))?;
    let root_disk_size = RootDiskSize::new(i64::from(payload.root_disk_size))
        .map_err(|e| AdapterError::validation(OP, e))?;
    let root_disk_storage_type = RootDiskStorageType::try_from_str(&payload.root_disk_storage_type)
        .map_err(|e| AdapterError::validation(OP, e))?;
    let contract = contract_from(payload.contract).map_err(|e| AdapterError::nested(OP, e))?;
    let image = image_from_details(payload.image).map_err(|e| AdapterError::nested(OP, e))?;
    let ips = payload
        .ips
        .into_iter()
        .map(ip_from_details)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AdapterError::nested(OP, e))?;
    let auto_scaling_group = payload
        .auto_scaling_group
        .map(auto_scaling_group_from_summary)
        .transpose()
        .map_err(|e| AdapterError::nested(OP, e))?;

    Ok(Instance {
        id,
        region: region_from(payload.region),
        resources: resources_from(payload.resources),
        image,
        state,
        product_type: payload.product_type,
        has_public_ipv4: payload.has_public_ip_v4,
        has_private_network: payload.has_private_network,
        instance_type: InstanceType::new_unvalidated(payload.instance_type),
        root_disk_size,
        root_disk_storage_type,
        ips,
        contract,
        reference: payload.reference,
        started_at: payload.started_at,
        iso: payload.iso.map(iso_from),
        market_app_id: payload.market_app_id,
        private_network: payload.private_network.map(private_network_from),
        ssh_key: None,
        auto_scaling_group,
    })
}

/// Convert a billing contract, re-checking the term interlock
pub fn contract_from(payload: model::Contract) -> Result<Contract, AdapterError> {
    const OP: &str = "convert_contract";

    let billing_frequency = ContractBillingFrequency::try_from_value(i64::from(
        payload.billing_frequency,
    ))
    .map_err(|e| AdapterError::validation(OP, e))?;
    let term = ContractTerm::try_from_value(i64::from(payload.term))
        .map_err(|e| AdapterError::validation(OP, e))?;
    let contract_type = ContractType::try_from_str(&payload.contract_type)
        .map_err(|e| AdapterError::validation(OP, e))?;
    let state = ContractState::try_from_str(&payload.state)
        .map_err(|e| AdapterError::validation(OP, e))?;

    Contract::new(
        billing_frequency,
        term,
        contract_type,
        state,
        payload.created_at,
        payload.renewals_at,
        payload.ends_at,
    )
    .map_err(|e| AdapterError::validation(OP, e))
}

/// Convert an address from a list payload; mitigation fields stay unset
pub fn ip_from_summary(payload: model::Ip) -> Result<Ip, AdapterError> {
    const OP: &str = "convert_ip";

    let network_type = NetworkType::try_from_str(&payload.network_type)
        .map_err(|e| AdapterError::validation(OP, e))?;

    Ok(Ip {
        ip: payload.ip,
        prefix_length: i64::from(payload.prefix_length),
        version: i64::from(payload.version),
        null_routed: payload.null_routed,
        main_ip: payload.main_ip,
        network_type,
        reverse_lookup: None,
        ddos: None,
    })
}

/// Convert an address from a detail payload
pub fn ip_from_details(payload: model::IpDetails) -> Result<Ip, AdapterError> {
    const OP: &str = "convert_ip";

    let network_type = NetworkType::try_from_str(&payload.network_type)
        .map_err(|e| AdapterError::validation(OP, e))?;

    Ok(Ip {
        ip: payload.ip,
        prefix_length: i64::from(payload.prefix_length),
        version: i64::from(payload.version),
        null_routed: payload.null_routed,
        main_ip: payload.main_ip,
        network_type,
        reverse_lookup: payload.reverse_lookup,
        ddos: payload.ddos.map(|ddos| Ddos {
            detection_profile: ddos.detection_profile,
            protection_type: ddos.protection_type,
        }),
    })
}

/// Convert an image from a list payload; `market_apps` and
/// `storage_types` stay empty
pub fn image_from_summary(payload: model::Image) -> Result<Image, AdapterError> {
    const OP: &str = "convert_image";

    let id = ImageId::try_from_str(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;

    Ok(Image {
        id,
        name: payload.name,
        version: payload.version.unwrap_or_default(),
        family: payload.family,
        flavour: payload.flavour,
        architecture: payload.architecture.unwrap_or_default(),
        market_apps: Vec::new(),
        storage_types: Vec::new(),
    })
}

/// Convert an image from a detail payload
pub fn image_from_details(payload: model::ImageDetails) -> Result<Image, AdapterError> {
    const OP: &str = "convert_image";

    let id = ImageId::try_from_str(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;

    Ok(Image {
        id,
        name: payload.name,
        version: payload.version.unwrap_or_default(),
        family: payload.family,
        flavour: payload.flavour,
        architecture: payload.architecture.unwrap_or_default(),
        market_apps: payload.market_apps,
        storage_types: payload.storage_types,
    })
}

/// Convert an auto-scaling group embedded in an instance detail payload.
/// The load balancer stays unset: summaries do not carry one.
pub fn auto_scaling_group_from_summary(
    payload: model::AutoScalingGroup,
) -> Result<AutoScalingGroup, AdapterError> {
    const OP: &str = "convert_auto_scaling_group";

    let id = Uuid::new(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;
    let group_type = AutoScalingGroupType::try_from_str(&payload.group_type)
        .map_err(|e| AdapterError::validation(OP, e))?;
    let state = State::try_from_str(&payload.state).map_err(|e| AdapterError::validation(OP, e))?;
    let reference = AutoScalingGroupReference::new(payload.reference)
        .map_err(|e| AdapterError::validation(OP, e))?;

    Ok(AutoScalingGroup {
        id,
        group_type,
        state,
        region: region_from(payload.region),
        reference,
        created_at: payload.created_at,
        updated_at: payload.updated_at,
        desired_amount: payload.desired_amount.map(i64::from),
        starts_at: payload.starts_at,
        ends_at: payload.ends_at,
        minimum_amount: payload.minimum_amount.map(i64::from),
        maximum_amount: payload.maximum_amount.map(i64::from),
        cpu_threshold: payload.cpu_threshold.map(i64::from),
        warmup_time: payload.warmup_time.map(i64::from),
        cooldown_time: payload.cooldown_time.map(i64::from),
        load_balancer: None,
    })
}

/// Convert an auto-scaling group from its own endpoint, including the
/// embedded load-balancer summary if any
pub fn auto_scaling_group_from_details(
    payload: model::AutoScalingGroupDetails,
) -> Result<AutoScalingGroup, AdapterError> {
    const OP: &str = "convert_auto_scaling_group";

    let id = Uuid::new(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;
    let group_type = AutoScalingGroupType::try_from_str(&payload.group_type)
        .map_err(|e| AdapterError::validation(OP, e))?;
    let state = State::try_from_str(&payload.state).map_err(|e| AdapterError::validation(OP, e))?;
    let reference = AutoScalingGroupReference::new(payload.reference)
        .map_err(|e| AdapterError::validation(OP, e))?;
    let load_balancer = payload
        .load_balancer
        .map(load_balancer_from_summary)
        .transpose()
        .map_err(|e| AdapterError::nested(OP, e))?;

    Ok(AutoScalingGroup {
        id,
        group_type,
        state,
        region: region_from(payload.region),
        reference,
        created_at: payload.created_at,
        updated_at: payload.updated_at,
        desired_amount: payload.desired_amount.map(i64::from),
        starts_at: payload.starts_at,
        ends_at: payload.ends_at,
        minimum_amount: payload.minimum_amount.map(i64::from),
        maximum_amount: payload.maximum_amount.map(i64::from),
        cpu_threshold: payload.cpu_threshold.map(i64::from),
        warmup_time: payload.warmup_time.map(i64::from),
        cooldown_time: payload.cooldown_time.map(i64::from),
        load_balancer,
    })
}

/// Convert a load balancer embedded in an auto-scaling group payload;
/// configuration and private network stay unset
pub fn load_balancer_from_summary(
    payload: model::LoadBalancer,
) -> Result<LoadBalancer, AdapterError> {
    const OP: &str = "convert_load_balancer";

    let id = Uuid::new(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;
    let state = State::try_from_str(&payload.state).map_err(|e| AdapterError::validation(OP, e))?;
    let contract = contract_from(payload.contract).map_err(|e| AdapterError::nested(OP, e))?;
    let ips = payload
        .ips
        .into_iter()
        .map(ip_from_summary)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AdapterError::nested(OP, e))?;

    Ok(LoadBalancer {
        id,
        load_balancer_type: InstanceType::new_unvalidated(payload.load_balancer_type),
        resources: resources_from(payload.resources),
        region: region_from(payload.region),
        state,
        contract,
        ips,
        reference: payload.reference,
        started_at: payload.started_at,
        private_network: None,
        configuration: None,
    })
}

/// Convert a load balancer from its own endpoint
pub fn load_balancer_from_details(
    payload: model::LoadBalancerDetails,
) -> Result<LoadBalancer, AdapterError> {
    const OP: &str = "convert_load_balancer";

    let id = Uuid::new(&payload.id).map_err(|e| AdapterError::validation(OP, e))?;
    let state = State::try_from_str(&payload.state).map_err(|e| AdapterError::validation(OP, e))?;
    let contract = contract_from(payload.contract).map_err(|e| AdapterError::nested(OP, e))?;
    let ips = payload
        .ips
        .into_iter()
        .map(ip_from_details)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AdapterError::nested(OP, e))?;
    let configuration = payload
        .configuration
        .map(configuration_from)
        .transpose()
        .map_err(|e| AdapterError::nested(OP, e))?;

    Ok(LoadBalancer {
        id,
        load_balancer_type: InstanceType::new_unvalidated(payload.load_balancer_type),
        resources: resources_from(payload.resources),
        region: region_from(payload.region),
        state,
        contract,
        ips,
        reference: payload.reference,
        started_at: payload.started_at,
        private_network: payload.private_network.map(private_network_from),
        configuration,
    })
}

fn configuration_from(
    payload: model::LoadBalancerConfiguration,
) -> Result<LoadBalancerConfiguration, AdapterError> {
    const OP: &str = "convert_load_balancer_configuration";

    let balance =
        Balance::try_from_str(&payload.balance).map_err(|e| AdapterError::validation(OP, e))?;
    let health_check = payload
        .health_check
        .map(health_check_from)
        .transpose()
        .map_err(|e| AdapterError::nested(OP, e))?;

    Ok(LoadBalancerConfiguration {
        balance,
        health_check,
        sticky_session: payload.sticky_session.map(|session| StickySession {
            enabled: session.enabled,
            max_life_time: i64::from(session.max_life_time),
        }),
        x_forwarded_for: payload.x_forwarded_for,
        idle_timeout: i64::from(payload.idle_time_out),
        target_port: i64::from(payload.target_port),
    })
}

fn health_check_from(payload: model::HealthCheck) -> Result<HealthCheck, AdapterError> {
    const OP: &str = "convert_health_check";

    let method =
        Method::try_from_str(&payload.method).map_err(|e| AdapterError::validation(OP, e))?;

    Ok(HealthCheck {
        method,
        uri: payload.uri,
        host: payload.host,
        port: i64::from(payload.port),
    })
}

/// Project the allowed target types out of a catalog listing
pub fn instance_types_from(payload: model::InstanceTypeList) -> InstanceTypes {
    payload
        .instance_types
        .into_iter()
        .map(|entry| InstanceType::new_unvalidated(entry.name))
        .collect::<Vec<_>>()
        .into()
}

/// Convert the price card of a catalog instance type
pub fn prices_from(payload: model::Prices) -> Prices {
    Prices {
        currency: payload.currency,
        currency_symbol: payload.currency_symbol,
        compute: price_from(payload.compute),
        storage: StoragePrices {
            local: price_from(payload.storage.local),
            central: price_from(payload.storage.central),
        },
    }
}

fn price_from(payload: model::Price) -> Price {
    Price {
        hourly_price: payload.hourly_price,
        monthly_price: payload.monthly_price,
    }
}

/// Convert a region listing; the order supplied by the remote is kept
pub fn regions_from(payload: model::RegionList) -> Regions {
    payload
        .regions
        .into_iter()
        .map(region_from)
        .collect::<Vec<_>>()
        .into()
}

fn region_from(payload: model::Region) -> Region {
    Region {
        name: payload.name,
        location: payload.location.unwrap_or_default(),
    }
}

fn resources_from(payload: model::Resources) -> Resources {
    Resources {
        cpu: Cpu {
            value: i64::from(payload.cpu.value),
            unit: payload.cpu.unit,
        },
        memory: Memory {
            value: payload.memory.value,
            unit: payload.memory.unit,
        },
        public_network_speed: NetworkSpeed {
            value: i64::from(payload.public_network_speed.value),
            unit: payload.public_network_speed.unit,
        },
        private_network_speed: NetworkSpeed {
            value: i64::from(payload.private_network_speed.value),
            unit: payload.private_network_speed.unit,
        },
    }
}

fn private_network_from(payload: model::PrivateNetwork) -> PrivateNetwork {
    PrivateNetwork {
        id: payload.private_network_id,
        status: payload.status,
        subnet: payload.subnet,
    }
}

fn iso_from(payload: model::Iso) -> Iso {
    Iso {
        id: payload.id,
        name: payload.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn timestamp(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn wire_contract() -> model::Contract {
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

    fn wire_resources() -> model::Resources {
        model::Resources {
            cpu: model::Cpu {
                value: 4,
                unit: "cpu".to_string(),
            },
            memory: model::Memory {
                value: 8.0,
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

    fn wire_instance(id: &str) -> model::Instance {
        model::Instance {
            id: id.to_string(),
            instance_type: "lsw.m3.large".to_string(),
            resources: wire_resources(),
            region: model::Region {
                name: "eu-west-3".to_string(),
                location: Some("Amsterdam".to_string()),
            },
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

    #[test]
    fn test_instance_summary_conversion() {
        let instance = instance_from_summary(wire_instance(
            "5d7f8262-d77f-4476-8da8-6a84f8f2ae8d",
        ))
        .unwrap();

        assert_eq!(
            instance.id.to_string(),
            "5d7f8262-d77f-4476-8da8-6a84f8f2ae8d"
        );
        assert_eq!(instance.state, State::Running);
        assert_eq!(instance.region.name, "eu-west-3");
        assert_eq!(instance.root_disk_size.value(), 50);
        assert_eq!(instance.contract.term, ContractTerm::Three);
        assert_eq!(instance.ips[0].network_type, NetworkType::Public);
        // Detail-only fields stay at their zero value
        assert!(instance.image.market_apps.is_empty());
        assert!(instance.auto_scaling_group.is_none());
        assert!(instance.iso.is_none());
    }

    #[test]
    fn test_instance_rejects_unknown_state() {
        let mut payload = wire_instance("5d7f8262-d77f-4476-8da8-6a84f8f2ae8d");
        payload.state = "HIBERNATING".to_string();

        let err = instance_from_summary(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "convert_instance: cannot find enum for value HIBERNATING"
        );
    }

    #[test]
    fn test_instance_rejects_bad_id() {
        let err = instance_from_summary(wire_instance("tralala")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "convert_instance: cannot convert value tralala to UUID"
        );
    }

    #[test]
    fn test_contract_conversion_enforces_interlock() {
        let mut payload = wire_contract();
        payload.term = 0;

        let err = contract_from(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "convert_contract: contract term cannot be 0 when contract type is MONTHLY"
        );
    }

    #[test]
    fn test_nested_failure_names_both_operations() {
        let mut payload = wire_instance("5d7f8262-d77f-4476-8da8-6a84f8f2ae8d");
        payload.contract.contract_type = "WEEKLY".to_string();

        let err = instance_from_summary(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "convert_instance: convert_contract: cannot find enum for value WEEKLY"
        );
    }

    #[test]
    fn test_ip_detail_conversion_keeps_mitigation_fields() {
        let ip = ip_from_details(model::IpDetails {
            ip: "10.32.60.12".to_string(),
            prefix_length: 24,
            version: 4,
            null_routed: true,
            main_ip: true,
            network_type: "PUBLIC".to_string(),
            reverse_lookup: Some("web-01.example.com".to_string()),
            ddos: Some(model::Ddos {
                detection_profile: "ADVANCED_LOW_UDP".to_string(),
                protection_type: "ADVANCED".to_string(),
            }),
        })
        .unwrap();

        assert!(ip.null_routed);
        assert_eq!(ip.reverse_lookup.as_deref(), Some("web-01.example.com"));
        assert_eq!(ip.ddos.unwrap().protection_type, "ADVANCED");
    }

    #[test]
    fn test_image_summary_vs_details() {
        let summary = image_from_summary(model::Image {
            id: "DEBIAN_12_64BIT".to_string(),
            name: "Debian 12 (amd64)".to_string(),
            version: None,
            family: "Debian".to_string(),
            flavour: "debian".to_string(),
            architecture: None,
        })
        .unwrap();
        assert_eq!(summary.version, "");
        assert!(summary.storage_types.is_empty());

        let details = image_from_details(model::ImageDetails {
            id: "DEBIAN_12_64BIT".to_string(),
            name: "Debian 12 (amd64)".to_string(),
            version: Some("12".to_string()),
            family: "Debian".to_string(),
            flavour: "debian".to_string(),
            architecture: Some("64bit".to_string()),
            market_apps: vec!["CPANEL_30".to_string()],
            storage_types: vec!["LOCAL".to_string()],
        })
        .unwrap();
        assert_eq!(details.market_apps, vec!["CPANEL_30".to_string()]);
    }

    #[test]
    fn test_auto_scaling_group_detail_converts_embedded_load_balancer() {
        let payload = model::AutoScalingGroupDetails {
            id: "90b9f2cc-c655-40ea-b01a-58c00e175c96".to_string(),
            group_type: "CPU_BASED".to_string(),
            state: "RUNNING".to_string(),
            region: model::Region {
                name: "eu-west-3".to_string(),
                location: None,
            },
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
            load_balancer: Some(model::LoadBalancer {
                id: "1e788b2d-6a2a-44c2-8b24-0b0c0d0e0f10".to_string(),
                load_balancer_type: "lsw.m3.large".to_string(),
                resources: wire_resources(),
                region: model::Region {
                    name: "eu-west-3".to_string(),
                    location: None,
                },
                state: "RUNNING".to_string(),
                contract: wire_contract(),
                ips: vec![],
                reference: None,
                started_at: None,
            }),
        };

        let group = auto_scaling_group_from_details(payload).unwrap();
        assert_eq!(group.group_type, AutoScalingGroupType::CpuBased);
        assert_eq!(group.desired_amount, Some(3));
        let load_balancer = group.load_balancer.unwrap();
        assert_eq!(
            load_balancer.id.to_string(),
            "1e788b2d-6a2a-44c2-8b24-0b0c0d0e0f10"
        );
        // Summary load balancers never carry a configuration
        assert!(load_balancer.configuration.is_none());
    }

    #[test]
    fn test_load_balancer_details_configuration() {
        let payload = model::LoadBalancerDetails {
            id: "1e788b2d-6a2a-44c2-8b24-0b0c0d0e0f10".to_string(),
            load_balancer_type: "lsw.m3.large".to_string(),
            resources: wire_resources(),
            region: model::Region {
                name: "eu-west-3".to_string(),
                location: None,
            },
            state: "RUNNING".to_string(),
            contract: wire_contract(),
            ips: vec![],
            reference: Some("lb-web".to_string()),
            started_at: None,
            private_network: None,
            configuration: Some(model::LoadBalancerConfiguration {
                balance: "ROUNDROBIN".to_string(),
                health_check: Some(model::HealthCheck {
                    method: "GET".to_string(),
                    uri: "/healthz".to_string(),
                    host: None,
                    port: 8080,
                }),
                sticky_session: Some(model::StickySession {
                    enabled: true,
                    max_life_time: 1800,
                }),
                x_forwarded_for: true,
                idle_time_out: 60,
                target_port: 8080,
            }),
        };

        let load_balancer = load_balancer_from_details(payload).unwrap();
        let configuration = load_balancer.configuration.unwrap();
        assert_eq!(configuration.balance, Balance::Roundrobin);
        assert_eq!(configuration.health_check.unwrap().method, Method::Get);
        assert_eq!(configuration.sticky_session.unwrap().max_life_time, 1800);
    }

    #[test]
    fn test_configuration_rejects_unknown_health_check_method() {
        let payload = model::LoadBalancerConfiguration {
            balance: "SOURCE".to_string(),
            health_check: Some(model::HealthCheck {
                method: "TRACE".to_string(),
                uri: "/".to_string(),
                host: None,
                port: 80,
            }),
            sticky_session: None,
            x_forwarded_for: false,
            idle_time_out: 60,
            target_port: 80,
        };

        let err = configuration_from(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "convert_load_balancer_configuration: convert_health_check: cannot find enum for value TRACE"
        );
    }

    #[test]
    fn test_instance_types_projection() {
        let list = model::InstanceTypeList {
            metadata: model::Metadata::default(),
            instance_types: vec![model::InstanceType {
                name: "lsw.c3.4xlarge".to_string(),
                resources: wire_resources(),
                prices: model::Prices {
                    currency: "EUR".to_string(),
                    currency_symbol: "€".to_string(),
                    compute: model::Price {
                        hourly_price: "0.2300".to_string(),
                        monthly_price: "150.00".to_string(),
                    },
                    storage: model::Storage {
                        local: model::Price {
                            hourly_price: "0.0000".to_string(),
                            monthly_price: "0.00".to_string(),
                        },
                        central: model::Price {
                            hourly_price: "0.0070".to_string(),
                            monthly_price: "5.00".to_string(),
                        },
                    },
                },
                storage_types: vec!["LOCAL".to_string(), "CENTRAL".to_string()],
            }],
        };

        let types = instance_types_from(list);
        assert!(types.contains("lsw.c3.4xlarge"));
        assert_eq!(types.len(), 1);
    }

    #[test]
    fn test_prices_conversion() {
        let prices = prices_from(model::Prices {
            currency: "EUR".to_string(),
            currency_symbol: "€".to_string(),
            compute: model::Price {
                hourly_price: "0.2300".to_string(),
                monthly_price: "150.00".to_string(),
            },
            storage: model::Storage {
                local: model::Price {
                    hourly_price: "0.0000".to_string(),
                    monthly_price: "0.00".to_string(),
                },
                central: model::Price {
                    hourly_price: "0.0070".to_string(),
                    monthly_price: "5.00".to_string(),
                },
            },
        });

        assert_eq!(prices.currency, "EUR");
        assert_eq!(prices.compute.hourly_price, "0.2300");
        assert_eq!(prices.storage.central.monthly_price, "5.00");
    }

    #[test]
    fn test_regions_keep_remote_order() {
        let regions = regions_from(model::RegionList {
            metadata: model::Metadata::default(),
            regions: vec![
                model::Region {
                    name: "us-east-1".to_string(),
                    location: Some("Washington D.C.".to_string()),
                },
                model::Region {
                    name: "eu-west-3".to_string(),
                    location: None,
                },
            ],
        });

        assert_eq!(
            regions.to_string_vec(),
            vec!["us-east-1".to_string(), "eu-west-3".to_string()]
        );
    }
}
