//! Domain, repository and service components for the Public Cloud compute
//! API
//!
//! This crate is the core of a declarative-infrastructure provider: it
//! models cloud resources (instances, auto-scaling groups, load balancers,
//! contracts, IPs, images) as validated domain entities and reconciles
//! them against the remote HTTP API.
//!
//! # Layers
//!
//! - [`domain`] — value objects and entities with construction invariants
//! - [`sdk`] — the narrow remote-API surface and its wire shapes
//! - [`adapter`] — total translation between wire payloads and the domain
//! - [`repository`] — SDK calls plus translation, with typed errors
//! - [`service`] — orchestration: bounded fan-out, detail enrichment
//! - [`ports`] — the contracts decoupling the layers
//! - [`plan`] — stateless predicates for the host's plan-diff step
//!
//! The host plugin runtime, credential bootstrap and attribute marshaling
//! live outside this crate; they consume [`ports::PublicCloudService`].

pub mod adapter;
pub mod domain;
pub mod plan;
pub mod ports;
pub mod repository;
pub mod sdk;
pub mod service;

// Re-export commonly used types
pub use ports::{PublicCloudRepository, PublicCloudService};
pub use repository::{PublicCloudApiRepository, RepositoryError};
pub use sdk::{ApiConfig, ErrorResponse, SdkError};
pub use service::{PublicCloudApiService, ServiceError};
