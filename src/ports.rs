// Copyright (c) 2025 - Cowboy AI, Inc.
//! Layer Contracts
//!
//! Two traits decouple the stack: the service depends on
//! [`PublicCloudRepository`] rather than the SDK, and the host plugin
//! depends on [`PublicCloudService`] rather than the repository. Tests
//! substitute either seam.
//!
//! Cancellation is structural: dropping the future returned by any
//! operation drops the in-flight SDK calls underneath it.

use async_trait::async_trait;

use crate::domain::{
    AutoScalingGroup, CreateInstance, Instance, InstanceTypes, LoadBalancer, Regions,
    UpdateInstance, Uuid,
};
use crate::repository::RepositoryError;
use crate::service::ServiceError;

/// Data-access contract over the remote API.
///
/// List operations return summary entities as delivered by the index
/// endpoints; promotion to detail is an explicit separate call. The
/// repository never fans out on its own.
#[async_trait]
pub trait PublicCloudRepository: Send + Sync {
    /// Fetch the instance index; each element is a summary
    async fn list_instances(&self) -> Result<Vec<Instance>, RepositoryError>;

    /// Fetch full instance detail, including any embedded auto-scaling
    /// group summary
    async fn get_instance(&self, id: &Uuid) -> Result<Instance, RepositoryError>;

    /// Fetch auto-scaling group detail, including the embedded load
    /// balancer summary if any
    async fn get_auto_scaling_group(&self, id: &Uuid)
        -> Result<AutoScalingGroup, RepositoryError>;

    /// Fetch load balancer detail
    async fn get_load_balancer(&self, id: &Uuid) -> Result<LoadBalancer, RepositoryError>;

    /// Launch a new instance; the remote answers with a summary
    async fn create_instance(&self, instance: &CreateInstance)
        -> Result<Instance, RepositoryError>;

    /// Update an existing instance; the remote answers with full detail
    async fn update_instance(&self, instance: &UpdateInstance)
        -> Result<Instance, RepositoryError>;

    /// Terminate an instance
    async fn delete_instance(&self, id: &Uuid) -> Result<(), RepositoryError>;

    /// Allowed target types for updating an existing instance
    async fn available_instance_types_for_update(
        &self,
        id: &Uuid,
    ) -> Result<InstanceTypes, RepositoryError>;

    /// All deployment regions
    async fn regions(&self) -> Result<Regions, RepositoryError>;
}

/// Orchestration contract consumed by the host plugin.
///
/// Mirrors the repository surface; read results are enriched (detail
/// fetches, auto-scaling group and load-balancer substitution) and every
/// failure arrives as a [`ServiceError`] carrying the remote error body
/// when one was decoded.
#[async_trait]
pub trait PublicCloudService: Send + Sync {
    /// All instances at detail level; result order is unspecified
    async fn get_all_instances(&self) -> Result<Vec<Instance>, ServiceError>;

    /// One instance at detail level with its auto-scaling group and load
    /// balancer substituted by their detail representations
    async fn get_instance(&self, id: &Uuid) -> Result<Instance, ServiceError>;

    /// Launch an instance and return it fully enriched
    async fn create_instance(&self, instance: &CreateInstance)
        -> Result<Instance, ServiceError>;

    /// Update an instance and return it fully enriched
    async fn update_instance(&self, instance: &UpdateInstance)
        -> Result<Instance, ServiceError>;

    /// Terminate an instance
    async fn delete_instance(&self, id: &Uuid) -> Result<(), ServiceError>;

    /// Allowed target types for updating an existing instance
    async fn get_available_instance_types_for_update(
        &self,
        id: &Uuid,
    ) -> Result<InstanceTypes, ServiceError>;

    /// All deployment regions
    async fn get_regions(&self) -> Result<Regions, ServiceError>;
}
