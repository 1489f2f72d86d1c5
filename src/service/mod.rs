// Copyright (c) 2025 - Cowboy AI, Inc.
//! Public Cloud Service Layer
//!
//! Orchestrates repository calls; the only component with concurrency.
//!
//! # Read path
//!
//! ```text
//! get_all_instances
//!     ↓ list_instances            (index, summaries)
//!     ↓ fan-out, bounded          (detail per id, first error wins)
//! get_instance
//!     ↓ get_instance              (detail)
//!     ↓ get_auto_scaling_group    (substitute embedded summary)
//!     ↓ get_load_balancer         (substitute embedded summary)
//! ```
//!
//! The enrichment chain is strictly sequential, at most three hops,
//! depth-first; any failure short-circuits with the wrapped error. The
//! fan-out is a bounded stream: the first error cancels the remaining
//! in-flight fetches by dropping the stream, so no task outlives the
//! call.
//!
//! # Write path
//!
//! Writes are single sequential units; after create/update the service
//! re-reads through its own enrichment so the caller always receives a
//! fully-populated entity. Nothing is retried and partial creation is not
//! rolled back — failures surface to the caller as [`ServiceError`].

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    CreateInstance, Instance, InstanceTypes, Regions, UpdateInstance, Uuid,
};
use crate::ports::{PublicCloudRepository, PublicCloudService};
use crate::repository::RepositoryError;
use crate::sdk::ErrorResponse;

/// Upper bound on concurrent detail fetches during fan-out
const MAX_CONCURRENT_DETAIL_FETCHES: usize = 6;

/// Service failure naming the orchestrating operation.
///
/// The remote error body decoded by the repository is preserved
/// end-to-end so the host plugin can render structured diagnostics.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{operation}: {source}")]
    Repository {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ServiceError {
    pub fn repository(operation: &'static str, source: RepositoryError) -> Self {
        Self::Repository { operation, source }
    }

    /// Name of the failing service operation
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Repository { operation, .. } => operation,
        }
    }

    /// Structured error body returned by the remote, if any
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Repository { source, .. } => source.error_response(),
        }
    }
}

/// Service implementation over any repository
pub struct PublicCloudApiService<R> {
    repository: R,
}

impl<R: PublicCloudRepository> PublicCloudApiService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Detail fetch plus enrichment, shared by `get_instance` and the
    /// fan-out
    async fn fetch_instance(&self, id: Uuid) -> Result<Instance, ServiceError> {
        let instance = self
            .repository
            .get_instance(&id)
            .await
            .map_err(|e| ServiceError::repository("get_instance", e))?;

        self.populate_missing_instance_attributes(instance).await
    }

    /// Substitute embedded summaries with detail representations.
    ///
    /// An instance detail payload embeds at most an auto-scaling group
    /// summary, which in turn may reference a load balancer. Each hop is
    /// replaced by the detail from its dedicated endpoint; the chain walks
    /// depth-first and stops at the first failure.
    async fn populate_missing_instance_attributes(
        &self,
        mut instance: Instance,
    ) -> Result<Instance, ServiceError> {
        const OP: &str = "populate_missing_instance_attributes";

        let Some(summary) = instance.auto_scaling_group.take() else {
            return Ok(instance);
        };

        let mut group = self
            .repository
            .get_auto_scaling_group(&summary.id)
            .await
            .map_err(|e| ServiceError::repository(OP, e))?;

        if let Some(embedded) = group.load_balancer.take() {
            let load_balancer = self
                .repository
                .get_load_balancer(&embedded.id)
                .await
                .map_err(|e| ServiceError::repository(OP, e))?;
            group.load_balancer = Some(load_balancer);
        }

        instance.auto_scaling_group = Some(group);
        Ok(instance)
    }
}

#[async_trait]
impl<R: PublicCloudRepository> PublicCloudService for PublicCloudApiService<R> {
    async fn get_all_instances(&self) -> Result<Vec<Instance>, ServiceError> {
        const OP: &str = "get_all_instances";

        let summaries = self
            .repository
            .list_instances()
            .await
            .map_err(|e| ServiceError::repository(OP, e))?;
        debug!(count = summaries.len(), "fanning out detail fetches");

        // Completion order, not index order: the result list is unordered
        // by contract. The first error drops the stream and with it every
        // fetch still in flight.
        stream::iter(
            summaries
                .into_iter()
                .map(|summary| self.fetch_instance(summary.id)),
        )
        .buffer_unordered(MAX_CONCURRENT_DETAIL_FETCHES)
        .try_collect()
        .await
    }

    async fn get_instance(&self, id: &Uuid) -> Result<Instance, ServiceError> {
        self.fetch_instance(*id).await
    }

    async fn create_instance(
        &self,
        instance: &CreateInstance,
    ) -> Result<Instance, ServiceError> {
        const OP: &str = "create_instance";

        let launched = self
            .repository
            .create_instance(instance)
            .await
            .map_err(|e| ServiceError::repository(OP, e))?;
        debug!(id = %launched.id, "instance launched, fetching detail");

        self.fetch_instance(launched.id).await
    }

    async fn update_instance(
        &self,
        instance: &UpdateInstance,
    ) -> Result<Instance, ServiceError> {
        const OP: &str = "update_instance";

        let updated = self
            .repository
            .update_instance(instance)
            .await
            .map_err(|e| ServiceError::repository(OP, e))?;

        self.fetch_instance(updated.id).await
    }

    async fn delete_instance(&self, id: &Uuid) -> Result<(), ServiceError> {
        self.repository
            .delete_instance(id)
            .await
            .map_err(|e| ServiceError::repository("delete_instance", e))
    }

    async fn get_available_instance_types_for_update(
        &self,
        id: &Uuid,
    ) -> Result<InstanceTypes, ServiceError> {
        self.repository
            .available_instance_types_for_update(id)
            .await
            .map_err(|e| {
                ServiceError::repository("get_available_instance_types_for_update", e)
            })
    }

    async fn get_regions(&self) -> Result<Regions, ServiceError> {
        self.repository
            .regions()
            .await
            .map_err(|e| ServiceError::repository("get_regions", e))
    }
}
