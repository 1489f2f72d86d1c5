// Copyright (c) 2025 - Cowboy AI, Inc.
//! Public Cloud Repository
//!
//! Issues HTTP calls through the narrow SDK surface and delegates
//! translation to the adapter. The credential is captured once, by value,
//! when the underlying client is constructed; there is no other shared
//! state.
//!
//! Each failure is wrapped as a [`RepositoryError`] naming the repository
//! operation. When the remote answered with a structured error body, it is
//! best-effort decoded and attached; a body that does not parse leaves the
//! error unattached rather than failing the failure path.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::adapter::{self, AdapterError};
use crate::domain::{
    AutoScalingGroup, CreateInstance, Instance, InstanceTypes, LoadBalancer, Regions,
    UpdateInstance, Uuid,
};
use crate::ports::PublicCloudRepository;
use crate::sdk::{ApiConfig, ErrorResponse, HttpPublicCloudApi, PublicCloudApi, SdkError};

/// Repository failure with optional structured remote error
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The SDK call failed
    #[error("{operation}: {source}")]
    Sdk {
        operation: &'static str,
        #[source]
        source: SdkError,
        error_response: Option<ErrorResponse>,
    },

    /// The remote payload failed to translate into the domain
    #[error("{operation}: {source}")]
    Conversion {
        operation: &'static str,
        #[source]
        source: AdapterError,
    },
}

impl RepositoryError {
    /// Wrap an SDK failure, decoding the remote error body when present
    pub fn sdk(operation: &'static str, source: SdkError) -> Self {
        let error_response = source
            .response_body()
            .and_then(|body| serde_json::from_str(body).ok());
        Self::Sdk {
            operation,
            source,
            error_response,
        }
    }

    /// Wrap a conversion failure
    pub fn conversion(operation: &'static str, source: AdapterError) -> Self {
        Self::Conversion { operation, source }
    }

    /// Name of the failing repository operation
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Sdk { operation, .. } | Self::Conversion { operation, .. } => operation,
        }
    }

    /// Structured error body returned by the remote, if one was decoded
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Sdk { error_response, .. } => error_response.as_ref(),
            Self::Conversion { .. } => None,
        }
    }
}

/// Repository over the public-cloud SDK
pub struct PublicCloudApiRepository<A = HttpPublicCloudApi> {
    api: A,
}

impl PublicCloudApiRepository<HttpPublicCloudApi> {
    /// Create a repository over the production HTTP client
    pub fn new(config: ApiConfig) -> Result<Self, SdkError> {
        Ok(Self {
            api: HttpPublicCloudApi::new(config)?,
        })
    }
}

impl<A: PublicCloudApi> PublicCloudApiRepository<A> {
    /// Create a repository over any SDK implementation
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Take the SDK client back out; lets tests inspect a mock after use
    pub fn into_api(self) -> A {
        self.api
    }
}

#[async_trait]
impl<A: PublicCloudApi> PublicCloudRepository for PublicCloudApiRepository<A> {
    async fn list_instances(&self) -> Result<Vec<Instance>, RepositoryError> {
        const OP: &str = "list_instances";

        let list = self
            .api
            .get_instance_list()
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;
        debug!(total = list.metadata.total_count, "fetched instance list");

        list.instances
            .into_iter()
            .map(|payload| {
                adapter::instance_from_summary(payload)
                    .map_err(|e| RepositoryError::conversion(OP, e))
            })
            .collect()
    }

    async fn get_instance(&self, id: &Uuid) -> Result<Instance, RepositoryError> {
        const OP: &str = "get_instance";

        let payload = self
            .api
            .get_instance(&id.to_string())
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;

        adapter::instance_from_details(payload).map_err(|e| RepositoryError::conversion(OP, e))
    }

    async fn get_auto_scaling_group(
        &self,
        id: &Uuid,
    ) -> Result<AutoScalingGroup, RepositoryError> {
        const OP: &str = "get_auto_scaling_group";

        let payload = self
            .api
            .get_auto_scaling_group(&id.to_string())
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;

        adapter::auto_scaling_group_from_details(payload)
            .map_err(|e| RepositoryError::conversion(OP, e))
    }

    async fn get_load_balancer(&self, id: &Uuid) -> Result<LoadBalancer, RepositoryError> {
        const OP: &str = "get_load_balancer";

        let payload = self
            .api
            .get_load_balancer(&id.to_string())
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;

        adapter::load_balancer_from_details(payload)
            .map_err(|e| RepositoryError::conversion(OP, e))
    }

    async fn create_instance(
        &self,
        instance: &CreateInstance,
    ) -> Result<Instance, RepositoryError> {
        const OP: &str = "create_instance";

        let opts = adapter::to_launch_instance_request(instance);
        let payload = self
            .api
            .launch_instance(&opts)
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;
        debug!(id = %payload.id, "launched instance");

        adapter::instance_from_summary(payload).map_err(|e| RepositoryError::conversion(OP, e))
    }

    async fn update_instance(
        &self,
        instance: &UpdateInstance,
    ) -> Result<Instance, RepositoryError> {
        const OP: &str = "update_instance";

        let opts = adapter::to_update_instance_request(instance);
        let payload = self
            .api
            .update_instance(&instance.id.to_string(), &opts)
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;

        adapter::instance_from_details(payload).map_err(|e| RepositoryError::conversion(OP, e))
    }

    async fn delete_instance(&self, id: &Uuid) -> Result<(), RepositoryError> {
        const OP: &str = "delete_instance";

        self.api
            .terminate_instance(&id.to_string())
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))
    }

    async fn available_instance_types_for_update(
        &self,
        id: &Uuid,
    ) -> Result<InstanceTypes, RepositoryError> {
        const OP: &str = "available_instance_types_for_update";

        let list = self
            .api
            .get_update_instance_type_list(&id.to_string())
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;

        Ok(adapter::instance_types_from(list))
    }

    async fn regions(&self) -> Result<Regions, RepositoryError> {
        const OP: &str = "regions";

        let list = self
            .api
            .get_region_list()
            .await
            .map_err(|e| RepositoryError::sdk(OP, e))?;

        Ok(adapter::regions_from(list))
    }
}
