// Copyright (c) 2025 - Cowboy AI, Inc.
//! Public Cloud HTTP Client
//!
//! The narrow SDK surface the repository depends on, plus its production
//! implementation over reqwest. The credential travels as the
//! `X-LSW-Auth` header, installed once into the client's default headers
//! at construction.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::model::{
    AutoScalingGroupDetails, Instance, InstanceDetails, InstanceList, InstanceTypeList,
    LaunchInstanceOpts, LoadBalancerDetails, RegionList, UpdateInstanceOpts,
};

/// Authentication header consumed by the remote API
const AUTH_HEADER: &str = "X-LSW-Auth";

/// SDK transport error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("remote API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl SdkError {
    /// Raw body of a non-2xx response, when one was received
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for SDK calls
pub type SdkResult<T> = Result<T, SdkError>;

/// Configuration for the public-cloud API connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL
    pub base_url: String,

    /// API token sent as `X-LSW-Auth`
    pub token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.leaseweb.com".to_string(),
            token: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// `PUBLICCLOUD_API_TOKEN` is required; `PUBLICCLOUD_API_URL` overrides
    /// the default endpoint.
    pub fn from_env() -> Result<Self, SdkError> {
        let token = std::env::var("PUBLICCLOUD_API_TOKEN").map_err(|_| {
            SdkError::Configuration("PUBLICCLOUD_API_TOKEN is not set".to_string())
        })?;
        let base_url = std::env::var("PUBLICCLOUD_API_URL")
            .unwrap_or_else(|_| Self::default().base_url);

        Ok(Self {
            base_url,
            token,
            timeout_secs: default_timeout(),
        })
    }
}

/// Narrow surface of the remote API consumed by the repository.
///
/// Every call may suspend on network I/O; dropping the returned future
/// aborts the underlying request.
#[async_trait]
pub trait PublicCloudApi: Send + Sync {
    async fn get_instance_list(&self) -> SdkResult<InstanceList>;

    async fn get_instance(&self, id: &str) -> SdkResult<InstanceDetails>;

    async fn launch_instance(&self, opts: &LaunchInstanceOpts) -> SdkResult<Instance>;

    async fn update_instance(
        &self,
        id: &str,
        opts: &UpdateInstanceOpts,
    ) -> SdkResult<InstanceDetails>;

    async fn terminate_instance(&self, id: &str) -> SdkResult<()>;

    async fn get_auto_scaling_group(&self, id: &str) -> SdkResult<AutoScalingGroupDetails>;

    async fn get_load_balancer(&self, id: &str) -> SdkResult<LoadBalancerDetails>;

    async fn get_update_instance_type_list(&self, id: &str) -> SdkResult<InstanceTypeList>;

    async fn get_region_list(&self) -> SdkResult<RegionList>;
}

/// Production implementation over HTTP
pub struct HttpPublicCloudApi {
    config: ApiConfig,
    client: Client,
}

impl HttpPublicCloudApi {
    /// Create a new client; the token is captured into the default headers
    /// once and reused for every request
    pub fn new(config: ApiConfig) -> Result<Self, SdkError> {
        info!("connecting to public cloud API at {}", config.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTH_HEADER,
            config
                .token
                .parse()
                .map_err(|_| SdkError::Configuration("invalid API token".to_string()))?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/publicCloud/v1{}", self.config.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> SdkResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Api { status, body });
        }
        Ok(response.json::<T>().await?)
    }

    async fn expect_success(response: reqwest::Response) -> SdkResult<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SdkError::Api { status, body });
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SdkResult<T> {
        debug!("GET {}", path);
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl PublicCloudApi for HttpPublicCloudApi {
    async fn get_instance_list(&self) -> SdkResult<InstanceList> {
        self.get_json("/instances").await
    }

    async fn get_instance(&self, id: &str) -> SdkResult<InstanceDetails> {
        self.get_json(&format!("/instances/{}", id)).await
    }

    async fn launch_instance(&self, opts: &LaunchInstanceOpts) -> SdkResult<Instance> {
        debug!("POST /instances");
        let response = self
            .client
            .post(self.url("/instances"))
            .json(opts)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_instance(
        &self,
        id: &str,
        opts: &UpdateInstanceOpts,
    ) -> SdkResult<InstanceDetails> {
        debug!("PUT /instances/{}", id);
        let response = self
            .client
            .put(self.url(&format!("/instances/{}", id)))
            .json(opts)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn terminate_instance(&self, id: &str) -> SdkResult<()> {
        debug!("DELETE /instances/{}", id);
        let response = self
            .client
            .delete(self.url(&format!("/instances/{}", id)))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn get_auto_scaling_group(&self, id: &str) -> SdkResult<AutoScalingGroupDetails> {
        self.get_json(&format!("/autoScalingGroups/{}", id)).await
    }

    async fn get_load_balancer(&self, id: &str) -> SdkResult<LoadBalancerDetails> {
        self.get_json(&format!("/loadBalancers/{}", id)).await
    }

    async fn get_update_instance_type_list(&self, id: &str) -> SdkResult<InstanceTypeList> {
        self.get_json(&format!("/instances/{}/instanceTypesUpdate", id))
            .await
    }

    async fn get_region_list(&self) -> SdkResult<RegionList> {
        self.get_json("/regions").await
    }
}
