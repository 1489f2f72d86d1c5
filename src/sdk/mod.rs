// Copyright (c) 2025 - Cowboy AI, Inc.
//! Remote SDK Surface
//!
//! The public-cloud service is consumed through a narrow typed interface:
//! [`client::PublicCloudApi`] lists the nine operations the repository
//! needs, [`model`] mirrors the JSON wire shapes. The production client
//! ([`client::HttpPublicCloudApi`]) speaks HTTP with the `X-LSW-Auth`
//! credential header; tests substitute their own implementation of the
//! trait.

pub mod client;
pub mod model;

pub use client::{ApiConfig, HttpPublicCloudApi, PublicCloudApi, SdkError, SdkResult};
pub use model::ErrorResponse;
