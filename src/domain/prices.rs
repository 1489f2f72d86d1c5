// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Prices
//!
//! Prices are delivered by the remote API as decimal strings and passed
//! through untouched; this crate does no monetary arithmetic.

use serde::{Deserialize, Serialize};

/// Price of one billing line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub hourly_price: String,
    pub monthly_price: String,
}

/// Storage prices per root-disk storage type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePrices {
    pub local: Price,
    pub central: Price,
}

/// Price card of a catalog instance type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    pub currency: String,
    pub currency_symbol: String,
    pub compute: Price,
    pub storage: StoragePrices,
}
