//! HTTP client for the fleetsim API.
//!
//! Used by the CLI; the response types are the library's own exported
//! types, so the client stays a thin transport wrapper.

use anyhow::{Result, bail};
use reqwest::StatusCode;

use crate::alerts::Alert;
use crate::metrics::FleetSummary;
use crate::pool::WorkerStatus;
use crate::telemetry::MinerTelemetry;
use crate::telemetry::details::MinerDetails;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7786";

pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/api/v0{path}", self.base_url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn get_fleet(&self) -> Result<Vec<MinerTelemetry>> {
        self.get_json("/fleet").await
    }

    pub async fn get_summary(&self) -> Result<FleetSummary> {
        self.get_json("/fleet/summary").await
    }

    /// Fetch one machine's detail view; distinguishes an unknown
    /// address from transport failures.
    pub async fn get_miner(&self, address: &str) -> Result<MinerDetails> {
        let url = format!("{}/api/v0/miners/{address}", self.base_url);
        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            bail!("no miner with address {address}");
        }
        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn get_workers(&self) -> Result<Vec<WorkerStatus>> {
        self.get_json("/workers").await
    }

    pub async fn get_alerts(&self) -> Result<Vec<Alert>> {
        self.get_json("/alerts").await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
