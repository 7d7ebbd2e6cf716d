//! Remote vendor resolution.
//!
//! [`VendorApi`] is the seam between the lookup pipeline and the network;
//! [`MacAddressIoClient`] is the HTTP implementation used by the binary.

use std::time::Duration;

use async_trait::async_trait;
use macq_common::config::{ApiKey, Config, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use macq_common::network::mac::MacAddress;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup service returned status {status}")]
    RemoteError { status: u16 },
    /// The wrapped error has its URL stripped, since the query string holds the key.
    #[error("failed to reach lookup service")]
    TransportError(#[source] reqwest::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::TransportError(err.without_url())
    }
}

/// Resolves the vendor of a MAC address.
#[async_trait]
pub trait VendorApi: Send + Sync {
    /// Returns the vendor text exactly as reported by the service.
    async fn lookup(&self, mac: &MacAddress) -> Result<String, LookupError>;
}

/// Connection settings for [`MacAddressIoClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Log the raw key alongside the request parameters.
    pub reveal_key: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("macq/{}", env!("CARGO_PKG_VERSION")),
            reveal_key: false,
        }
    }
}

impl From<&Config> for ApiConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            base_url: cfg.api_url.clone(),
            timeout: cfg.timeout,
            reveal_key: cfg.reveals_key(),
            ..Self::default()
        }
    }
}

/// Client for the macaddress.io lookup endpoint.
///
/// Issues one GET per address with `output=vendor`, which makes the service
/// answer with the company name as plain text.
pub struct MacAddressIoClient {
    client: Client,
    api_key: ApiKey,
    config: ApiConfig,
}

impl MacAddressIoClient {
    pub fn with_config(api_key: ApiKey, config: ApiConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }
}

#[async_trait]
impl VendorApi for MacAddressIoClient {
    async fn lookup(&self, mac: &MacAddress) -> Result<String, LookupError> {
        info!("searching for {} at {}", mac, self.config.base_url);
        debug!(
            api_key = %self.api_key.shown(self.config.reveal_key),
            search = %mac,
            output = "vendor",
            "request parameters"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("apiKey", self.api_key.expose()),
                ("search", mac.as_str()),
                ("output", "vendor"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::RemoteError {
                status: status.as_u16(),
            });
        }

        let vendor = response.text().await?;
        debug!("{} ({}) -> {:?}", mac, mac.oui(), vendor);
        Ok(vendor)
    }
}
